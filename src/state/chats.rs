//! Conversation-snapshot state for the floating chat launcher.
//!
//! DESIGN
//! ======
//! The server owns the conversation set; the client keeps a read-only
//! snapshot replaced wholesale on every poll. Keeping this separate from
//! window state means discovery can never disturb an open conversation.

#[cfg(test)]
#[path = "chats_test.rs"]
mod chats_test;

use crate::net::types::ChatSummary;

/// Last-fetched active-conversation snapshot, order as returned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatListState {
    pub chats: Vec<ChatSummary>,
}

impl ChatListState {
    /// Replace the snapshot with a fresh poll result.
    ///
    /// An empty result clears the launcher and list; previous renditions
    /// left stale entries on screen in that case.
    pub fn replace(&mut self, chats: Vec<ChatSummary>) {
        self.chats = chats;
    }

    /// Count shown on the launcher; always the snapshot length.
    pub fn count(&self) -> usize {
        self.chats.len()
    }

    /// Whether the launcher and list should be rendered at all.
    pub fn has_chats(&self) -> bool {
        !self.chats.is_empty()
    }
}
