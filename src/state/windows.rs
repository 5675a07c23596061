//! Window lifecycle and per-window message state for the floating chat.
//!
//! DESIGN
//! ======
//! Windows are ephemeral client-side state: created by activating a
//! conversation entry, destroyed by the close control or the toggle
//! shortcut, never persisted. Every transition is a synchronous mutation
//! driven by one discrete input event, so methods here take `&mut self`
//! and the signal wrapper provides the single-writer discipline.

#[cfg(test)]
#[path = "windows_test.rs"]
mod windows_test;

use crate::net::types::{ChatMessage, ChatSummary};

/// Where a window sits on screen.
///
/// Anchoring and explicit coordinates are mutually exclusive; the first
/// drag converts to pixels and anchoring is never restored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowPosition {
    /// Default placement in the bottom-right corner.
    Anchored,
    /// Explicit placement after the user dragged the window.
    Pixels { left: f64, top: f64 },
}

impl WindowPosition {
    /// Inline style for this position. Pixel placement resets the anchor
    /// sides so the two strategies never fight.
    pub fn css(&self) -> String {
        match self {
            Self::Anchored => "bottom: 20px; right: 20px;".to_owned(),
            Self::Pixels { left, top } => {
                format!("left: {left}px; top: {top}px; bottom: auto; right: auto;")
            }
        }
    }
}

/// One open (or minimized) conversation window.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatWindow {
    pub chat_id: i64,
    pub counterpart: String,
    pub post_title: String,
    pub minimized: bool,
    pub position: WindowPosition,
    /// Displayed messages, oldest first.
    pub messages: Vec<ChatMessage>,
    /// Set once the initial history load has resolved; distinguishes
    /// "still loading" from "loaded and empty" for the placeholder.
    pub loaded: bool,
}

impl ChatWindow {
    fn open(chat_id: i64, counterpart: String, post_title: String) -> Self {
        Self {
            chat_id,
            counterpart,
            post_title,
            minimized: false,
            position: WindowPosition::Anchored,
            messages: Vec::new(),
            loaded: false,
        }
    }

    /// Whether the empty-conversation placeholder should be shown.
    pub fn show_placeholder(&self) -> bool {
        self.loaded && self.messages.is_empty()
    }
}

/// All currently displayed chat windows, at most one per conversation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowsState {
    pub windows: Vec<ChatWindow>,
}

impl WindowsState {
    pub fn window(&self, chat_id: i64) -> Option<&ChatWindow> {
        self.windows.iter().find(|w| w.chat_id == chat_id)
    }

    fn window_mut(&mut self, chat_id: i64) -> Option<&mut ChatWindow> {
        self.windows.iter_mut().find(|w| w.chat_id == chat_id)
    }

    pub fn is_open(&self, chat_id: i64) -> bool {
        self.window(chat_id).is_some()
    }

    /// Activate a conversation entry: open its window, or close the window
    /// that already exists (regardless of minimized state). Returns `true`
    /// when a window was opened.
    pub fn toggle(&mut self, summary: &ChatSummary) -> bool {
        if self.is_open(summary.id) {
            self.close(summary.id);
            return false;
        }
        self.windows.push(ChatWindow::open(
            summary.id,
            summary.counterpart_name().to_owned(),
            summary.post_title.clone(),
        ));
        true
    }

    /// Remove a window and all its in-memory message state.
    pub fn close(&mut self, chat_id: i64) {
        self.windows.retain(|w| w.chat_id != chat_id);
    }

    /// Flip body/footer visibility; identity and messages are untouched.
    pub fn toggle_minimized(&mut self, chat_id: i64) {
        if let Some(window) = self.window_mut(chat_id) {
            window.minimized = !window.minimized;
        }
    }

    /// Replace a window's history with a resolved load.
    pub fn replace_messages(&mut self, chat_id: i64, messages: Vec<ChatMessage>) {
        if let Some(window) = self.window_mut(chat_id) {
            window.messages = messages;
            window.loaded = true;
        }
    }

    /// Append the echo of a successful send.
    pub fn append_message(&mut self, chat_id: i64, message: ChatMessage) {
        if let Some(window) = self.window_mut(chat_id) {
            window.messages.push(message);
        }
    }

    /// Pin an anchored window to its current on-screen offsets so drag
    /// deltas have a pixel origin to apply to. No-op once already pixeled.
    pub fn begin_drag(&mut self, chat_id: i64, origin_left: f64, origin_top: f64) {
        if let Some(window) = self.window_mut(chat_id) {
            if window.position == WindowPosition::Anchored {
                window.position = WindowPosition::Pixels {
                    left: origin_left,
                    top: origin_top,
                };
            }
        }
    }

    /// Apply one pointer-move delta to a window's pixel position.
    pub fn drag_by(&mut self, chat_id: i64, dx: f64, dy: f64) {
        if let Some(window) = self.window_mut(chat_id) {
            if let WindowPosition::Pixels { left, top } = window.position {
                window.position = WindowPosition::Pixels {
                    left: left + dx,
                    top: top + dy,
                };
            }
        }
    }
}
