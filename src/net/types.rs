//! Wire DTOs for the marketplace REST endpoints the widgets consume.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field-for-field so serde can
//! do all shape validation; anything that fails to deserialize is treated as
//! a malformed payload and dropped at the call site.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Envelope for `GET /chats/active/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ActiveChatsResponse {
    #[serde(default)]
    pub chats: Vec<ChatSummary>,
}

/// One active conversation, as listed by the server.
///
/// The server returns both usernames; which one is "the other person"
/// depends on which side of the transaction the current user is on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    /// Conversation identifier.
    pub id: i64,
    /// Whether the current user is the buyer in this conversation.
    pub is_buyer: bool,
    pub seller_username: String,
    pub buyer_username: String,
    /// Avatar URL for the counterpart.
    pub other_user_profile_img: String,
    /// Messages not yet read by the current user.
    pub unread_count: u32,
    /// Title of the listing the conversation is about.
    pub post_title: String,
}

impl ChatSummary {
    /// Display name of the counterpart in this conversation.
    pub fn counterpart_name(&self) -> &str {
        if self.is_buyer {
            &self.seller_username
        } else {
            &self.buyer_username
        }
    }

    /// Whether the unread badge should be shown for this entry.
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0
    }
}

/// Envelope for `GET /chat/{id}/messages/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// One chat message as displayed in a window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Plain-text message body. Rendered as text, never as markup.
    pub content: String,
    /// Sender display name.
    pub sender: String,
    /// Server-formatted timestamp string; opaque to the client.
    pub created_at: String,
    /// Whether the current user authored this message.
    pub is_mine: bool,
}

impl ChatMessage {
    /// Builds the message entry appended after a successful send.
    ///
    /// The server echo carries the authoritative timestamp and sender, so the
    /// client never has to guess either; ownership is implied by the send.
    pub fn from_sent(sent: SentMessage) -> Self {
        Self {
            content: sent.content,
            sender: sent.sender,
            created_at: sent.created_at,
            is_mine: true,
        }
    }
}

/// Server echo of a successfully sent message.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SentMessage {
    pub content: String,
    pub sender: String,
    pub created_at: String,
}

/// Envelope for `POST /chat/{id}/send/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SendMessageResponse {
    pub status: String,
    pub message: Option<SentMessage>,
}

impl SendMessageResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Envelope for `GET /notifications/unread/count/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UnreadCountResponse {
    pub count: u64,
}

/// Envelope for `POST /highlights/{id}/appreciate/`.
///
/// `appreciation_stats` keys are `"level_N"` strings; see
/// [`crate::state::appreciation`] for the parsed form.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AppreciationResponse {
    pub success: bool,
    #[serde(default)]
    pub appreciation_stats: BTreeMap<String, u64>,
    #[serde(default)]
    pub total_appreciations: u64,
}
