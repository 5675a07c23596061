//! REST helpers for the marketplace endpoints.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`. Off-browser
//! builds: stubs, since every endpoint is only meaningful on the page.
//!
//! ERROR HANDLING
//! ==============
//! Read endpoints surface `Option` so a failed poll degrades to the
//! last-known state. Write endpoints surface `ApiError` so callers can log
//! which of the four failure classes occurred; nothing is retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

use super::types::{AppreciationResponse, ChatMessage, ChatSummary, SentMessage};
#[cfg(feature = "csr")]
use super::types::{ActiveChatsResponse, MessagesResponse, SendMessageResponse, UnreadCountResponse};

/// Failure classes for endpoint calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No anti-forgery credential could be found on the page.
    #[error("missing anti-forgery credential")]
    MissingCredential,
    /// The request never produced a response (network, DNS, abort).
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body did not have the expected shape.
    #[error("malformed payload: {0}")]
    Payload(String),
}

#[cfg(any(test, feature = "csr"))]
const ACTIVE_CHATS_ENDPOINT: &str = "/chats/active/";
#[cfg(any(test, feature = "csr"))]
const UNREAD_COUNT_ENDPOINT: &str = "/notifications/unread/count/";

#[cfg(any(test, feature = "csr"))]
fn chat_messages_endpoint(chat_id: i64) -> String {
    format!("/chat/{chat_id}/messages/")
}

#[cfg(any(test, feature = "csr"))]
fn chat_send_endpoint(chat_id: i64) -> String {
    format!("/chat/{chat_id}/send/")
}

#[cfg(any(test, feature = "csr"))]
fn appreciate_endpoint(highlight_id: i64) -> String {
    format!("/highlights/{highlight_id}/appreciate/")
}

/// Characters kept literal in `application/x-www-form-urlencoded` values.
#[cfg(any(test, feature = "csr"))]
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[cfg(any(test, feature = "csr"))]
fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(name, FORM),
                utf8_percent_encode(value, FORM)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Fetch the current user's active conversations.
/// Returns `None` on any failure so the caller keeps its last snapshot.
pub async fn fetch_active_chats() -> Option<Vec<ChatSummary>> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(ACTIVE_CHATS_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let parsed: ActiveChatsResponse = resp.json().await.ok()?;
        Some(parsed.chats)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Fetch the full message history for one conversation.
pub async fn fetch_chat_messages(chat_id: i64) -> Option<Vec<ChatMessage>> {
    #[cfg(feature = "csr")]
    {
        let url = chat_messages_endpoint(chat_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let parsed: MessagesResponse = resp.json().await.ok()?;
        Some(parsed.messages)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = chat_id;
        None
    }
}

/// Fetch the unread-notification count.
pub async fn fetch_unread_count() -> Option<u64> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(UNREAD_COUNT_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let parsed: UnreadCountResponse = resp.json().await.ok()?;
        Some(parsed.count)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Send one chat message and return the server's echo.
///
/// # Errors
///
/// Returns an [`ApiError`] when the credential is missing, the request fails,
/// the server answers with a non-success status, or the echo is malformed.
pub async fn send_chat_message(chat_id: i64, content: &str) -> Result<SentMessage, ApiError> {
    #[cfg(feature = "csr")]
    {
        let token = crate::util::csrf::csrf_token().ok_or(ApiError::MissingCredential)?;
        let body = encode_form(&[("content", content)]);
        let resp = gloo_net::http::Request::post(&chat_send_endpoint(chat_id))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("X-CSRFToken", &token)
            .header("X-Requested-With", "XMLHttpRequest")
            .body(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let parsed: SendMessageResponse = resp.json().await.map_err(|e| ApiError::Payload(e.to_string()))?;
        if !parsed.is_success() {
            return Err(ApiError::Payload(format!("unexpected send status: {}", parsed.status)));
        }
        parsed
            .message
            .ok_or_else(|| ApiError::Payload("send echo carried no message".to_owned()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (chat_id, content);
        Err(ApiError::Transport("not available off-browser".to_owned()))
    }
}

/// Record an appreciation for a highlight and return the refreshed stats.
///
/// # Errors
///
/// Same failure classes as [`send_chat_message`].
pub async fn send_appreciation(highlight_id: i64, level: u8) -> Result<AppreciationResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let token = crate::util::csrf::csrf_token().ok_or(ApiError::MissingCredential)?;
        let body = encode_form(&[("appreciation_level", &level.to_string())]);
        let resp = gloo_net::http::Request::post(&appreciate_endpoint(highlight_id))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("X-CSRFToken", &token)
            .header("X-Requested-With", "XMLHttpRequest")
            .body(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json().await.map_err(|e| ApiError::Payload(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (highlight_id, level);
        Err(ApiError::Transport("not available off-browser".to_owned()))
    }
}
