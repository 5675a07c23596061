//! Floating-chat root: state ownership, discovery polling, view wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root owns the two chat state regions and the discovery poll handle.
//! Discovery replaces the conversation snapshot wholesale and never touches
//! open windows; window state changes only through user input and message
//! traffic.

use leptos::prelude::*;

use crate::components::chat_window::ChatWindows;
use crate::components::launcher::ChatLauncher;
use crate::state::chats::ChatListState;
use crate::state::windows::WindowsState;
#[cfg(feature = "csr")]
use crate::util::poll::{POLL_INTERVAL, start_poll};

/// Floating chat widget: launcher, conversation list, and windows.
#[component]
pub fn FloatingChat() -> impl IntoView {
    let chats = RwSignal::new(ChatListState::default());
    let windows = RwSignal::new(WindowsState::default());

    #[cfg(feature = "csr")]
    {
        let discovery = start_poll(POLL_INTERVAL, move || async move {
            match crate::net::api::fetch_active_chats().await {
                Some(list) => chats.update(|s| s.replace(list)),
                None => log::warn!("active-chat refresh failed; keeping last snapshot"),
            }
        });
        on_cleanup(move || discovery.stop());
    }

    view! {
        <div class="floating-chat-container">
            <ChatLauncher chats=chats windows=windows/>
        </div>
        <ChatWindows windows=windows/>
    }
}
