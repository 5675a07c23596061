//! Launcher control and collapsible conversation list.
//!
//! The list is rebuilt from scratch on every snapshot change, mirroring the
//! wholesale replace in [`crate::state::chats::ChatListState`]; open windows
//! live elsewhere and are untouched by rebuilds.

use leptos::prelude::*;

use crate::net::types::ChatSummary;
use crate::state::chats::ChatListState;
use crate::state::windows::WindowsState;

/// Launcher button showing the conversation count, plus the entry list.
/// Clicking the launcher only flips list visibility; no data is fetched.
#[component]
pub fn ChatLauncher(chats: RwSignal<ChatListState>, windows: RwSignal<WindowsState>) -> impl IntoView {
    let list_visible = RwSignal::new(false);

    view! {
        <Show when=move || chats.get().has_chats()>
            <div class="chat-main-button" on:click=move |_| list_visible.update(|v| *v = !*v)>
                <i class="fas fa-comments"></i>
                " "
                <span class="chat-count">{move || chats.get().count()}</span>
            </div>
            <div
                class="chat-list"
                style:display=move || if list_visible.get() { "block" } else { "none" }
            >
                {move || {
                    chats
                        .get()
                        .chats
                        .into_iter()
                        .map(|chat| view! { <ChatListEntry chat=chat windows=windows/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Show>
    }
}

/// One conversation entry: avatar, unread badge, counterpart, listing title.
#[component]
fn ChatListEntry(chat: ChatSummary, windows: RwSignal<WindowsState>) -> impl IntoView {
    let counterpart = chat.counterpart_name().to_owned();
    let avatar = chat.other_user_profile_img.clone();
    let title = chat.post_title.clone();
    let unread = chat.unread_count;

    let on_activate = move |_| {
        windows.update(|w| {
            w.toggle(&chat);
        });
    };

    view! {
        <div class="chat-button" on:click=on_activate>
            <div class="chat-button-avatar">
                <img src=avatar alt=counterpart.clone()/>
                <Show when=move || (unread > 0)>
                    <span class="unread-badge">{unread}</span>
                </Show>
            </div>
            <div class="chat-button-info">
                <div class="chat-button-name">{counterpart.clone()}</div>
                <div class="chat-button-title">{title}</div>
            </div>
        </div>
    }
}
