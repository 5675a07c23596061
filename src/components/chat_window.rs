//! Floating conversation windows: chrome, message list, send form, dragging.
//!
//! DESIGN
//! ======
//! Each window reads its slice of [`WindowsState`] reactively by id, so a
//! discovery poll can never disturb it and closing simply drops the slice.
//! Minimizing toggles body/footer display only; the header stays visible
//! and nothing is re-fetched.

#[cfg(test)]
#[path = "chat_window_test.rs"]
mod chat_window_test;

use leptos::prelude::*;

use crate::net::types::ChatMessage;
use crate::state::windows::WindowsState;
use crate::util::drag::DragSession;

fn message_class(is_mine: bool) -> &'static str {
    if is_mine {
        "chat-message message-mine"
    } else {
        "chat-message message-other"
    }
}

fn body_display(minimized: bool) -> &'static str {
    if minimized { "none" } else { "block" }
}

fn footer_display(minimized: bool) -> &'static str {
    if minimized { "none" } else { "flex" }
}

/// All open windows, keyed by conversation id.
#[component]
pub fn ChatWindows(windows: RwSignal<WindowsState>) -> impl IntoView {
    view! {
        <For
            each=move || {
                windows
                    .get()
                    .windows
                    .iter()
                    .map(|w| (w.chat_id, w.post_title.clone()))
                    .collect::<Vec<_>>()
            }
            key=|(chat_id, _)| *chat_id
            children=move |(chat_id, post_title)| {
                view! { <ChatWindowView chat_id=chat_id post_title=post_title windows=windows/> }
            }
        />
    }
}

/// One conversation window.
#[component]
fn ChatWindowView(chat_id: i64, post_title: String, windows: RwSignal<WindowsState>) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let drag = RwSignal::new(None::<DragSession>);
    let window_ref = NodeRef::<leptos::html::Div>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // One full history load per window open; the response replaces the
    // list wholesale.
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_chat_messages(chat_id).await {
                Some(messages) => windows.update(|s| s.replace_messages(chat_id, messages)),
                None => log::error!("message load failed for chat {chat_id}"),
            }
        });
    }

    let minimized = move || windows.get().window(chat_id).is_some_and(|w| w.minimized);
    let position_css = move || {
        windows
            .get()
            .window(chat_id)
            .map_or_else(String::new, |w| w.position.css())
    };
    let messages = move || {
        windows
            .get()
            .window(chat_id)
            .map(|w| w.messages.clone())
            .unwrap_or_default()
    };
    let placeholder = move || {
        windows
            .get()
            .window(chat_id)
            .is_some_and(|w| w.show_placeholder())
    };

    // Keep the newest message visible after loads and appends.
    Effect::new(move || {
        let _count = messages().len();
        #[cfg(feature = "csr")]
        if let Some(el) = messages_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
        #[cfg(not(feature = "csr"))]
        let _ = messages_ref;
    });

    let on_header_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        let (origin_left, origin_top) = window_ref
            .get()
            .map_or((0.0, 0.0), |el| (f64::from(el.offset_left()), f64::from(el.offset_top())));
        windows.update(|s| s.begin_drag(chat_id, origin_left, origin_top));
        drag.set(Some(DragSession::begin(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
        )));
    };
    let on_header_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if let Some(mut session) = drag.get_untracked() {
            ev.prevent_default();
            let (dx, dy) = session.advance(f64::from(ev.client_x()), f64::from(ev.client_y()));
            drag.set(Some(session));
            windows.update(|s| s.drag_by(chat_id, dx, dy));
        }
    };
    let on_header_pointer_up = move |_ev: leptos::ev::PointerEvent| drag.set(None);

    let on_minimize = move |_| windows.update(|s| s.toggle_minimized(chat_id));
    let on_close = move |_| windows.update(|s| s.close(chat_id));

    let submit = move || {
        let content = input.get_untracked().trim().to_owned();
        if content.is_empty() {
            return;
        }
        // Clear first; a failed send is logged and dropped, not restored.
        input.set(String::new());
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::send_chat_message(chat_id, &content).await {
                    Ok(sent) => {
                        windows.update(|s| s.append_message(chat_id, ChatMessage::from_sent(sent)));
                    }
                    Err(err) => log::error!("message send failed for chat {chat_id}: {err}"),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = content;
    };

    view! {
        <div class="chat-window" class:minimized=minimized style=position_css node_ref=window_ref>
            <div
                class="chat-window-header"
                on:pointerdown=on_header_pointer_down
                on:pointermove=on_header_pointer_move
                on:pointerup=on_header_pointer_up
                on:pointercancel=on_header_pointer_up
                on:pointerleave=on_header_pointer_up
            >
                <div class="chat-window-title">{post_title}</div>
                <div class="chat-window-actions">
                    <button class="chat-window-minimize" on:click=on_minimize>
                        <i class="fas fa-minus"></i>
                    </button>
                    <button class="chat-window-close" on:click=on_close>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            </div>
            <div class="chat-window-body" style:display=move || body_display(minimized())>
                <div class="chat-window-messages" node_ref=messages_ref>
                    <Show when=placeholder>
                        <div class="no-messages">"Aucun message. Commencez la conversation!"</div>
                    </Show>
                    {move || {
                        messages()
                            .into_iter()
                            .map(|message| view! { <MessageView message=message/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
            <div class="chat-window-footer" style:display=move || footer_display(minimized())>
                <form
                    class="chat-window-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <input
                        type="text"
                        class="chat-window-input"
                        placeholder="Tapez votre message..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button type="submit" class="chat-window-send">
                        <i class="fas fa-paper-plane"></i>
                    </button>
                </form>
            </div>
        </div>
    }
}

/// One message row; alignment comes from the ownership flag. Content is
/// rendered as text, so server strings cannot inject markup.
#[component]
fn MessageView(message: ChatMessage) -> impl IntoView {
    view! {
        <div class=message_class(message.is_mine)>
            <div class="message-content">{message.content.clone()}</div>
            <div class="message-meta">
                <span class="message-sender">{message.sender.clone()}</span>
                " "
                <span class="message-time">{message.created_at.clone()}</span>
            </div>
        </div>
    }
}
