//! Notification bell indicator and navigation-menu badge.
//!
//! The bell owns its state; the menu badge belongs to the page template, so
//! that poll reconciles the foreign element in place instead of rendering.

#[cfg(test)]
#[path = "notification_bell_test.rs"]
mod notification_bell_test;

use leptos::prelude::*;

use crate::state::notifications::NotificationState;
#[cfg(feature = "csr")]
use crate::util::poll::{POLL_INTERVAL, start_poll};

/// Template-owned element updated by the menu poll.
pub const MENU_BADGE_ID: &str = "notification-count-menu";

#[cfg(any(test, feature = "csr"))]
fn menu_badge_display(count: u64) -> &'static str {
    if count > 0 { "inline-block" } else { "none" }
}

/// Floating bell with an unread count and a link to the notification page.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let notifications = RwSignal::new(NotificationState::default());

    #[cfg(feature = "csr")]
    {
        let indicator_poll = start_poll(POLL_INTERVAL, move || async move {
            match crate::net::api::fetch_unread_count().await {
                Some(count) => notifications.update(|s| s.count = count),
                None => log::warn!("unread-count refresh failed; keeping last value"),
            }
        });
        let menu_poll = start_poll(POLL_INTERVAL, move || async move {
            if let Some(count) = crate::net::api::fetch_unread_count().await {
                notifications.update(|s| s.menu_count = count);
                apply_menu_badge(count);
            }
        });
        on_cleanup(move || {
            indicator_poll.stop();
            menu_poll.stop();
        });
    }

    view! {
        <div
            class="notification-indicator"
            class=("has-notifications", move || notifications.get().has_notifications())
        >
            <span class="notification-count">{move || notifications.get().indicator_label()}</span>
            <a href="/notifications/" class="notification-link">
                <i class="fas fa-bell"></i>
            </a>
        </div>
    }
}

/// Write the count into the menu badge and hide it at zero.
#[cfg(feature = "csr")]
fn apply_menu_badge(count: u64) {
    use wasm_bindgen::JsCast;

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MENU_BADGE_ID))
    else {
        return;
    };
    element.set_text_content(Some(&count.to_string()));
    if let Ok(html) = element.dyn_into::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("display", menu_badge_display(count));
    }
}
