//! Floating marketplace widgets: multi-window chat, a notification bell,
//! and appreciation buttons.
//!
//! ARCHITECTURE
//! ============
//! The crate compiles two ways. Natively, everything but the browser glue
//! builds, so state transitions and protocol parsing unit-test without a
//! browser. With the `csr` feature it compiles to WASM and the mount
//! functions below attach the widgets to the host page. The page itself is
//! rendered by the marketplace backend; these widgets only decorate it and
//! poll its REST endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
mod mount {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::app::FloatingChat;
    use crate::components::appreciation::AppreciationPanel;
    use crate::components::notification_bell::NotificationBell;
    use crate::state::notifications::should_mount_bell;

    fn init_instrumentation() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    fn body() -> Option<web_sys::HtmlElement> {
        document()?.body()
    }

    /// Find or create a widget container directly under `<body>`.
    fn container(id: &str) -> Option<web_sys::HtmlElement> {
        let document = document()?;
        if let Some(existing) = document.get_element_by_id(id) {
            return existing.dyn_into().ok();
        }
        let element = document.create_element("div").ok()?;
        element.set_id(id);
        body()?.append_child(&element).ok()?;
        element.dyn_into().ok()
    }

    /// Mount the floating chat and, where the page qualifies, the bell.
    #[wasm_bindgen]
    pub fn mount_widgets() {
        init_instrumentation();

        if let Some(host) = container("floating-chat-container") {
            leptos::mount::mount_to(host, FloatingChat).forget();
        }

        let body_classes = body().map(|b| b.class_name()).unwrap_or_default();
        if should_mount_bell(&body_classes) {
            if let Some(host) = container("notification-bell-container") {
                leptos::mount::mount_to(host, NotificationBell).forget();
            }
        }
    }

    /// Mount one appreciation panel into the element with the given id.
    #[wasm_bindgen]
    pub fn mount_appreciation(container_id: &str, highlight_id: i64) {
        init_instrumentation();

        let Some(host) = document()
            .and_then(|d| d.get_element_by_id(container_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            log::warn!("no appreciation container #{container_id}");
            return;
        };
        leptos::mount::mount_to(host, move || view! { <AppreciationPanel highlight_id=highlight_id/> })
            .forget();
    }
}
