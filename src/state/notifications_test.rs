use super::*;

#[test]
fn default_state_has_no_notifications() {
    let state = NotificationState::default();
    assert!(!state.has_notifications());
    assert!(!state.menu_badge_visible());
    assert_eq!(state.indicator_label(), "0");
}

#[test]
fn positive_count_lights_the_bell() {
    let state = NotificationState { count: 3, menu_count: 0 };
    assert!(state.has_notifications());
    assert_eq!(state.indicator_label(), "3");
}

#[test]
fn menu_badge_follows_its_own_count() {
    let state = NotificationState { count: 0, menu_count: 2 };
    assert!(!state.has_notifications());
    assert!(state.menu_badge_visible());
}

// =============================================================
// Mount gate
// =============================================================

#[test]
fn bell_mounts_for_logged_in_body() {
    assert!(should_mount_bell("logged-in"));
    assert!(should_mount_bell("theme-dark logged-in sidebar-open"));
}

#[test]
fn bell_skips_anonymous_and_chat_pages() {
    assert!(!should_mount_bell(""));
    assert!(!should_mount_bell("theme-dark"));
    assert!(!should_mount_bell("logged-in chat-page"));
    assert!(!should_mount_bell("chat-page logged-in"));
}

#[test]
fn bell_gate_requires_exact_class_names() {
    assert!(!should_mount_bell("logged-in-banner"));
    assert!(should_mount_bell("logged-in chat-page-link"));
}
