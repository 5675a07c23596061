//! Unread-notification counts for the bell indicator and menu badge.
//!
//! Two poll loops feed the same endpoint into two view regions; each count
//! is replaced independently, so a slow response only stales its own region.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Unread counts as last reported by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    /// Count shown on the floating bell indicator.
    pub count: u64,
    /// Count mirrored into the navigation-menu badge.
    pub menu_count: u64,
}

impl NotificationState {
    /// Whether the bell should carry its attention styling.
    pub fn has_notifications(&self) -> bool {
        self.count > 0
    }

    /// Text shown on the bell indicator.
    pub fn indicator_label(&self) -> String {
        self.count.to_string()
    }

    /// Whether the menu badge should be visible at all.
    pub fn menu_badge_visible(&self) -> bool {
        self.menu_count > 0
    }
}

/// Mount gate for the bell: only for signed-in users, and never on the
/// dedicated chat page where the bell would duplicate in-page state.
pub fn should_mount_bell(body_classes: &str) -> bool {
    let mut logged_in = false;
    for class in body_classes.split_whitespace() {
        match class {
            "logged-in" => logged_in = true,
            "chat-page" => return false,
            _ => {}
        }
    }
    logged_in
}
