use super::*;

#[test]
fn message_class_reflects_ownership() {
    assert_eq!(message_class(true), "chat-message message-mine");
    assert_eq!(message_class(false), "chat-message message-other");
}

#[test]
fn minimize_hides_body_and_footer_only() {
    assert_eq!(body_display(false), "block");
    assert_eq!(body_display(true), "none");
    assert_eq!(footer_display(false), "flex");
    assert_eq!(footer_display(true), "none");
}
