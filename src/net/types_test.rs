use super::*;

fn summary(is_buyer: bool) -> ChatSummary {
    ChatSummary {
        id: 1,
        is_buyer,
        seller_username: "bob".to_owned(),
        buyer_username: "ann".to_owned(),
        other_user_profile_img: "/a.png".to_owned(),
        unread_count: 2,
        post_title: "Bike".to_owned(),
    }
}

// =============================================================
// ChatSummary
// =============================================================

#[test]
fn counterpart_name_is_seller_when_user_is_buyer() {
    assert_eq!(summary(true).counterpart_name(), "bob");
}

#[test]
fn counterpart_name_is_buyer_when_user_is_seller() {
    assert_eq!(summary(false).counterpart_name(), "ann");
}

#[test]
fn has_unread_only_when_count_positive() {
    let mut s = summary(true);
    assert!(s.has_unread());
    s.unread_count = 0;
    assert!(!s.has_unread());
}

#[test]
fn active_chats_payload_deserializes() {
    let raw = r#"{"chats": [{"id":1, "is_buyer":true, "seller_username":"bob",
        "buyer_username":"ann", "other_user_profile_img":"/a.png",
        "unread_count":2, "post_title":"Bike"}]}"#;
    let parsed: ActiveChatsResponse = serde_json::from_str(raw).expect("payload should parse");
    assert_eq!(parsed.chats.len(), 1);
    let chat = &parsed.chats[0];
    assert_eq!(chat.counterpart_name(), "bob");
    assert_eq!(chat.post_title, "Bike");
    assert_eq!(chat.unread_count, 2);
}

#[test]
fn active_chats_payload_tolerates_missing_list() {
    let parsed: ActiveChatsResponse = serde_json::from_str("{}").expect("payload should parse");
    assert!(parsed.chats.is_empty());
}

// =============================================================
// Messages
// =============================================================

#[test]
fn messages_payload_deserializes_in_order() {
    let raw = r#"{"messages": [
        {"content":"salut", "sender":"bob", "created_at":"11:59", "is_mine":false},
        {"content":"hi", "sender":"ann", "created_at":"12:00", "is_mine":true}
    ]}"#;
    let parsed: MessagesResponse = serde_json::from_str(raw).expect("payload should parse");
    assert_eq!(parsed.messages.len(), 2);
    assert_eq!(parsed.messages[0].content, "salut");
    assert!(!parsed.messages[0].is_mine);
    assert!(parsed.messages[1].is_mine);
}

#[test]
fn from_sent_marks_message_as_mine_and_keeps_server_fields() {
    let sent = SentMessage {
        content: "hi".to_owned(),
        sender: "ann".to_owned(),
        created_at: "12:00".to_owned(),
    };
    let msg = ChatMessage::from_sent(sent);
    assert!(msg.is_mine);
    assert_eq!(msg.content, "hi");
    assert_eq!(msg.sender, "ann");
    assert_eq!(msg.created_at, "12:00");
}

#[test]
fn send_response_success_detection() {
    let raw = r#"{"status":"success", "message":{"content":"hi","sender":"ann","created_at":"12:00"}}"#;
    let parsed: SendMessageResponse = serde_json::from_str(raw).expect("payload should parse");
    assert!(parsed.is_success());
    assert_eq!(parsed.message.expect("echo present").content, "hi");

    let failed: SendMessageResponse =
        serde_json::from_str(r#"{"status":"error", "message":null}"#).expect("payload should parse");
    assert!(!failed.is_success());
    assert!(failed.message.is_none());
}

// =============================================================
// Notifications and appreciation
// =============================================================

#[test]
fn unread_count_payload_deserializes() {
    let parsed: UnreadCountResponse = serde_json::from_str(r#"{"count": 3}"#).expect("payload should parse");
    assert_eq!(parsed.count, 3);
}

#[test]
fn appreciation_payload_deserializes_stats_map() {
    let raw = r#"{"success":true, "appreciation_stats":{"level_1":4,"level_3":1}, "total_appreciations":5}"#;
    let parsed: AppreciationResponse = serde_json::from_str(raw).expect("payload should parse");
    assert!(parsed.success);
    assert_eq!(parsed.appreciation_stats.get("level_1"), Some(&4));
    assert_eq!(parsed.total_appreciations, 5);
}

#[test]
fn appreciation_payload_tolerates_missing_stats() {
    let parsed: AppreciationResponse =
        serde_json::from_str(r#"{"success":false}"#).expect("payload should parse");
    assert!(!parsed.success);
    assert!(parsed.appreciation_stats.is_empty());
    assert_eq!(parsed.total_appreciations, 0);
}
