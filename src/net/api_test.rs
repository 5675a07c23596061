use super::*;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn chat_messages_endpoint_formats_expected_path() {
    assert_eq!(chat_messages_endpoint(7), "/chat/7/messages/");
}

#[test]
fn chat_send_endpoint_formats_expected_path() {
    assert_eq!(chat_send_endpoint(7), "/chat/7/send/");
}

#[test]
fn appreciate_endpoint_formats_expected_path() {
    assert_eq!(appreciate_endpoint(42), "/highlights/42/appreciate/");
}

#[test]
fn fixed_endpoints_have_trailing_slashes() {
    assert_eq!(ACTIVE_CHATS_ENDPOINT, "/chats/active/");
    assert_eq!(UNREAD_COUNT_ENDPOINT, "/notifications/unread/count/");
}

// =============================================================
// Form encoding
// =============================================================

#[test]
fn encode_form_keeps_unreserved_characters() {
    assert_eq!(encode_form(&[("content", "hello-world_1.0~x")]), "content=hello-world_1.0~x");
}

#[test]
fn encode_form_escapes_reserved_and_non_ascii() {
    assert_eq!(
        encode_form(&[("content", "salut ça va?")]),
        "content=salut%20%C3%A7a%20va%3F"
    );
}

#[test]
fn encode_form_joins_multiple_fields() {
    assert_eq!(
        encode_form(&[("a", "1"), ("b", "2&3")]),
        "a=1&b=2%263"
    );
}

// =============================================================
// Error display
// =============================================================

#[test]
fn api_error_messages_name_the_failure_class() {
    assert_eq!(ApiError::MissingCredential.to_string(), "missing anti-forgery credential");
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "transport error: offline");
    assert_eq!(ApiError::Status(502).to_string(), "server returned status 502");
    assert_eq!(
        ApiError::Payload("bad shape".to_owned()).to_string(),
        "malformed payload: bad shape"
    );
}
