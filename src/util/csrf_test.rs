use super::*;

#[test]
fn token_from_cookies_finds_named_cookie() {
    let cookies = "sessionid=abc; csrftoken=tok123; theme=dark";
    assert_eq!(token_from_cookies(cookies, CSRF_COOKIE_NAME), Some("tok123".to_owned()));
}

#[test]
fn token_from_cookies_trims_surrounding_whitespace() {
    assert_eq!(
        token_from_cookies("  csrftoken=tok123 ", CSRF_COOKIE_NAME),
        Some("tok123".to_owned())
    );
}

#[test]
fn token_from_cookies_returns_none_when_absent() {
    assert_eq!(token_from_cookies("sessionid=abc; theme=dark", CSRF_COOKIE_NAME), None);
}

#[test]
fn token_from_cookies_treats_empty_value_as_missing() {
    assert_eq!(token_from_cookies("csrftoken=; sessionid=abc", CSRF_COOKIE_NAME), None);
}

#[test]
fn token_from_cookies_keeps_equals_signs_inside_value() {
    assert_eq!(
        token_from_cookies("csrftoken=a=b=c", CSRF_COOKIE_NAME),
        Some("a=b=c".to_owned())
    );
}

#[test]
fn token_from_cookies_ignores_name_suffix_matches() {
    assert_eq!(token_from_cookies("xcsrftoken=nope", CSRF_COOKIE_NAME), None);
}
