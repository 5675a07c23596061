//! Anti-forgery credential lookup.
//!
//! DESIGN
//! ======
//! The page may expose the token in three places; lookup order is fixed:
//! `<meta name="csrf-token">`, then a hidden `csrfmiddlewaretoken` input,
//! then the `csrftoken` cookie. State-changing calls abort client-side when
//! none of the three yields a non-empty value.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

/// Cookie holding the anti-forgery token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

#[cfg(feature = "csr")]
const CSRF_META_SELECTOR: &str = r#"meta[name="csrf-token"]"#;
#[cfg(feature = "csr")]
const CSRF_INPUT_SELECTOR: &str = "[name=csrfmiddlewaretoken]";

fn non_empty(token: String) -> Option<String> {
    if token.is_empty() { None } else { Some(token) }
}

/// Extract the named cookie's value from a `document.cookie` string.
///
/// Values may themselves contain `=`, so only the first separator splits.
pub fn token_from_cookies(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(cookie_name, _)| *cookie_name == name)
        .and_then(|(_, value)| non_empty(value.to_owned()))
}

/// Resolve the anti-forgery token from the page, if any source has one.
#[cfg(feature = "csr")]
pub fn csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;

    if let Ok(Some(meta)) = document.query_selector(CSRF_META_SELECTOR) {
        if let Some(token) = meta.get_attribute("content").and_then(non_empty) {
            return Some(token);
        }
    }

    if let Ok(Some(input)) = document.query_selector(CSRF_INPUT_SELECTOR) {
        if let Some(token) = input
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()
            .map(|el| el.value())
            .and_then(non_empty)
        {
            return Some(token);
        }
    }

    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    token_from_cookies(&cookies, CSRF_COOKIE_NAME)
}

/// Off-browser stub; there is no page to read a credential from.
#[cfg(not(feature = "csr"))]
pub fn csrf_token() -> Option<String> {
    None
}
