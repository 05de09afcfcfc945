//! Small helpers around the browser document: CSRF token lookup, alerts, reloads.

use wasm_bindgen::JsCast;

pub const CSRF_INPUT_ID: &str = "csrf_token_input";
pub const CSRF_COOKIE: &str = "csrftoken";

/// Reads the CSRF token from the hidden page field, or the `csrftoken` cookie.
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window().and_then(|w| w.document())?;

    if let Some(input) = document
        .get_element_by_id(CSRF_INPUT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        let value = input.value();
        if !value.is_empty() {
            return Some(value);
        }
    }

    document
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
        .and_then(|doc| doc.cookie().ok())
        .and_then(|cookies| csrf_from_cookies(&cookies))
}

/// Token carried by a `Cookie` header value (or `document.cookie`).
pub fn csrf_from_cookies(cookies: &str) -> Option<String> {
    cookie_value(cookies, CSRF_COOKIE)
}

pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            leptos::logging::warn!("alert failed: {:?}", err);
        }
    }
}

pub fn reload() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            leptos::logging::error!("reload failed: {:?}", err);
        }
    }
}

pub fn scroll_into_view(element_id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_named_cookie() {
        let cookies = "sessionid=abc; csrftoken=tok123; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("tok123"));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn csrf_token_comes_from_the_csrftoken_cookie() {
        assert_eq!(
            csrf_from_cookies("sessionid=abc; csrftoken=Zx9").as_deref(),
            Some("Zx9")
        );
        assert!(csrf_from_cookies("sessionid=abc").is_none());
    }

    #[test]
    fn missing_or_empty_cookie_is_none() {
        assert!(cookie_value("csrftoken=; a=b", "csrftoken").is_none());
        assert!(cookie_value("", "csrftoken").is_none());
        assert!(cookie_value("xcsrftoken=1", "csrftoken").is_none());
    }
}
