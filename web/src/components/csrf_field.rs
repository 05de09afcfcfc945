use leptos::prelude::*;

use crate::page::{self, CSRF_INPUT_ID};

/// Hidden field holding the CSRF token that booking and chat requests send back.
/// The server fills it from the request's `csrftoken` cookie.
#[component]
pub fn CsrfField() -> impl IntoView {
    view! {
        <input type="hidden" id=CSRF_INPUT_ID name="csrfmiddlewaretoken" value=request_token() />
    }
}

#[cfg(feature = "ssr")]
fn request_token() -> String {
    use axum::http::{header::COOKIE, request::Parts};

    let token = use_context::<Parts>().and_then(|parts| {
        parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(page::csrf_from_cookies)
    });
    if token.is_none() {
        tracing::debug!("request carried no csrftoken cookie");
    }
    token.unwrap_or_default()
}

// On hydration the server-rendered field is already in the document.
#[cfg(not(feature = "ssr"))]
fn request_token() -> String {
    page::csrf_token().unwrap_or_default()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use axum::http::{header::COOKIE, Request};
    use leptos::reactive::owner::Owner;

    fn token_for(cookie: Option<&str>) -> String {
        let mut request = Request::builder();
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        let (parts, _) = request.body(()).unwrap().into_parts();

        let owner = Owner::new();
        owner.with(|| {
            provide_context(parts);
            request_token()
        })
    }

    #[test]
    fn field_is_filled_from_the_request_cookie() {
        assert_eq!(token_for(Some("sessionid=1; csrftoken=abc123")), "abc123");
    }

    #[test]
    fn field_is_empty_without_the_cookie() {
        assert_eq!(token_for(Some("sessionid=1")), "");
        assert_eq!(token_for(None), "");
    }
}
