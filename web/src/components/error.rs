use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

pub const FALLBACK_ERROR: &str = "Something went wrong. Please try again.";

/// Inline failure notice used where a section could not load.
#[component]
pub fn ErrorView(#[prop(optional, into)] title: Option<String>, message: String) -> impl IntoView {
    let message = if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    };

    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {title.map(|title| view! { <strong class="error-title">{title}</strong> })}
            <span class="error-message">{message}</span>
        </MessageBar>
    }
}
