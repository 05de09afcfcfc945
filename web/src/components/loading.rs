use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn LoadingView(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-container" role="status">
            <Spinner size=SpinnerSize::Medium />
            <p class="loading-message">{message}</p>
        </div>
    }
}
