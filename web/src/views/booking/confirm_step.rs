use leptos::{prelude::*, task::spawn_local};
use thaw::*;

use crate::booking::{BookingApi, BookingError, BookingWizard, HttpBookingApi, SubmissionOutcome};
use crate::config::ClientConfig;
use crate::page;
use crate::views::booking::report_error;

#[component]
pub fn ConfirmStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let details = Memo::new(move |_| wizard.with(|w| w.confirmation()));
    let is_submitting = Signal::derive(move || wizard.with(|w| w.submit_control().disabled));

    let handle_confirm = move || {
        let payload = match wizard.try_update(|w| w.begin_submission()) {
            Some(Ok(payload)) => payload,
            Some(Err(err)) => {
                report_error(&err);
                return;
            }
            None => return,
        };

        let Some(csrf_token) = page::csrf_token() else {
            let err = BookingError::CollaboratorUnavailable(page::CSRF_INPUT_ID.to_string());
            leptos::logging::error!("Cannot submit booking: {}", err);
            if let Some(SubmissionOutcome::Failed { message, .. }) =
                wizard.try_update(|w| w.finish_submission(Err(err)))
            {
                page::alert(&message);
            }
            return;
        };

        let api = HttpBookingApi::new(&config.api_origin_or(&page::page_origin()), csrf_token);
        spawn_local(async move {
            let result = api.submit(&payload).await;
            match wizard.try_update(|w| w.finish_submission(result)) {
                Some(SubmissionOutcome::Confirmed { message, .. }) => {
                    page::alert(&message);
                    page::reload();
                }
                Some(SubmissionOutcome::Failed { message, error }) => {
                    leptos::logging::error!("Error: {}", error);
                    page::alert(&message);
                }
                None => {}
            }
        });
    };

    view! {
        <h3 class="step-heading">"Confirm your appointment"</h3>
        <dl class="confirmation-details">
            <dt>"Doctor"</dt>
            <dd id="confirmDoctor">{move || details.get().doctor}</dd>
            <dt>"Room"</dt>
            <dd id="confirmRoom">{move || details.get().room}</dd>
            <dt>"Date"</dt>
            <dd id="confirmDate">{move || details.get().date}</dd>
            <dt>"Time"</dt>
            <dd id="confirmTime">{move || details.get().time}</dd>
        </dl>
        <div class="form-actions">
            <Button
                appearance=ButtonAppearance::Primary
                disabled=is_submitting
                loading=is_submitting
                on_click=move |_| handle_confirm()
            >
                <span id="confirmBookingButton">
                    {move || wizard.with(|w| w.submit_control().label.clone())}
                </span>
            </Button>
        </div>
    }
}
