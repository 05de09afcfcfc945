pub mod booking_section;
pub mod confirm_step;
pub mod doctor_step;
pub mod room_step;
pub mod time_step;

use leptos::prelude::*;

use crate::booking::{BookingError, BookingWizard, Step};
use crate::page;

/// Runs a wizard action and surfaces its failure the way the page reports errors:
/// validation problems as a blocking alert, everything else in the console.
pub fn run_action(
    wizard: RwSignal<BookingWizard>,
    action: impl FnOnce(&mut BookingWizard) -> Result<(), BookingError>,
) {
    if let Some(Err(err)) = wizard.try_update(action) {
        report_error(&err);
    }
}

pub fn report_error(err: &BookingError) {
    match err {
        BookingError::Validation(validation) => page::alert(&validation.to_string()),
        BookingError::SubmissionInFlight => {}
        other => leptos::logging::error!("Booking error: {}", other),
    }
}

pub fn step_class(wizard: RwSignal<BookingWizard>, step: Step) -> impl Fn() -> &'static str {
    move || {
        let panel = wizard.with(|w| w.panels().get(step));
        match (panel.visible, panel.dimmed) {
            (false, _) => "booking-step hidden",
            (true, true) => "booking-step dimmed",
            (true, false) => "booking-step",
        }
    }
}
