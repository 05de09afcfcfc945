use leptos::prelude::*;

use crate::booking::BookingWizard;
use crate::views::booking::run_action;

#[component]
pub fn TimeStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    view! {
        <h3 class="step-heading">
            "Pick a date and time with "
            <span id="selectedDoctorName">
                {move || wizard.with(|w| w.state().doctor_name.clone().unwrap_or_default())}
            </span>
        </h3>
        <div class="form-group">
            <label for="appointmentDate">"Appointment Date"</label>
            <input
                type="date"
                id="appointmentDate"
                prop:value=move || wizard.with(|w| w.date_input().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| w.set_date_input(value));
                }
            />
        </div>
        <div class="time-slot-grid">
            {move || {
                let slots = wizard.with(|w| w.time_slots().to_vec());
                slots.into_iter().map(|slot| {
                    let label = slot.label.clone();
                    let selected = wizard.with(|w| w.is_slot_selected(slot.label.trim()));
                    if slot.is_available {
                        view! {
                            <button
                                class="time-slot-dark"
                                class:selected=selected
                                on:click=move |_| {
                                    let label = label.clone();
                                    run_action(wizard, move |w| w.select_time_slot(&label));
                                }
                            >
                                {slot.label.clone()}
                            </button>
                        }.into_any()
                    } else {
                        view! {
                            <button class="time-slot-dark cursor-not-allowed" disabled=true>
                                {slot.label.clone()}
                            </button>
                        }.into_any()
                    }
                }).collect_view()
            }}
        </div>
    }
}
