use leptos::prelude::*;
use thaw::*;

use crate::booking::{catalog::capitalize, directory::ALL_SPECIALTIES, BookingWizard, Step};
use crate::views::booking::{
    confirm_step::ConfirmStep, doctor_step::DoctorStep, room_step::RoomStep, step_class,
    time_step::TimeStep,
};
use crate::views::map::results_list::BOOKING_SECTION_ID;

#[component]
pub fn BookingSection(wizard: RwSignal<BookingWizard>, specialties: Vec<String>) -> impl IntoView {
    let banner = Memo::new(move |_| wizard.with(|w| w.directory().banner().clone()));
    let show_back = move || wizard.with(|w| w.current_step() != Step::SelectDoctor);

    view! {
        <section id=BOOKING_SECTION_ID class="booking-section">
            <div class="booking-header">
                <h2 id="booking-section-title">{move || banner.get().title}</h2>
                <p id="booking-subtitle">
                    {move || banner.get().subtitle}
                    {move || banner.get().fallback_notice.map(|notice| view! {
                        " "
                        <span class="text-amber-400">{notice}</span>
                    })}
                </p>
                <div id="show-all-doctors" class:hidden=move || !banner.get().show_all_visible>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| wizard.update(|w| w.clear_filter())
                    >
                        "Show All Doctors"
                    </Button>
                </div>
            </div>

            <div id="step1" class=step_class(wizard, Step::SelectDoctor)>
                <div class="form-group">
                    <label for="specialty">"Specialty"</label>
                    <select
                        id="specialty"
                        prop:value=move || wizard.with(|w| w.directory().specialty().to_string())
                        on:change=move |ev| {
                            let specialty = event_target_value(&ev);
                            wizard.update(|w| w.filter_by_specialty(&specialty));
                        }
                    >
                        <option value=ALL_SPECIALTIES>"All Specialties"</option>
                        {specialties.into_iter().map(|specialty| {
                            let label = capitalize(&specialty);
                            view! { <option value=specialty>{label}</option> }
                        }).collect_view()}
                    </select>
                </div>
                <DoctorStep wizard=wizard />
            </div>

            <div id="step2" class=step_class(wizard, Step::SelectRoom)>
                <RoomStep wizard=wizard />
            </div>

            <div id="step3" class=step_class(wizard, Step::SelectTime)>
                <TimeStep wizard=wizard />
            </div>

            <div id="step4" class=step_class(wizard, Step::Confirm)>
                <ConfirmStep wizard=wizard />
            </div>

            <button
                id="backButton"
                class="back-button"
                class:hidden=move || !show_back()
                on:click=move |_| {
                    wizard.update(|w| {
                        w.back();
                    });
                }
            >
                "Back"
            </button>
        </section>
    }
}
