use leptos::prelude::*;

use crate::booking::BookingWizard;
use crate::views::booking::run_action;

#[component]
pub fn DoctorStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let doctors = move || {
        wizard.with(|w| {
            let labels_visible = w.directory().specialty_labels_visible();
            w.directory()
                .entries()
                .iter()
                .map(|entry| {
                    (
                        entry.clone(),
                        w.is_doctor_selected(&entry.doctor.id),
                        labels_visible,
                    )
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="doctor-grid">
            {move || doctors().into_iter().map(|(entry, selected, labels_visible)| {
                let doctor_id = entry.doctor.id.clone();
                view! {
                    <div
                        class="doctor-card-dark"
                        class:selected=selected
                        class:hidden=!entry.visible
                        on:click=move |_| {
                            let doctor_id = doctor_id.clone();
                            run_action(wizard, move |w| w.select_doctor(&doctor_id));
                        }
                    >
                        <h3 class="doctor-name">{entry.doctor.name.clone()}</h3>
                        <p class="doctor-specialty-display" class:hidden=!labels_visible>
                            {entry.doctor.specialty_label()}
                        </p>
                        {entry.hospital.clone().map(|hospital| view! {
                            <p class="doctor-hospital">{hospital}</p>
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
