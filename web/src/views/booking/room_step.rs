use leptos::prelude::*;

use crate::booking::BookingWizard;
use crate::views::booking::run_action;

#[component]
pub fn RoomStep(wizard: RwSignal<BookingWizard>) -> impl IntoView {
    let doctor_name = move || {
        wizard.with(|w| w.state().doctor_name.clone().unwrap_or_default())
    };

    view! {
        <h3 class="step-heading">
            "Choose a room for "
            <span id="selectedDoctorNameForRoom">{doctor_name}</span>
        </h3>
        <div class="room-grid">
            {move || {
                let rooms = wizard.with(|w| w.rooms().to_vec());
                rooms.into_iter().map(|room| {
                    let label = room.label.clone();
                    let selected = wizard.with(|w| w.is_room_selected(&room.label));
                    view! {
                        <div
                            class="room-card-dark"
                            class:selected=selected
                            on:click=move |_| {
                                let label = label.clone();
                                run_action(wizard, move |w| w.select_room(&label));
                            }
                        >
                            <h3>{room.label.clone()}</h3>
                            <p class="room-description">{room.description.clone()}</p>
                        </div>
                    }
                }).collect_view()
            }}
        </div>
    }
}
