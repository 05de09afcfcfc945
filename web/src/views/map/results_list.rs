use leptos::prelude::*;
use shared_types::LatLong;

use crate::{
    components::loading::LoadingView,
    locator::{places::services_for, HospitalPlace, NO_HOSPITALS_FOUND},
    page,
    views::map::hospital_map::MapStatus,
};

pub const BOOKING_SECTION_ID: &str = "booking-section";

#[component]
pub fn ResultsList(
    status: RwSignal<MapStatus>,
    places: RwSignal<Vec<HospitalPlace>>,
    hovered: RwSignal<Option<usize>>,
    on_focus: impl Fn(LatLong) + 'static + Copy + Send + Sync,
    on_view_doctors: impl Fn(String) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div id="results-list" class="results-list">
            {move || match status.get() {
                MapStatus::Locating => view! {
                    <LoadingView message="Finding your location..." />
                }.into_any(),
                MapStatus::Loading => view! {
                    <LoadingView message="Searching for nearby hospitals..." />
                }.into_any(),
                MapStatus::Unavailable => view! {}.into_any(),
                _ if places.with(|p| p.is_empty()) => view! {
                    <div class="results-empty">{NO_HOSPITALS_FOUND}</div>
                }.into_any(),
                _ => places.get().into_iter().enumerate().map(|(index, place)| {
                    let name = place.display_name();
                    let position = place.position;
                    let booking_name = name.clone();
                    view! {
                        <div
                            class="result-item"
                            on:mouseover=move |_| hovered.set(Some(index))
                            on:mouseout=move |_| hovered.set(None)
                        >
                            <div class="result-item-name" on:click=move |_| on_focus(position)>
                                {name}
                            </div>
                            <div class="result-item-address">
                                {place.address.clone().unwrap_or_default()}
                            </div>
                            <div class="services-container">
                                {services_for(index).into_iter().map(|service| view! {
                                    <span class="service-tag">{service}</span>
                                }).collect_view()}
                            </div>
                            <button
                                class="view-doctors-button"
                                on:click=move |_| {
                                    page::scroll_into_view(BOOKING_SECTION_ID);
                                    on_view_doctors(booking_name.clone());
                                }
                            >
                                "View Doctors & Book"
                            </button>
                        </div>
                    }
                }).collect_view().into_any(),
            }}
        </div>
    }
}
