use leptos::prelude::*;

use crate::booking::{BookingCatalog, BookingWizard};
use crate::views::{
    booking::booking_section::BookingSection, chat::chat_widget::ChatWidget,
    map::hospital_map::HospitalMap,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = BookingCatalog::default();
    let specialties = catalog.specialties();
    let wizard = RwSignal::new(BookingWizard::new(catalog));

    let on_hospitals_found = move |hospitals: Vec<String>| {
        wizard.update(|w| w.assign_hospitals(&hospitals));
    };
    let on_view_doctors = move |hospital: String| {
        wizard.update(|w| {
            w.filter_by_hospital(&hospital);
        });
    };

    view! {
        <div class="homepage-container">
            <section class="hero">
                <h1>"HAUspital"</h1>
                <p>"Find a hospital near you and book an appointment in minutes."</p>
            </section>

            <HospitalMap on_hospitals_found=on_hospitals_found on_view_doctors=on_view_doctors />
            <BookingSection wizard=wizard specialties=specialties />
            <ChatWidget />
        </div>
    }
}
