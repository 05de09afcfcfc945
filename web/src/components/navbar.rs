use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "HAUspital"
                    </A>
                </div>

                <div class="navbar__links">
                    <a href="#map" class="navbar__link">"Find a Hospital"</a>
                    <a href="#booking-section" class="navbar__link navbar__link--cta">
                        "Book an Appointment"
                    </a>
                </div>

                <button
                    id="mobileMenuButton"
                    class="navbar__menu-button"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>

            <div id="mobileMenu" class="navbar__mobile-menu" class:hidden=move || !menu_open.get()>
                <a href="#map" class="navbar__link">"Find a Hospital"</a>
                <a href="#booking-section" class="navbar__link">"Book an Appointment"</a>
            </div>
        </nav>
    }
}
