use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::{ssr::SSRMountStyleProvider, ConfigProvider};

use crate::{
    components::{CsrfField, Navbar},
    config::ClientConfig,
    views::home::HomePage,
};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.3/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.3/dist/leaflet.js";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <link rel="stylesheet" href=LEAFLET_CSS />
                    <script src=LEAFLET_JS defer></script>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::from_build_env());

    view! {
        // id=leptos lets cargo-leptos hot-reload the stylesheet
        <Stylesheet id="leptos" href="/pkg/hauspital-web.css"/>
        <Title text="HAUspital"/>

        <CsrfField/>
        <ConfigProvider>
            <Router>
                <Navbar/>
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                    </Routes>
                </main>
            </Router>
        </ConfigProvider>
    }
}
