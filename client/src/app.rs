//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{
    catalog::{LocationsPage, OverviewPage, ProductsPage},
    login::LoginPage,
};
use crate::state::{catalog::CatalogState, panels::PanelsState, session::SessionStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, catalog and panel stores plus the API config, then
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::default());
    let catalog = RwSignal::new(CatalogState::default());
    let panels = RwSignal::new(PanelsState::default());

    provide_context(session);
    provide_context(catalog);
    provide_context(panels);
    provide_context(ClientConfig::from_build_env());

    // sessionStorage only exists in the browser; the server renders unloaded.
    Effect::new(move || session.set(SessionStore::restore()));

    view! {
        <Stylesheet id="leptos" href="/pkg/stockroom.css"/>
        <Title text="Inventory"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=OverviewPage/>
                <Route path=StaticSegment("products") view=ProductsPage/>
                <Route path=StaticSegment("locations") view=LocationsPage/>
            </Routes>
        </Router>
    }
}
