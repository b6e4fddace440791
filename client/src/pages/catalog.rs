//! Authenticated catalog routes: overview, products, and locations.
//!
//! SYSTEM CONTEXT
//! ==============
//! All three pages share one shell that applies the session gate before any
//! section mounts, so no list request can leave without a token.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::catalog_list::{LocationList, ProductList};
use crate::components::user_info::UserInfo;
use crate::state::session::SessionStore;
use crate::util::session_gate::{install_session_gate, may_fetch};

/// `/`: products and locations side by side.
#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <CatalogShell title="Inventory">
            <ProductList/>
            <LocationList/>
        </CatalogShell>
    }
}

/// `/products`.
#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <CatalogShell title="Products">
            <ProductList/>
        </CatalogShell>
    }
}

/// `/locations`.
#[component]
pub fn LocationsPage() -> impl IntoView {
    view! {
        <CatalogShell title="Locations">
            <LocationList/>
        </CatalogShell>
    }
}

/// Header, navigation and user block around gated page content.
/// Redirects to `/login` if the user is not authenticated.
#[component]
fn CatalogShell(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    install_session_gate(session, use_navigate());

    view! {
        <Show
            when=move || session.with(may_fetch)
            fallback=move || {
                view! {
                    <div class="catalog-page">
                        <p>
                            {move || {
                                if session.with(SessionStore::is_loaded) {
                                    "Redirecting to login..."
                                } else {
                                    "Loading..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="catalog-page">
                <header class="catalog-page__header">
                    <h1 class="catalog-page__title">{title}</h1>
                    <nav class="catalog-page__nav">
                        <A href="/">"Overview"</A>
                        <A href="/products">"Products"</A>
                        <A href="/locations">"Locations"</A>
                    </nav>
                    <UserInfo/>
                </header>
                <main class="catalog-page__body">{children()}</main>
            </div>
        </Show>
    }
}
