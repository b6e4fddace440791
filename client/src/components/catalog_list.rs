//! Product and location list sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! A section requests its list once per page load, as soon as the session
//! gate allows it. Sections are independent: a page may mount either or
//! both. Each summary row carries an inventory toggle and its panel.

#[cfg(test)]
#[path = "catalog_list_test.rs"]
mod catalog_list_test;

use catalog::{Entity, EntityKind, Location, Product};
use leptos::prelude::*;

use crate::components::inventory_panel::{InventoryPanel, InventoryToggle};
use crate::config::ClientConfig;
use crate::state::catalog::{CatalogEntry, CatalogState};
use crate::state::panels::{PanelKey, PanelsState};
use crate::state::session::SessionStore;
use crate::util::format;
use crate::util::session_gate::may_fetch;

/// Fetch the `T` list unless it was already requested on this page.
///
/// On completion the items replace the previous list and every panel of
/// that kind is dropped along with the rows that owned it.
pub fn request_list<T: CatalogEntry>(
    session: RwSignal<SessionStore>,
    catalog: RwSignal<CatalogState>,
    panels: RwSignal<PanelsState>,
    config: ClientConfig,
) {
    if !session.with_untracked(may_fetch) {
        return;
    }
    if catalog.try_update(|c| T::list_mut(c).begin()) != Some(true) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (_, authorization) = session.with_untracked(SessionStore::auth_header);
        let result = crate::net::api::fetch_list::<T>(&config, &authorization).await;
        if let Err(err) = &result {
            log::warn!("{} list failed: {err}", T::KIND.as_str());
            if err.is_unauthorized() {
                session.update(|s| {
                    s.note_failure(err);
                });
            }
        }
        panels.update(|p| p.forget_kind(T::KIND));
        catalog.update(|c| T::list_mut(c).finish(result));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (panels, config);
    }
}

/// Shared section body: heading, loading/error states, and one row per item.
fn catalog_section<T, R, V>(title: &'static str, class: &'static str, render_row: R) -> impl IntoView
where
    T: CatalogEntry,
    R: Fn(T) -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let session = expect_context::<RwSignal<SessionStore>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let panels = expect_context::<RwSignal<PanelsState>>();
    let config = expect_context::<ClientConfig>();

    let fetch_config = config.clone();
    Effect::new(move || {
        if may_fetch(&session.get()) {
            request_list::<T>(session, catalog, panels, fetch_config.clone());
        }
    });
    on_cleanup(move || panels.update(|p| p.forget_kind(T::KIND)));

    let on_retry = Callback::new(move |()| {
        if catalog.try_update(|c| T::list_mut(c).retry()) == Some(true) {
            request_list::<T>(session, catalog, panels, config.clone());
        }
    });

    // Rows only rebuild when this kind's items change, keyed by id.
    let items = Memo::new(move |_| catalog.with(|c| T::list(c).items.clone()));

    view! {
        <section class=class>
            <h2 class="catalog-section__title">{title}</h2>
            <Show when=move || catalog.with(|c| T::list(c).is_loading())>
                <p class="catalog-section__loading">"Loading..."</p>
            </Show>
            <Show when=move || catalog.with(|c| T::list(c).error().is_some())>
                <div class="catalog-section__error" role="alert">
                    <p>{move || catalog.with(|c| T::list(c).error().unwrap_or_default().to_owned())}</p>
                    <button class="catalog-section__retry" on:click=move |_| on_retry.run(())>
                        "Retry"
                    </button>
                </div>
            </Show>
            <div class="catalog-section__rows">
                <For each=move || items.get() key=|item: &T| item.id() children=render_row/>
            </div>
        </section>
    }
}

/// All products with their inventory toggles.
#[component]
pub fn ProductList() -> impl IntoView {
    catalog_section::<Product, _, _>("Products", "catalog-section catalog-section--products", |product| {
        view! { <ProductRow product=product/> }
    })
}

/// All locations with their inventory toggles.
#[component]
pub fn LocationList() -> impl IntoView {
    catalog_section::<Location, _, _>("Locations", "catalog-section catalog-section--locations", |location| {
        view! { <LocationRow location=location/> }
    })
}

#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let panel = PanelKey::new(EntityKind::Product, product.id);
    view! {
        <div class="entity-row">
            <h3 class="entity-row__title">{format::product_title(&product)}</h3>
            <p class="entity-row__body">{product.description.clone().unwrap_or_default()}</p>
            <p class="entity-row__meta">{format::price_label(product.price)}</p>
            <InventoryToggle panel=panel/>
            <InventoryPanel panel=panel/>
        </div>
    }
}

#[component]
fn LocationRow(location: Location) -> impl IntoView {
    let panel = PanelKey::new(EntityKind::Location, location.id);
    view! {
        <div class="entity-row">
            <h3 class="entity-row__title">{location.name.clone()}</h3>
            <p class="entity-row__body">{location.address.clone()}</p>
            <p class="entity-row__meta">{format::capacity_label(&location)}</p>
            <InventoryToggle panel=panel/>
            <InventoryPanel panel=panel/>
        </div>
    }
}
