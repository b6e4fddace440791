//! Expandable inventory breakdown under a product or location row.
//!
//! DESIGN
//! ======
//! The toggle button and the panel body both read `PanelsState`; neither
//! inspects the DOM to decide what to do. The panel container is always
//! mounted (with a stable id) and renders whatever content the state holds.

use catalog::{EntityKind, InventoryRecord};
use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::panels::{PanelContent, PanelKey, PanelsState, Toggle};
use crate::state::session::SessionStore;
use crate::util::format;

/// Flip the panel for `panel`, fetching its inventory when it expands.
///
/// Collapsing never touches the network. The response is handed back to
/// `PanelsState::resolve`, which drops it if the panel moved on meanwhile.
pub fn toggle_inventory(
    panel: PanelKey,
    panels: RwSignal<PanelsState>,
    session: RwSignal<SessionStore>,
    config: ClientConfig,
) {
    let Some(Toggle::Fetch(ticket)) = panels.try_update(|p| p.toggle(panel)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (_, authorization) = session.with_untracked(SessionStore::auth_header);
        let result = crate::net::api::fetch_inventory(&config, &authorization, panel.kind, panel.id).await;
        if let Err(err) = &result
            && err.is_unauthorized()
        {
            log::warn!("token rejected while loading {}; signing out", panel.dom_id());
            session.update(|s| {
                s.note_failure(err);
            });
        }
        let resolution = panels.try_update(|p| p.resolve(ticket, result));
        if resolution == Some(crate::state::panels::Resolution::Stale) {
            log::debug!("dropped stale inventory response for {}", panel.dom_id());
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ticket, session, config);
    }
}

/// "View Inventory" / "Hide Inventory" button for one row.
#[component]
pub fn InventoryToggle(panel: PanelKey) -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelsState>>();
    let session = expect_context::<RwSignal<SessionStore>>();
    let config = expect_context::<ClientConfig>();

    let expanded = move || panels.with(|p| p.is_expanded(panel));

    view! {
        <button
            class="entity-row__toggle"
            aria-controls=panel.dom_id()
            aria-expanded=move || expanded().to_string()
            on:click=move |_| toggle_inventory(panel, panels, session, config.clone())
        >
            {move || if expanded() { "Hide Inventory" } else { "View Inventory" }}
        </button>
    }
}

/// Panel body: nothing when collapsed, otherwise loading, error, or rows.
#[component]
pub fn InventoryPanel(panel: PanelKey) -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelsState>>();

    view! {
        <div id=panel.dom_id() class="inventory-panel">
            {move || match panels.with(|p| p.content(panel)) {
                PanelContent::Empty => ().into_any(),
                PanelContent::Loading => {
                    view! { <p class="inventory-panel__loading">"Loading inventory..."</p> }.into_any()
                }
                PanelContent::Failed(message) => {
                    view! {
                        <p class="inventory-panel__error" role="alert">
                            {format!("Could not load inventory: {message}")}
                        </p>
                    }
                        .into_any()
                }
                PanelContent::Rows(rows) if rows.is_empty() => {
                    view! { <p class="inventory-panel__empty">"No inventory records."</p> }.into_any()
                }
                PanelContent::Rows(rows) => {
                    rows.into_iter()
                        .map(|record| view! { <InventoryRow kind=panel.kind record=record/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

/// One record: counterpart, quantity/threshold, and status glyphs.
#[component]
fn InventoryRow(kind: EntityKind, record: InventoryRecord) -> impl IntoView {
    view! {
        <div class="inventory-row">
            <div class="inventory-row__counterpart">{format::counterpart_line(kind, &record)}</div>
            <div>{format::quantity_line(&record)}</div>
            <div class="inventory-row__status">{format::stock_status_line(&record)}</div>
        </div>
    }
}
