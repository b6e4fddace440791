//! Inventory panel controller: per-entity expand/collapse state machine.
//!
//! DESIGN
//! ======
//! Every product or location row owns at most one panel, keyed by
//! `(EntityKind, id)`. A panel is `Collapsed` or `Expanded`; expanding hands
//! the caller a [`FetchTicket`] and the caller performs exactly one request
//! for it. Collapsing discards whatever was fetched, so the next expansion
//! always fetches again.
//!
//! CONCURRENCY
//! ===========
//! Requests are never cancelled. Instead each expansion stamps the panel with
//! a fresh generation, and [`PanelsState::resolve`] drops any response whose
//! ticket is no longer the panel's latest. Generations come from one counter
//! shared by all panels, so a ticket can never match a panel recreated after
//! [`PanelsState::forget_kind`].

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use std::collections::HashMap;

use catalog::{EntityKind, InventoryRecord};

use crate::net::error::ApiError;

/// Identity of one entity row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelKey {
    pub kind: EntityKind,
    pub id: i64,
}

impl PanelKey {
    pub fn new(kind: EntityKind, id: i64) -> Self {
        Self { kind, id }
    }

    /// Stable DOM id for the panel container, e.g. `product-inventory-1`.
    pub fn dom_id(self) -> String {
        format!("{}-inventory-{}", self.kind.as_str(), self.id)
    }
}

/// Whether a panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

/// What an expanded panel displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PanelContent {
    /// Collapsed panels hold nothing.
    #[default]
    Empty,
    /// Expanded, waiting for the response to the latest ticket.
    Loading,
    /// Records in service order.
    Rows(Vec<InventoryRecord>),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Panel {
    state: PanelState,
    generation: u64,
    content: PanelContent,
}

/// Permission to issue one inventory request for a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: PanelKey,
    pub generation: u64,
}

/// Outcome of [`PanelsState::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// The panel expanded; issue exactly one request for this ticket.
    Fetch(FetchTicket),
    /// The panel collapsed; no request.
    Collapsed,
}

/// Outcome of [`PanelsState::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// The ticket was superseded or the panel is gone; nothing changed.
    Stale,
}

/// All panels on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelsState {
    panels: HashMap<PanelKey, Panel>,
    issued: u64,
}

impl PanelsState {
    /// Flip the panel for `key`, creating it on first use.
    pub fn toggle(&mut self, key: PanelKey) -> Toggle {
        self.issued += 1;
        let generation = self.issued;
        let panel = self.panels.entry(key).or_default();
        panel.generation = generation;
        match panel.state {
            PanelState::Expanded => {
                panel.state = PanelState::Collapsed;
                panel.content = PanelContent::Empty;
                Toggle::Collapsed
            }
            PanelState::Collapsed => {
                panel.state = PanelState::Expanded;
                panel.content = PanelContent::Loading;
                Toggle::Fetch(FetchTicket { key, generation })
            }
        }
    }

    /// Apply the response for `ticket` if it is still the panel's latest.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<Vec<InventoryRecord>, ApiError>) -> Resolution {
        let Some(panel) = self.panels.get_mut(&ticket.key) else {
            return Resolution::Stale;
        };
        if panel.generation != ticket.generation || panel.state != PanelState::Expanded {
            return Resolution::Stale;
        }
        panel.content = match result {
            Ok(rows) => PanelContent::Rows(rows),
            Err(err) => PanelContent::Failed(err.to_string()),
        };
        Resolution::Applied
    }

    /// Drop every panel of `kind`, e.g. when its list is re-rendered.
    pub fn forget_kind(&mut self, kind: EntityKind) {
        self.panels.retain(|key, _| key.kind != kind);
    }

    /// State of the panel for `key`; unknown panels are collapsed.
    pub fn state(&self, key: PanelKey) -> PanelState {
        self.panels.get(&key).map_or(PanelState::Collapsed, |p| p.state)
    }

    pub fn is_expanded(&self, key: PanelKey) -> bool {
        self.state(key) == PanelState::Expanded
    }

    /// Content of the panel for `key`; unknown panels are empty.
    pub fn content(&self, key: PanelKey) -> PanelContent {
        self.panels.get(&key).map(|p| p.content.clone()).unwrap_or_default()
    }

    /// Number of rendered records for `key`.
    #[cfg(test)]
    pub(crate) fn row_count(&self, key: PanelKey) -> usize {
        match self.panels.get(&key).map(|p| &p.content) {
            Some(PanelContent::Rows(rows)) => rows.len(),
            _ => 0,
        }
    }

    /// Number of panels tracked.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.panels.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
