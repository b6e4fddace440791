//! Product and location list state.
//!
//! Each list is fetched at most once per page load. A finished fetch replaces
//! the previous items wholesale; a failed one leaves the list empty with a
//! visible error.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use catalog::{Entity, Location, Product};

use crate::net::error::ApiError;

/// Lifecycle of one list fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListStatus {
    /// Not requested yet on this page.
    #[default]
    Idle,
    Loading,
    Ready,
    /// The fetch failed; the message is shown in place of the rows.
    Failed(String),
}

/// Items of one list plus its fetch status.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub status: ListStatus,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), status: ListStatus::Idle }
    }
}

impl<T> ListState<T> {
    /// Claim the fetch for this page load.
    ///
    /// Returns `true` exactly once until [`Self::retry`] is called; the
    /// caller issues the request only when this returns `true`.
    pub fn begin(&mut self) -> bool {
        if self.status != ListStatus::Idle {
            return false;
        }
        self.status = ListStatus::Loading;
        true
    }

    /// Apply the fetch result, replacing any previous items.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.status = ListStatus::Ready;
            }
            Err(err) => {
                self.items.clear();
                self.status = ListStatus::Failed(err.to_string());
            }
        }
    }

    /// Allow a failed list to be fetched again.
    ///
    /// Returns `false` (and does nothing) unless the list is in `Failed`.
    pub fn retry(&mut self) -> bool {
        if !matches!(self.status, ListStatus::Failed(_)) {
            return false;
        }
        self.status = ListStatus::Idle;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Both top-level lists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    pub products: ListState<Product>,
    pub locations: ListState<Location>,
}

/// An entity with a slot in [`CatalogState`].
pub trait CatalogEntry: Entity + Send + Sync {
    fn list(catalog: &CatalogState) -> &ListState<Self>;
    fn list_mut(catalog: &mut CatalogState) -> &mut ListState<Self>;
}

impl CatalogEntry for Product {
    fn list(catalog: &CatalogState) -> &ListState<Self> {
        &catalog.products
    }

    fn list_mut(catalog: &mut CatalogState) -> &mut ListState<Self> {
        &mut catalog.products
    }
}

impl CatalogEntry for Location {
    fn list(catalog: &CatalogState) -> &ListState<Self> {
        &catalog.locations
    }

    fn list_mut(catalog: &mut CatalogState) -> &mut ListState<Self> {
        &mut catalog.locations
    }
}
