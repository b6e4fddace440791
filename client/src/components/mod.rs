//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render catalog rows, inventory panels, and the signed-in user
//! block while reading/writing shared state from Leptos context providers.

pub mod catalog_list;
pub mod inventory_panel;
pub mod user_info;
