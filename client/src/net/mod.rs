//! Networking modules for the inventory REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `error` classifies their failures. Wire
//! DTOs live in the shared `catalog` crate so the CLI decodes the same shapes.

pub mod api;
pub mod error;
