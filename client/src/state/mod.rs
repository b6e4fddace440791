//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `catalog`, `panels`) so each
//! component depends on a small focused model. Every model is plain data with
//! synchronous transitions; pages hold them in `RwSignal`s provided through
//! context and perform the async I/O around those transitions.

pub mod catalog;
pub mod panels;
pub mod session;
