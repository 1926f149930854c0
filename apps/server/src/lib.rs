//! Waymark server library.
//!
//! The binary in `main.rs` is a thin shell around this: configuration,
//! state construction, and the axum router live here so integration
//! tests can assemble the same application with fake providers.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
