// HealthSync-api lib.rs
//
// This is the main library file for the HealthSync API.
// It re-exports the router factory and shared state.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;

pub use api::{create_application, AppState};
pub use config::AppConfig;
