// HealthSync Data
// This crate holds the in-memory stores behind the demo account flow.
// Nothing here is written to durable storage.

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
