// Public entities for the HealthSync API
// Request bodies reuse the domain types; this module holds response envelopes

// Common entities for error handling
pub mod common;

// Auth responses
pub mod auth;

// Assessment responses
pub mod assessment;
