// HealthSync Domain
// This crate contains the business logic for the HealthSync dashboard

// Domain entities
pub mod entities;

// Services that implement business logic (classifier, assessments)
pub mod services;

// Demo accounts, one-time codes and sessions
pub mod auth;

// Optional voice output
pub mod speech;

// Health checks and system status
pub mod health;

pub use entities::assessment::{AssessmentReport, AssessmentResult, VerdictTier};
pub use entities::vitals::{AssessmentInput, AssessmentRequest, Metric, Status};
pub use services::classifier::{aggregate, classify_metric, classify_named};
