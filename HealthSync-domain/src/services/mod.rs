pub mod classifier;
pub mod assessment;
pub mod validation;

// Domain services
// This module contains business logic implementations.

// Re-export the classifier entry points and service factories
pub use classifier::{aggregate, classify_metric, classify_named, severity_score};
pub use assessment::{
    create_default_assessment_service, AssessmentService, AssessmentServiceError, AssessmentServiceTrait,
};
