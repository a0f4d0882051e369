use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

use crate::entities::assessment::{AssessmentReport, ChartPoint, HealthTip, MetricReference};
use crate::entities::vitals::{AssessmentRequest, Metric, Status};
use crate::services::classifier::aggregate;
use crate::services::validation::describe_validation_errors;

/// Assessment service errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AssessmentServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Trait for assessment operations
pub trait AssessmentServiceTrait: Send + Sync {
    /// Check readings and form details against their accepted ranges
    fn validate_request(&self, request: &AssessmentRequest) -> Result<(), AssessmentServiceError>;

    /// Validate, classify and build the full report
    fn assess(&self, request: AssessmentRequest) -> Result<AssessmentReport, AssessmentServiceError>;

    /// Form metadata for every metric, in display order
    fn reference(&self) -> Vec<MetricReference>;

    /// Generic advice per status
    fn health_tips(&self) -> Vec<HealthTip>;
}

/// Stateless assessment service over the threshold classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentService;

impl AssessmentService {
    /// Create a new assessment service
    pub fn new() -> Self {
        Self
    }
}

impl AssessmentServiceTrait for AssessmentService {
    fn validate_request(&self, request: &AssessmentRequest) -> Result<(), AssessmentServiceError> {
        if let Err(validation_errors) = request.validate() {
            return Err(AssessmentServiceError::ValidationError(
                describe_validation_errors(&validation_errors),
            ));
        }

        // Range rules let NaN through
        let out_of_bounds: Vec<String> = request
            .readings
            .readings()
            .filter(|(metric, value)| !metric.bounds().contains(*value))
            .map(|(metric, _)| format!("{} is not a number within bounds", metric))
            .collect();
        if !out_of_bounds.is_empty() {
            return Err(AssessmentServiceError::ValidationError(out_of_bounds.join("; ")));
        }

        Ok(())
    }

    fn assess(&self, request: AssessmentRequest) -> Result<AssessmentReport, AssessmentServiceError> {
        self.validate_request(&request)?;

        let result = aggregate(&request.readings);
        debug!(
            severity_score = result.severity_score,
            tier = ?result.tier,
            "Readings classified"
        );

        let chart = request
            .readings
            .readings()
            .map(|(metric, value)| {
                let status = result.statuses.get(&metric).copied().unwrap_or(Status::Normal);
                ChartPoint {
                    parameter: metric,
                    value,
                    safe_value: metric.safe_reference(),
                    status,
                    color: status.color().to_string(),
                }
            })
            .collect();

        let spoken_text = format!("{} {}", result.overall, result.advisory);
        let display_name = request
            .display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        info!(tier = ?result.tier, "Assessment generated");

        Ok(AssessmentReport {
            display_name,
            age: request.age,
            notes: request.notes,
            verdict_color: result.tier.color().to_string(),
            result,
            chart,
            spoken_text,
            generated_at: Utc::now(),
        })
    }

    fn reference(&self) -> Vec<MetricReference> {
        Metric::ALL
            .into_iter()
            .map(|metric| MetricReference {
                metric,
                unit: metric.unit().to_string(),
                bounds: metric.bounds(),
                safe_reference: metric.safe_reference(),
            })
            .collect()
    }

    fn health_tips(&self) -> Vec<HealthTip> {
        [
            (Status::Normal, "Maintain your current lifestyle."),
            (Status::SlightlyHigh, "Hydrate, rest, and recheck after a few hours."),
            (Status::High, "Consult a doctor immediately."),
        ]
        .into_iter()
        .map(|(status, tip)| HealthTip {
            status,
            tip: tip.to_string(),
        })
        .collect()
    }
}

/// Create the default assessment service
pub fn create_default_assessment_service() -> impl AssessmentServiceTrait {
    AssessmentService::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::assessment::VerdictTier;
    use crate::entities::vitals::AssessmentInput;

    fn request(readings: AssessmentInput) -> AssessmentRequest {
        AssessmentRequest::from(readings)
    }

    #[test]
    fn test_validate_request_valid() {
        let service = AssessmentService::new();
        assert!(service.validate_request(&request(AssessmentInput::default())).is_ok());
    }

    #[test]
    fn test_validate_request_rejects_out_of_range_reading() {
        let service = AssessmentService::new();
        let result = service.validate_request(&request(AssessmentInput::new(98.6, 75.0, 500.0, 120.0, 80.0)));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Blood sugar"), "{}", message);
    }

    #[test]
    fn test_validate_request_rejects_nan() {
        let service = AssessmentService::new();
        let result = service.validate_request(&request(AssessmentInput::new(f64::NAN, 75.0, 100.0, 120.0, 80.0)));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Temperature"), "{}", message);
    }

    #[test]
    fn test_validate_request_rejects_long_notes() {
        let service = AssessmentService::new();
        let mut req = request(AssessmentInput::default());
        req.notes = Some("x".repeat(1001));
        let message = service.validate_request(&req).unwrap_err().to_string();
        assert!(message.contains("Notes"), "{}", message);
    }

    #[test]
    fn test_assess_builds_report() {
        let service = AssessmentService::new();
        let mut req = request(AssessmentInput::new(99.5, 105.0, 150.0, 145.0, 95.0));
        req.display_name = Some("  Divya  ".to_string());
        req.age = Some(20);

        let report = service.assess(req).unwrap();
        assert_eq!(report.result.tier, VerdictTier::Critical);
        assert_eq!(report.result.severity_score, 5);
        assert_eq!(report.verdict_color, "#c62828");
        assert_eq!(report.display_name.as_deref(), Some("Divya"));
        assert_eq!(report.age, Some(20));
        assert_eq!(
            report.spoken_text,
            format!("{} {}", VerdictTier::Critical.overall(), VerdictTier::Critical.advisory())
        );

        assert_eq!(report.chart.len(), 5);
        let first = &report.chart[0];
        assert_eq!(first.parameter, Metric::Temperature);
        assert_eq!(first.value, 99.5);
        assert_eq!(first.safe_value, 99.0);
        assert_eq!(first.status, Status::SlightlyHigh);
        assert_eq!(first.color, "#ffb74d");
    }

    #[test]
    fn test_assess_chart_matches_statuses() {
        let service = AssessmentService::new();
        let report = service.assess(request(AssessmentInput::new(101.0, 75.0, 150.0, 120.0, 80.0))).unwrap();
        for point in &report.chart {
            assert_eq!(report.result.statuses[&point.parameter], point.status);
        }
        let params: Vec<Metric> = report.chart.iter().map(|p| p.parameter).collect();
        assert_eq!(params, Metric::ALL.to_vec());
    }

    #[test]
    fn test_assess_rejects_invalid_input() {
        let service = AssessmentService::new();
        let result = service.assess(request(AssessmentInput::new(98.6, 10.0, 100.0, 120.0, 80.0)));
        assert!(matches!(result, Err(AssessmentServiceError::ValidationError(_))));
    }

    #[test]
    fn test_reference_covers_every_metric() {
        let service = AssessmentService::new();
        let reference = service.reference();
        assert_eq!(reference.len(), 5);
        assert_eq!(reference[1].metric, Metric::HeartRate);
        assert_eq!(reference[1].unit, "BPM");
        assert_eq!(reference[1].safe_reference, 100.0);
        assert_eq!(reference[1].bounds.default, 75.0);
    }

    #[test]
    fn test_health_tips() {
        let service = AssessmentService::new();
        let tips = service.health_tips();
        assert_eq!(tips.len(), 3);
        assert_eq!(tips[2].status, Status::High);
        assert_eq!(tips[2].tip, "Consult a doctor immediately.");
    }
}
