//! Threshold classification of vital signs and severity aggregation.
//!
//! Everything here is pure: no state, no I/O. Input bounds are the caller's
//! concern (see `AssessmentService::validate_request`).

use std::collections::BTreeMap;

use crate::entities::assessment::{AssessmentResult, VerdictTier};
use crate::entities::vitals::{AssessmentInput, Metric, Status};

/// Classify a single reading against its metric's thresholds.
///
/// High is checked before slightly high; the first match wins.
pub fn classify_metric(value: f64, metric: Metric) -> Status {
    match metric {
        Metric::Temperature => {
            if value > 100.4 {
                Status::High
            } else if value > 99.0 {
                Status::SlightlyHigh
            } else {
                Status::Normal
            }
        }
        Metric::HeartRate => {
            if value > 120.0 || value < 50.0 {
                Status::High
            } else if value > 100.0 {
                Status::SlightlyHigh
            } else {
                Status::Normal
            }
        }
        Metric::BloodSugar => {
            if value >= 200.0 {
                Status::High
            } else if value > 140.0 {
                Status::SlightlyHigh
            } else {
                Status::Normal
            }
        }
        Metric::BpSystolic => {
            if value >= 180.0 {
                Status::High
            } else if value > 140.0 {
                Status::SlightlyHigh
            } else {
                Status::Normal
            }
        }
        Metric::BpDiastolic => {
            if value >= 120.0 {
                Status::High
            } else if value > 90.0 {
                Status::SlightlyHigh
            } else {
                Status::Normal
            }
        }
    }
}

/// Classify a reading by metric display name. Unknown names classify as normal.
pub fn classify_named(value: f64, name: &str) -> Status {
    Metric::from_name(name).map_or(Status::Normal, |metric| classify_metric(value, metric))
}

/// Weighted sum of statuses: 3 per high, 1 per slightly high.
pub fn severity_score<I>(statuses: I) -> u8
where
    I: IntoIterator<Item = Status>,
{
    statuses.into_iter().map(Status::weight).sum()
}

/// Classify every reading and derive the overall verdict.
pub fn aggregate(input: &AssessmentInput) -> AssessmentResult {
    let statuses: BTreeMap<Metric, Status> = input
        .readings()
        .map(|(metric, value)| (metric, classify_metric(value, metric)))
        .collect();

    let severity_score = severity_score(statuses.values().copied());
    let tier = VerdictTier::from_score(severity_score);

    AssessmentResult {
        overall: tier.overall().to_string(),
        advisory: tier.advisory().to_string(),
        tier,
        severity_score,
        statuses,
    }
}
