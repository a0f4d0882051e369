use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// One of the five vital signs a dashboard assessment is made of.
///
/// The variant order is the display order everywhere (input form, status map, chart).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Metric {
    /// Body temperature in °F
    #[serde(rename = "Temperature")]
    Temperature,

    /// Heart rate in beats per minute
    #[serde(rename = "Heart Rate")]
    HeartRate,

    /// Blood sugar in mg/dL
    #[serde(rename = "Blood Sugar")]
    BloodSugar,

    /// Systolic blood pressure in mmHg
    #[serde(rename = "BP Sys")]
    BpSystolic,

    /// Diastolic blood pressure in mmHg
    #[serde(rename = "BP Dia")]
    BpDiastolic,
}

/// Accepted input range and form default for a metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct InputBounds {
    /// Lowest accepted value (inclusive)
    pub min: f64,
    /// Highest accepted value (inclusive)
    pub max: f64,
    /// Value the input form starts with
    pub default: f64,
}

impl InputBounds {
    /// Whether `value` lies inside the bounds. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Metric {
    /// All metrics in display order
    pub const ALL: [Metric; 5] = [
        Metric::Temperature,
        Metric::HeartRate,
        Metric::BloodSugar,
        Metric::BpSystolic,
        Metric::BpDiastolic,
    ];

    /// Canonical display name, also used as the JSON key in status maps
    pub fn name(self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::HeartRate => "Heart Rate",
            Metric::BloodSugar => "Blood Sugar",
            Metric::BpSystolic => "BP Sys",
            Metric::BpDiastolic => "BP Dia",
        }
    }

    /// Resolve a canonical display name
    pub fn from_name(name: &str) -> Option<Self> {
        Metric::ALL.into_iter().find(|metric| metric.name() == name)
    }

    /// Measurement unit
    pub fn unit(self) -> &'static str {
        match self {
            Metric::Temperature => "°F",
            Metric::HeartRate => "BPM",
            Metric::BloodSugar => "mg/dL",
            Metric::BpSystolic | Metric::BpDiastolic => "mmHg",
        }
    }

    /// Baseline drawn on the overview chart. Not used for classification.
    pub fn safe_reference(self) -> f64 {
        match self {
            Metric::Temperature => 99.0,
            Metric::HeartRate => 100.0,
            Metric::BloodSugar => 140.0,
            Metric::BpSystolic => 130.0,
            Metric::BpDiastolic => 85.0,
        }
    }

    /// Physiologically plausible input range for the metric
    pub fn bounds(self) -> InputBounds {
        let (min, max, default) = match self {
            Metric::Temperature => (90.0, 110.0, 98.6),
            Metric::HeartRate => (30.0, 220.0, 75.0),
            Metric::BloodSugar => (40.0, 400.0, 100.0),
            Metric::BpSystolic => (70.0, 240.0, 120.0),
            Metric::BpDiastolic => (40.0, 160.0, 80.0),
        };
        InputBounds { min, max, default }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Within the normal range
    Normal,
    /// Above normal but below the high threshold
    SlightlyHigh,
    /// Beyond safe limits
    High,
}

impl Status {
    /// Contribution to the severity score
    pub fn weight(self) -> u8 {
        match self {
            Status::Normal => 0,
            Status::SlightlyHigh => 1,
            Status::High => 3,
        }
    }

    /// Wire name of the status
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::SlightlyHigh => "slightly_high",
            Status::High => "high",
        }
    }

    /// Bar colour used for this status on the overview chart
    pub fn color(self) -> &'static str {
        match self {
            Status::Normal => "#ec407a",
            Status::SlightlyHigh => "#ffb74d",
            Status::High => "#f44336",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five readings submitted for one assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AssessmentInput {
    /// Body temperature (°F)
    #[validate(range(min = 90.0, max = 110.0, message = "Temperature must be between 90 and 110 °F"))]
    #[cfg_attr(feature = "with-api", schema(example = 98.6))]
    pub temperature: f64,

    /// Heart rate (BPM)
    #[validate(range(min = 30.0, max = 220.0, message = "Heart rate must be between 30 and 220 BPM"))]
    #[cfg_attr(feature = "with-api", schema(example = 75.0))]
    pub heart_rate: f64,

    /// Blood sugar (mg/dL)
    #[validate(range(min = 40.0, max = 400.0, message = "Blood sugar must be between 40 and 400 mg/dL"))]
    #[cfg_attr(feature = "with-api", schema(example = 100.0))]
    pub blood_sugar: f64,

    /// Systolic blood pressure (mmHg)
    #[validate(range(min = 70.0, max = 240.0, message = "Systolic pressure must be between 70 and 240 mmHg"))]
    #[cfg_attr(feature = "with-api", schema(example = 120.0))]
    pub bp_systolic: f64,

    /// Diastolic blood pressure (mmHg)
    #[validate(range(min = 40.0, max = 160.0, message = "Diastolic pressure must be between 40 and 160 mmHg"))]
    #[cfg_attr(feature = "with-api", schema(example = 80.0))]
    pub bp_diastolic: f64,
}

impl AssessmentInput {
    /// Build an input from readings in display order
    pub fn new(temperature: f64, heart_rate: f64, blood_sugar: f64, bp_systolic: f64, bp_diastolic: f64) -> Self {
        Self {
            temperature,
            heart_rate,
            blood_sugar,
            bp_systolic,
            bp_diastolic,
        }
    }

    /// Reading for a single metric
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::HeartRate => self.heart_rate,
            Metric::BloodSugar => self.blood_sugar,
            Metric::BpSystolic => self.bp_systolic,
            Metric::BpDiastolic => self.bp_diastolic,
        }
    }

    /// Metric/value pairs in display order
    pub fn readings(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |metric| (metric, self.value(metric)))
    }
}

impl Default for AssessmentInput {
    fn default() -> Self {
        Self::new(
            Metric::Temperature.bounds().default,
            Metric::HeartRate.bounds().default,
            Metric::BloodSugar.bounds().default,
            Metric::BpSystolic.bounds().default,
            Metric::BpDiastolic.bounds().default,
        )
    }
}

/// Request payload for an assessment: the readings plus optional form details
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AssessmentRequest {
    /// The five vital-sign readings
    #[validate]
    pub readings: AssessmentInput,

    /// Name to show on the report. Defaults to the signed-in user.
    #[validate(length(max = 100, message = "Display name cannot exceed 100 characters"))]
    pub display_name: Option<String>,

    /// Age in years
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: Option<u8>,

    /// Free-text notes or symptoms
    #[validate(length(max = 1000, message = "Notes cannot exceed 1000 characters"))]
    pub notes: Option<String>,
}

impl From<AssessmentInput> for AssessmentRequest {
    fn from(readings: AssessmentInput) -> Self {
        Self {
            readings,
            display_name: None,
            age: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_name(metric.name()), Some(metric));
        }
        assert_eq!(Metric::from_name("Pulse Oximetry"), None);
        assert_eq!(Metric::from_name("temperature"), None);
    }

    #[test]
    fn test_metric_serializes_as_display_name() {
        let json = serde_json::to_string(&Metric::HeartRate).unwrap();
        assert_eq!(json, "\"Heart Rate\"");

        let metric: Metric = serde_json::from_str("\"BP Dia\"").unwrap();
        assert_eq!(metric, Metric::BpDiastolic);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&Status::SlightlyHigh).unwrap(), "\"slightly_high\"");
        assert_eq!(Status::High.to_string(), "high");
        assert_eq!(Status::Normal.weight(), 0);
        assert_eq!(Status::SlightlyHigh.weight(), 1);
        assert_eq!(Status::High.weight(), 3);
    }

    #[test]
    fn test_defaults_lie_within_bounds() {
        let input = AssessmentInput::default();
        for (metric, value) in input.readings() {
            assert!(metric.bounds().contains(value), "{} default out of bounds", metric);
            assert!(metric.bounds().contains(metric.safe_reference()));
        }
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_input_validation_rejects_out_of_range() {
        let input = AssessmentInput::new(120.0, 75.0, 100.0, 120.0, 80.0);
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("temperature"));

        let input = AssessmentInput::new(98.6, 75.0, 100.0, 120.0, 30.0);
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("bp_diastolic"));
    }

    #[test]
    fn test_bounds_reject_nan() {
        assert!(!Metric::HeartRate.bounds().contains(f64::NAN));
        assert!(Metric::HeartRate.bounds().contains(30.0));
        assert!(Metric::HeartRate.bounds().contains(220.0));
        assert!(!Metric::HeartRate.bounds().contains(220.5));
    }

    #[test]
    fn test_readings_follow_display_order() {
        let input = AssessmentInput::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let values: Vec<f64> = input.readings().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(input.value(Metric::BpSystolic), 4.0);
    }

    #[cfg(feature = "with-api")]
    #[test]
    fn test_input_schema_carries_examples() {
        let (name, schema) = <AssessmentInput as ToSchema>::schema();
        assert_eq!(name, "AssessmentInput");

        let schema = serde_json::to_value(&schema).unwrap();
        assert_eq!(schema["properties"]["temperature"]["example"], 98.6);
        assert_eq!(schema["properties"]["bp_diastolic"]["example"], 80.0);
    }
}
