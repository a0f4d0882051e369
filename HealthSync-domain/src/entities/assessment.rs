use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::vitals::{InputBounds, Metric, Status};

/// Overall verdict band derived from the severity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum VerdictTier {
    /// Score of 0
    Clear,
    /// Score of 1 to 3 inclusive
    Caution,
    /// Score above 3
    Critical,
}

impl VerdictTier {
    /// Band for a severity score. A score of exactly 3 is still `Caution`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => VerdictTier::Clear,
            1..=3 => VerdictTier::Caution,
            _ => VerdictTier::Critical,
        }
    }

    /// Headline shown for the band
    pub fn overall(self) -> &'static str {
        match self {
            VerdictTier::Clear => "✅ All clear — readings are within normal ranges.",
            VerdictTier::Caution => "⚠️ Slight irregularities found.",
            VerdictTier::Critical => "🚨 Critical — please consult a doctor soon.",
        }
    }

    /// Advice shown below the headline
    pub fn advisory(self) -> &'static str {
        match self {
            VerdictTier::Clear => {
                "All readings look good. Keep a healthy routine with balanced food and rest."
            }
            VerdictTier::Caution => {
                "Some readings are a little high. Drink water, rest, and recheck later."
            }
            VerdictTier::Critical => {
                "Several readings are beyond safe limits. Seek medical advice urgently."
            }
        }
    }

    /// Headline colour
    pub fn color(self) -> &'static str {
        match self {
            VerdictTier::Clear => "#2e7d32",
            VerdictTier::Caution => "#ef6c00",
            VerdictTier::Critical => "#c62828",
        }
    }
}

/// Outcome of classifying one set of readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AssessmentResult {
    /// Overall verdict text
    pub overall: String,

    /// Advisory text
    pub advisory: String,

    /// Verdict band
    pub tier: VerdictTier,

    /// Weighted sum of statuses (high = 3, slightly high = 1), 0 to 15
    pub severity_score: u8,

    /// Status of every metric, keyed by display name
    pub statuses: BTreeMap<Metric, Status>,
}

/// One bar of the overview chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ChartPoint {
    /// Metric plotted by this bar
    pub parameter: Metric,

    /// Submitted reading
    pub value: f64,

    /// Reference baseline for the metric
    pub safe_value: f64,

    /// Classification of the reading
    pub status: Status,

    /// Bar colour for the status
    pub color: String,
}

/// Full response to an assessment request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct AssessmentReport {
    /// Name the report is addressed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Age supplied with the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,

    /// Notes supplied with the request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Classification outcome
    pub result: AssessmentResult,

    /// Headline colour for the verdict band
    pub verdict_color: String,

    /// Overview chart series in display order
    pub chart: Vec<ChartPoint>,

    /// Text handed to the voice output
    pub spoken_text: String,

    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

/// Form metadata for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct MetricReference {
    /// Metric described
    pub metric: Metric,

    /// Measurement unit
    pub unit: String,

    /// Accepted input range and default
    pub bounds: InputBounds,

    /// Chart baseline
    pub safe_reference: f64,
}

/// Generic advice for one status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct HealthTip {
    /// Status the tip applies to
    pub status: Status,

    /// Advice text
    pub tip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bands() {
        assert_eq!(VerdictTier::from_score(0), VerdictTier::Clear);
        assert_eq!(VerdictTier::from_score(1), VerdictTier::Caution);
        assert_eq!(VerdictTier::from_score(3), VerdictTier::Caution);
        assert_eq!(VerdictTier::from_score(4), VerdictTier::Critical);
        assert_eq!(VerdictTier::from_score(15), VerdictTier::Critical);
    }

    #[test]
    fn test_tier_texts_are_distinct() {
        let tiers = [VerdictTier::Clear, VerdictTier::Caution, VerdictTier::Critical];
        for (i, a) in tiers.iter().enumerate() {
            for b in &tiers[i + 1..] {
                assert_ne!(a.overall(), b.overall());
                assert_ne!(a.advisory(), b.advisory());
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn test_tier_wire_names() {
        assert_eq!(serde_json::to_string(&VerdictTier::Critical).unwrap(), "\"critical\"");
    }

    #[test]
    fn test_status_map_serializes_with_display_names() {
        let mut statuses = BTreeMap::new();
        statuses.insert(Metric::BpSystolic, Status::High);
        statuses.insert(Metric::Temperature, Status::Normal);

        let json = serde_json::to_value(&statuses).unwrap();
        assert_eq!(json["BP Sys"], "high");
        assert_eq!(json["Temperature"], "normal");
    }
}
