use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use health_sync_domain::entities::assessment::AssessmentReport;

/// Assessment report plus what happened with voice output
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssessmentResponse {
    /// The generated report
    pub report: AssessmentReport,

    /// Voice output outcome: "spoken", "unavailable" or "error"
    pub voice: String,
}
