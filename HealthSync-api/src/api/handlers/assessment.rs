use axum::{extract::State, Extension, Json};
use tracing::{debug, info, instrument};

use health_sync_domain::entities::assessment::{HealthTip, MetricReference};
use health_sync_domain::entities::vitals::AssessmentRequest;
use health_sync_domain::speech::speak_if_available;

use crate::api::extractors::ApiJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::entities::assessment::AssessmentResponse;
use crate::entities::common::ErrorResponse;

/// Classify a set of readings and build the report
#[utoipa::path(
    post,
    path = "/api/v1/assessments",
    request_body = AssessmentRequest,
    responses(
        (status = 200, description = "Assessment report", body = AssessmentResponse),
        (status = 400, description = "Readings out of range", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "assessments"
)]
#[instrument(skip(state, current, request))]
pub async fn create_assessment(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    ApiJson(mut request): ApiJson<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, ErrorResponse> {
    let has_name = request
        .display_name
        .as_deref()
        .map(|name| !name.trim().is_empty())
        .unwrap_or(false);
    if !has_name {
        request.display_name = Some(current.user.username.clone());
    }

    let report = state.assessments.assess(request)?;
    info!(
        user = %current.user.username,
        tier = ?report.result.tier,
        score = report.result.severity_score,
        "Assessment generated"
    );

    let voice = speak_if_available(state.voice.as_ref(), &report.spoken_text);
    debug!("Voice outcome: {}", voice.as_str());

    Ok(Json(AssessmentResponse {
        report,
        voice: voice.as_str().to_string(),
    }))
}

/// Accepted range, default and chart baseline for each metric
#[utoipa::path(
    get,
    path = "/api/v1/assessments/reference",
    responses(
        (status = 200, description = "Metric reference", body = [MetricReference])
    ),
    tag = "assessments"
)]
#[instrument(skip(state))]
pub async fn get_reference(State(state): State<AppState>) -> Json<Vec<MetricReference>> {
    Json(state.assessments.reference())
}

/// Generic advice for each status
#[utoipa::path(
    get,
    path = "/api/v1/tips",
    responses(
        (status = 200, description = "Health tips", body = [HealthTip])
    ),
    tag = "assessments"
)]
#[instrument(skip(state))]
pub async fn get_health_tips(State(state): State<AppState>) -> Json<Vec<HealthTip>> {
    Json(state.assessments.health_tips())
}
