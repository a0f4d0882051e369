use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::api::handlers::{assessment, auth, health};
use crate::api::middleware::require_session;
use crate::api::AppState;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(state: AppState) -> Router {
    debug!("Creating application router");

    // API routes; only assessment creation needs a session
    let api_routes = Router::new()
        .route("/assessments", post(assessment::create_assessment))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session))
        .route("/assessments/reference", get(assessment::get_reference))
        .route("/tips", get(assessment::get_health_tips));

    debug!("API routes configured");

    // Session routes
    let auth_routes = Router::new()
        .route("/auth/info", get(auth::auth_info))
        .route("/auth/logout", post(auth::logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    debug!("Auth routes configured");

    // Public routes that don't require authentication
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/otp", post(auth::request_otp))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .nest("/api/v1", api_routes)
        .with_state(state);

    // Swagger UI and OpenAPI document
    let app = app.merge(configure_swagger_routes());

    debug!("Swagger UI merged");

    health::initialize_server_start_time();

    app.layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive())
}
