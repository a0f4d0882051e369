use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

/// Registers the bearer session scheme referenced by protected paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Session token returned by /auth/login"))
                        .build(),
                ),
            );
        }
    }
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Auth endpoints
        crate::api::handlers::auth::request_otp,
        crate::api::handlers::auth::register,
        crate::api::handlers::auth::login,
        crate::api::handlers::auth::logout,
        crate::api::handlers::auth::auth_info,

        // Assessment endpoints
        crate::api::handlers::assessment::create_assessment,
        crate::api::handlers::assessment::get_reference,
        crate::api::handlers::assessment::get_health_tips
    ),
    components(
        schemas(
            // Entities
            crate::entities::common::ErrorResponse,
            crate::entities::common::MessageResponse,
            crate::entities::auth::OtpResponse,
            crate::entities::auth::RegisterResponse,
            crate::entities::auth::LoginResponse,
            crate::entities::assessment::AssessmentResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentHealthStatus,

            // Domain schemas
            health_sync_domain::entities::vitals::Metric,
            health_sync_domain::entities::vitals::Status,
            health_sync_domain::entities::vitals::InputBounds,
            health_sync_domain::entities::vitals::AssessmentInput,
            health_sync_domain::entities::vitals::AssessmentRequest,
            health_sync_domain::entities::assessment::VerdictTier,
            health_sync_domain::entities::assessment::AssessmentResult,
            health_sync_domain::entities::assessment::ChartPoint,
            health_sync_domain::entities::assessment::AssessmentReport,
            health_sync_domain::entities::assessment::MetricReference,
            health_sync_domain::entities::assessment::HealthTip,
            health_sync_domain::entities::account::OtpRequest,
            health_sync_domain::entities::account::RegisterRequest,
            health_sync_domain::entities::account::LoginRequest,
            health_sync_domain::entities::account::UserInfo
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "auth", description = "Demo registration, login and sessions"),
        (name = "assessments", description = "Vital-sign classification and reports")
    ),
    info(
        title = "HealthSync API",
        version = "0.1.0",
        description = "Classifies vital-sign readings into a severity verdict",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
