use axum::{extract::State, http::StatusCode, Extension, Json};
use tracing::{info, instrument};

use health_sync_domain::entities::account::{LoginRequest, OtpRequest, RegisterRequest, UserInfo};

use crate::api::extractors::ApiJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::entities::auth::{LoginResponse, OtpResponse, RegisterResponse};
use crate::entities::common::{ErrorResponse, MessageResponse};

/// Issue a demo one-time code for an email and phone
#[utoipa::path(
    post,
    path = "/auth/otp",
    request_body = OtpRequest,
    responses(
        (status = 200, description = "Code issued", body = OtpResponse),
        (status = 400, description = "Email or phone missing", body = ErrorResponse)
    ),
    tag = "auth"
)]
#[instrument(skip(state, request))]
pub async fn request_otp(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<OtpRequest>,
) -> Result<Json<OtpResponse>, ErrorResponse> {
    let issued = state.accounts.request_otp(request).await?;

    Ok(Json(OtpResponse {
        message: format!("Demo OTP (sent to email): {}", issued.code),
        email: issued.email,
        otp: issued.code,
        expires_at: issued.expires_at,
    }))
}

/// Create an account from a previously issued code
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Invalid input or code", body = ErrorResponse)
    ),
    tag = "auth"
)]
#[instrument(skip(state, request))]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ErrorResponse> {
    let user = state.accounts.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Account created successfully! You can now login.".to_string(),
            user,
        }),
    ))
}

/// Sign in and receive a session token
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    ),
    tag = "auth"
)]
#[instrument(skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ErrorResponse> {
    let session = state.accounts.login(request).await?;

    Ok(Json(LoginResponse {
        access_token: session.token,
        token_type: "Bearer".to_string(),
        expires_at: session.expires_at,
        message: format!("Welcome back, {} ✅", session.user.username),
        user: session.user,
    }))
}

/// End the current session
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Signed out", body = MessageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
#[instrument(skip(state, current))]
pub async fn logout(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<MessageResponse>, ErrorResponse> {
    state.accounts.logout(&current.token).await?;
    info!("Session closed for {}", current.user.username);

    Ok(Json(MessageResponse {
        message: "You are logged out.".to_string(),
    }))
}

/// Details of the signed-in user
#[utoipa::path(
    get,
    path = "/auth/info",
    responses(
        (status = 200, description = "Current user", body = UserInfo),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
#[instrument(skip(current))]
pub async fn auth_info(Extension(current): Extension<CurrentUser>) -> Json<UserInfo> {
    Json(current.user)
}
