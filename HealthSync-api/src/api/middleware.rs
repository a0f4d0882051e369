use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use health_sync_domain::auth::logging::{log_auth_event, AuthEvent, AuthEventType};
use health_sync_domain::auth::AccountServiceError;
use health_sync_domain::entities::account::UserInfo;

use crate::api::AppState;
use crate::entities::common::ErrorResponse;

/// The authenticated caller, inserted into request extensions by [`require_session`]
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Account behind the session
    pub user: UserInfo,
    /// Bearer token the request carried
    pub token: String,
}

fn bearer_token(req: &Request) -> Result<String, &'static str> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or("Missing Authorization header")?;
    let value = value.to_str().map_err(|_| "Invalid Authorization header format")?;
    let token = match value.trim_start().split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("Bearer") => token.trim(),
        _ => return Err("Authorization header does not contain Bearer token"),
    };
    if token.is_empty() {
        return Err("Empty bearer token");
    }
    Ok(token.to_string())
}

/// Reject requests without a live session token
pub async fn require_session(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let request_path = req.uri().path().to_string();
    let start_time = Instant::now();

    let token = match bearer_token(&req) {
        Ok(token) => token,
        Err(reason) => {
            debug!("{}", reason);
            log_auth_event(
                AuthEvent::new(AuthEventType::SessionValidation, None, false)
                    .with_details(reason)
                    .with_resource(request_path)
                    .with_duration(start_time.elapsed().as_millis() as u64),
            );
            return ErrorResponse::unauthorized(reason).into_response();
        }
    };

    match state.accounts.authenticate(&token).await {
        Ok(user) => {
            log_auth_event(
                AuthEvent::new(AuthEventType::SessionValidation, Some(user.username.as_str()), true)
                    .with_resource(request_path)
                    .with_duration(start_time.elapsed().as_millis() as u64),
            );
            req.extensions_mut().insert(CurrentUser { user, token });
            next.run(req).await
        }
        Err(err) => {
            if !matches!(err, AccountServiceError::Unauthorized(_)) {
                warn!("Session lookup failed: {}", err);
            }
            log_auth_event(
                AuthEvent::new(AuthEventType::SessionValidation, None, false)
                    .with_details(err.to_string())
                    .with_resource(request_path)
                    .with_duration(start_time.elapsed().as_millis() as u64),
            );
            ErrorResponse::from(err).into_response()
        }
    }
}
