use axum::extract::FromRequest;

use crate::entities::common::ErrorResponse;

/// JSON request body whose rejections are reported as [`ErrorResponse`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ErrorResponse))]
pub struct ApiJson<T>(pub T);
