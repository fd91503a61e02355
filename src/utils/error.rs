use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use crate::params::responses::common::ApiResponse;

/// Handler failure rendered as `{"success": false, "message": ...}`.
///
/// The message is the user-facing one; internal detail is logged where the
/// error is created and never leaves the process.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: &str) -> AppError {
        AppError {
            status,
            message: message.to_string(),
        }
    }

    pub fn bad_request(message: &str) -> AppError {
        AppError::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: &str) -> AppError {
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::failure(&self.message))).into_response()
    }
}
