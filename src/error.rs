use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::models::ride::RideStatus;
use crate::models::role::Role;
use crate::upstream::ApiError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition { from: RideStatus, to: RideStatus },

    #[error("{role} may not move a ride from {from} to {to}")]
    Forbidden {
        role: Role,
        from: RideStatus,
        to: RideStatus,
    },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("ride api error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { status: 404, message } => AppError::NotFound(message),
            ApiError::Rejected { status, message } => AppError::Upstream { status, message },
            ApiError::Network(err) => AppError::Upstream {
                status: 0,
                message: err.to_string(),
            },
            ApiError::InvalidResponse(message) => AppError::Upstream { status: 0, message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidTransition { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            AppError::Forbidden { .. } => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Upstream { message, .. } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
