//! HTTP response types and error mapping
//!
//! Every failure is serialized with a stable `error` literal so clients can
//! branch programmatically instead of string-matching free text. Conflict
//! responses carry the current row_version so a client can re-fetch, re-diff
//! and resubmit.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::errors::AppError;

/// Machine-branchable error body
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Stable literal: "validation", "not_found", "conflict", "unavailable"
    /// or "internal"
    pub error: &'static str,
    pub message: String,
    /// Present on conflict responses only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_row_version: Option<i32>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation { message } => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "validation",
                    message: message.clone(),
                    current_row_version: None,
                },
            ),
            AppError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "not_found",
                    message: format!("{resource} with id {id} not found"),
                    current_row_version: None,
                },
            ),
            AppError::Conflict { current, .. } => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: "conflict",
                    message: "Stale data. Reload and try again.".to_string(),
                    current_row_version: Some(*current),
                },
            ),
            AppError::Unavailable { message } => {
                error!("Store unavailable: {}", message);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorBody {
                        error: "unavailable",
                        message: "Store temporarily unavailable, try again".to_string(),
                        current_row_version: None,
                    },
                )
            }
            AppError::Database(err) => {
                error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal",
                        message: "Database operation failed".to_string(),
                        current_row_version: None,
                    },
                )
            }
            AppError::Configuration { message } => {
                error!("Configuration error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal",
                        message: "Service misconfigured".to_string(),
                        current_row_version: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_body_is_branchable() {
        let body = ErrorBody {
            error: "conflict",
            message: "Stale data. Reload and try again.".to_string(),
            current_row_version: Some(3),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "conflict");
        assert_eq!(json["current_row_version"], 3);
    }

    #[test]
    fn test_version_field_omitted_when_absent() {
        let body = ErrorBody {
            error: "validation",
            message: "bad input".to_string(),
            current_row_version: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("current_row_version").is_none());
    }
}
