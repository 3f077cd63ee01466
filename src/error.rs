use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Failure reaching an upstream provider.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Network-level failure, a non-success status folded in by
    /// `error_for_status`, or an undecodable body.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx from a provider whose status and error body are passed
    /// through to the caller.
    #[error("upstream responded with status {status}")]
    Status { status: StatusCode, body: Value },
}

/// The single translation boundary from internal failures to HTTP
/// responses. Every handler returns this; nothing maps status codes by
/// hand.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("Invalid currency code")]
    UnknownCurrency,
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Upstream(UpstreamError::Transport(e)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Value::String(e.to_string()),
            ),
            ApiError::Upstream(UpstreamError::Status { status, body }) => (status, body),
            ApiError::UnknownCurrency => (
                StatusCode::NOT_FOUND,
                Value::String("Invalid currency code".to_string()),
            ),
            ApiError::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Value::String(format!("Database error: {}", e)),
            ),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
