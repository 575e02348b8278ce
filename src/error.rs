use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error surface of the HTTP routes. Every variant maps to a status code
/// and a `{"error": "..."}` JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Missing OpenAI API key")]
    MissingApiKey,

    #[error("Missing prediction endpoint URL")]
    PredictorNotConfigured,

    /// Upstream failure; the upstream message passes through verbatim.
    #[error("{0}")]
    Upstream(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::PredictorNotConfigured | Self::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
