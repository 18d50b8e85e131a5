use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// User-facing failures of the game controller.
///
/// Each variant renders as the error view. Messages are fixed or built from
/// request input only; internal diagnostics are logged, never shown.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The catalog store could not answer. Carries the operation's fixed message.
    #[error("{0}")]
    StoreFailure(&'static str),

    /// No game with the requested id. Carries the id exactly as requested.
    #[error("There was a problem displaying the game id='{0}'.")]
    NotFound(String),

    /// The request named an operation the controller does not define.
    #[error("Calling method '{0}' caused errors. Route does not exist.")]
    UnknownOperation(String),

    /// An explicit error page with a caller-provided message.
    #[error("{0}")]
    Message(String),
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::StoreFailure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_FAILURE"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::UnknownOperation(_) => (StatusCode::NOT_FOUND, "UNKNOWN_OPERATION"),
            AppError::Message(_) => (StatusCode::BAD_REQUEST, "ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = json!({
            "error": self.to_string(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
