use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid upload: {message}")]
    InvalidUpload { code: &'static str, message: String },

    #[error("Question index {index:?} is out of range (total questions: {total})")]
    OutOfRange { index: Option<i64>, total: usize },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl Error {
    pub fn invalid_upload(code: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidUpload {
            code,
            message: message.into(),
        }
    }

    /// Machine-readable reason code carried in the `error` field of the response body.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::InvalidUpload { code, .. } => *code,
            Error::OutOfRange { .. } => "invalid_question_index",
            Error::BadRequest(_) => "bad_request",
            Error::Validation(_) => "validation_error",
            Error::Multipart(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                "file_too_large"
            }
            Error::Multipart(_) => "invalid_multipart",
            Error::Internal(_) | Error::Io(_) => "internal_error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let code = self.code();
        let (status, message) = match self {
            Error::InvalidUpload { message, .. } => (StatusCode::BAD_REQUEST, message),
            Error::OutOfRange { index, total } => (
                StatusCode::BAD_REQUEST,
                match index {
                    Some(i) => format!("Question index {} does not exist ({} loaded)", i, total),
                    None => "question_index is required".to_string(),
                },
            ),
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Multipart(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Uploaded file exceeds the size limit".to_string(),
            ),
            Error::Multipart(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
            Error::Io(err) => {
                tracing::error!("IO error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
            Error::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": code, "message": message }));
        (status, body).into_response()
    }
}
