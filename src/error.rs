use crate::services::mailer::MailError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    MissingField(&'static str),
    #[error("Malformed request body: {0}")]
    MalformedRequest(String),
    #[error("Mail transport error: {0}")]
    Mail(#[from] MailError),
    #[error("Internal server error")]
    Internal,
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingField(msg) => {
                tracing::debug!(message = %msg, "Submission rejected");
                (StatusCode::BAD_REQUEST, msg.to_string())
            }
            Self::MalformedRequest(detail) => {
                tracing::debug!(detail = %detail, "Unparseable request body");
                (StatusCode::BAD_REQUEST, "Malformed request body".to_string())
            }
            Self::Mail(e) => {
                tracing::error!(error = %e, "Mail transport error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to process the request".to_string())
            }
            Self::Internal => {
                tracing::error!("Internal server error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to process the request".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
