use crate::api::AppState;
use crate::api::schemas::contact::SubmissionResponse;
use crate::error::{AppError, Result};
use crate::services::intake;
use axum::{
    Json,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::IntoResponse,
};

/// Largest request body accepted, attachment included.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Accepts one form submission, multipart or JSON, and runs it through the
/// lead pipeline.
///
/// # Errors
/// Returns `AppError::MalformedRequest` if the body cannot be parsed,
/// `AppError::MissingField` if validation fails, or `AppError::Mail` if a
/// gating email send fails.
pub async fn submit(State(state): State<AppState>, request: Request) -> Result<impl IntoResponse> {
    let content_type =
        request.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or_default();

    let record = if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &state)
            .await
            .map_err(|e| AppError::MalformedRequest(e.to_string()))?;
        intake::from_multipart(multipart).await?
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
            .await
            .map_err(|e| AppError::MalformedRequest(e.to_string()))?;
        intake::from_json(&bytes)?
    };

    let outcome = state.lead_service.process(record).await?;

    Ok(Json(SubmissionResponse { success: true, reply: outcome.reply }))
}
