use crate::domain::{Attachment, FormKind, SubmissionRecord};
use crate::error::AppError;
use axum::extract::Multipart;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;
use std::collections::BTreeMap;

/// Multipart field name carrying the uploaded file.
const ATTACHMENT_FIELD: &str = "resumeFile";

/// Normalizes a multipart form body into a `SubmissionRecord`.
///
/// Text parts copy through as strings; a file part under `resumeFile` is read
/// fully and base64-encoded. Blank values are treated as absent.
///
/// # Errors
/// Returns `AppError::MalformedRequest` if the multipart stream is invalid.
pub async fn from_multipart(mut multipart: Multipart) -> Result<SubmissionRecord, AppError> {
    let mut builder = RecordBuilder::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| AppError::MalformedRequest(e.to_string()))? {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };

        if name == ATTACHMENT_FIELD && field.file_name().is_some() {
            let filename = field.file_name().unwrap_or("upload").to_owned();
            let content_type = field.content_type().unwrap_or("application/octet-stream").to_owned();
            let bytes = field.bytes().await.map_err(|e| AppError::MalformedRequest(e.to_string()))?;
            builder.attachment = Some(Attachment { filename, data: BASE64.encode(&bytes), content_type });
        } else {
            let text = field.text().await.map_err(|e| AppError::MalformedRequest(e.to_string()))?;
            builder.set(&name, text);
        }
    }

    Ok(builder.finish())
}

/// Normalizes a JSON body into a `SubmissionRecord`.
///
/// Scalar values are stringified so multipart and JSON intake share one code
/// path; nulls and blank strings are treated as absent.
///
/// # Errors
/// Returns `AppError::MalformedRequest` if the body is not a JSON object.
pub fn from_json(body: &[u8]) -> Result<SubmissionRecord, AppError> {
    let map: serde_json::Map<String, Value> =
        serde_json::from_slice(body).map_err(|e| AppError::MalformedRequest(e.to_string()))?;

    let mut builder = RecordBuilder::default();
    for (key, value) in map {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        };
        builder.set(&key, text);
    }

    Ok(builder.finish())
}

#[derive(Debug, Default)]
struct RecordBuilder {
    form_type: Option<String>,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    company: Option<String>,
    message: Option<String>,
    job_title: Option<String>,
    experience: Option<String>,
    resume_link: Option<String>,
    resume: Option<String>,
    interest: Option<String>,
    product: Option<String>,
    current_page: Option<String>,
    send_confirmation: Option<bool>,
    attachment: Option<Attachment>,
    extra: BTreeMap<String, String>,
}

impl RecordBuilder {
    fn set(&mut self, key: &str, value: String) {
        if value.trim().is_empty() {
            return;
        }

        match key {
            "formType" => self.form_type = Some(value),
            "name" => self.name = Some(value),
            "email" => self.email = Some(value),
            "phone" => self.phone = Some(value),
            "company" => self.company = Some(value),
            "message" => self.message = Some(value),
            "jobTitle" => self.job_title = Some(value),
            "experience" => self.experience = Some(value),
            "resumeLink" => self.resume_link = Some(value),
            "resume" => self.resume = Some(value),
            "interest" => self.interest = Some(value),
            "product" => self.product = Some(value),
            "currentPage" => self.current_page = Some(value),
            "sendConfirmation" => {
                let declined = value.trim().eq_ignore_ascii_case("false") || value.trim() == "0";
                self.send_confirmation = Some(!declined);
            }
            _ => {
                self.extra.insert(key.to_owned(), value);
            }
        }
    }

    fn finish(self) -> SubmissionRecord {
        SubmissionRecord {
            form: FormKind::from_wire(self.form_type.as_deref()),
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            message: self.message,
            job_title: self.job_title,
            experience: self.experience,
            resume_link: self.resume_link,
            resume: self.resume,
            interest: self.interest,
            product: self.product,
            current_page: self.current_page,
            send_confirmation: self.send_confirmation,
            attachment: self.attachment,
            extra: self.extra,
        }
    }
}
