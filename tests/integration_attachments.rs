#![allow(clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, clippy::must_use_candidate, missing_debug_implementations, unreachable_pub)]

use axum::http::StatusCode;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::multipart::{Form, Part};

mod common;

const RESUME_BYTES: &[u8] = b"%PDF-1.4\nfake resume payload\n";

#[tokio::test]
async fn test_multipart_attachment_round_trip() {
    let app = common::TestApp::spawn().await;

    let form = Form::new()
        .text("formType", "job-application")
        .text("name", "Jane Doe")
        .text("email", "jane@example.com")
        .text("jobTitle", "SAP Consultant")
        .text("experience", "5 years")
        .part(
            "resumeFile",
            Part::bytes(RESUME_BYTES.to_vec()).file_name("resume.pdf").mime_str("application/pdf").unwrap(),
        );

    let resp = app.post_multipart(form).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = app.mailer.sent();
    assert_eq!(sent.len(), 2);

    let attachment = sent[0].attachment.as_ref().expect("notification should carry the attachment");
    assert_eq!(attachment.filename, "resume.pdf");
    assert_eq!(attachment.content_type, "application/pdf");
    assert_eq!(BASE64.decode(&attachment.data).unwrap(), RESUME_BYTES);

    assert!(sent[0].html.contains("<p><strong>Resume:</strong> Attached as file</p>"));
    assert!(sent[0].html.contains("SAP Consultant"));

    // The confirmation never carries the file.
    assert!(sent[1].attachment.is_none());
}

#[tokio::test]
async fn test_multipart_without_file_uses_resume_text() {
    let app = common::TestApp::spawn().await;

    let form = Form::new()
        .text("formType", "job-application")
        .text("name", "Jane Doe")
        .text("email", "jane@example.com")
        .text("resume", "Ten years of ERP rollouts");

    let resp = app.post_multipart(form).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let sent = app.mailer.sent();
    assert!(sent[0].attachment.is_none());
    assert!(sent[0].html.contains("Ten years of ERP rollouts"));
}

#[tokio::test]
async fn test_multipart_fields_validate_like_json() {
    let app = common::TestApp::spawn().await;

    let form = Form::new().text("formType", "job-application").text("name", "Jane Doe");

    let resp = app.post_multipart(form).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Required fields are missing");
}
