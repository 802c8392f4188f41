//! HTML formatting for operator notifications, submitter confirmations, and
//! chat log emails.
//!
//! Every category renders a fixed fragment from the typed record fields.
//! Missing optional fields always render a placeholder, never blank output.

use crate::config::MailConfig;
use crate::domain::{FormKind, OutboundEmail, SubmissionRecord};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const NOT_PROVIDED: &str = "Not provided";
const NOT_SPECIFIED: &str = "Not specified";

/// Builds the operator notification for a non-chat submission.
#[must_use]
pub fn notification_email(record: &SubmissionRecord, mail: &MailConfig) -> OutboundEmail {
    let label = record.form.label();
    let name = record.name.as_deref().unwrap_or(NOT_PROVIDED);
    let email = record.email.as_deref().unwrap_or("no email");

    let html = format!(
        "<div>\
         <h2>New {heading} Form Submission</h2>\
         <p>Submitted by {name} ({email})</p>\
         {fragment}\
         <p>This message was sent automatically from the Atlas Technosoft website contact form.</p>\
         </div>",
        heading = title_case(label),
        fragment = fragment(record),
    );

    OutboundEmail {
        from: mail.from_address.clone(),
        to: mail.operator_inbox.clone(),
        subject: format!("New {label} form submission from {name}"),
        html,
        attachment: record.attachment.clone(),
    }
}

/// Builds the submitter-facing confirmation for a non-chat submission.
#[must_use]
pub fn confirmation_email(record: &SubmissionRecord, mail: &MailConfig) -> OutboundEmail {
    let first = first_name(record.name.as_deref());
    let year = OffsetDateTime::now_utc().year();

    let html = format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
         <img src=\"{logo}\" alt=\"Atlas Technosoft\" width=\"180\" />\
         <p>Hi {first},</p>\
         <p>{body}</p>\
         <p>Warm regards,<br />The Atlas Technosoft Team</p>\
         <hr />\
         <p style=\"font-size: 12px; color: #666;\">\
         Need anything else? Call us at {phone} or write to {support}.<br />\
         &copy; {year} Atlas Technosoft. All rights reserved.\
         </p>\
         </div>",
        logo = mail.logo_url,
        body = confirmation_paragraph(record.form),
        phone = mail.support_phone,
        support = mail.operator_inbox,
    );

    OutboundEmail {
        from: mail.from_address.clone(),
        to: record.email.clone().unwrap_or_default(),
        subject: confirmation_subject(record.form).to_string(),
        html,
        attachment: None,
    }
}

/// Builds the best-effort operator log for a chat exchange.
#[must_use]
pub fn chat_log_email(record: &SubmissionRecord, mail: &MailConfig) -> OutboundEmail {
    let timestamp = OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_else(|_| "unknown".to_string());

    let html = format!(
        "<div>\
         <h2>New Chat Message</h2>\
         <p><strong>Message:</strong> {message}</p>\
         <p><strong>Page:</strong> {page}</p>\
         <p><strong>Time:</strong> {timestamp}</p>\
         <p><strong>Visitor email:</strong> {email}</p>\
         </div>",
        message = record.message.as_deref().unwrap_or(NOT_PROVIDED),
        page = record.current_page.as_deref().unwrap_or("Unknown"),
        email = record.email.as_deref().unwrap_or("No email provided"),
    );

    OutboundEmail {
        from: mail.from_address.clone(),
        to: mail.operator_inbox.clone(),
        subject: "New chat message from website visitor".to_string(),
        html,
        attachment: None,
    }
}

/// Category-specific body fragment of the operator notification.
fn fragment(record: &SubmissionRecord) -> String {
    match record.form {
        FormKind::Contact => {
            row("Phone", record.phone.as_deref().unwrap_or(NOT_PROVIDED))
                + &row("Company", record.company.as_deref().unwrap_or(NOT_PROVIDED))
                + &row("Message", record.message.as_deref().unwrap_or(NOT_PROVIDED))
        }
        FormKind::Consultation => {
            row("Phone", record.phone.as_deref().unwrap_or(NOT_PROVIDED))
                + &row("Company", record.company.as_deref().unwrap_or(NOT_PROVIDED))
                + &row("Interest", record.interest.as_deref().unwrap_or(NOT_SPECIFIED))
                + &row("Message", record.message.as_deref().unwrap_or(NOT_PROVIDED))
        }
        FormKind::JobApplication => {
            row("Position", record.job_title.as_deref().unwrap_or(NOT_SPECIFIED))
                + &row("Experience", record.experience.as_deref().unwrap_or(NOT_PROVIDED))
                + &row("Phone", record.phone.as_deref().unwrap_or(NOT_PROVIDED))
                + &resume_row(record)
        }
        FormKind::Newsletter => {
            format!(
                "<p>User has subscribed to the newsletter.</p>{}",
                row("Email", record.email.as_deref().unwrap_or(NOT_PROVIDED))
            )
        }
        FormKind::DemoRequest => {
            row("Product", record.product.as_deref().unwrap_or(NOT_SPECIFIED))
                + &row("Company", record.company.as_deref().unwrap_or(NOT_PROVIDED))
                + &row("Phone", record.phone.as_deref().unwrap_or(NOT_PROVIDED))
                + &row("Message", record.message.as_deref().unwrap_or(NOT_PROVIDED))
        }
        FormKind::Chat | FormKind::Other => generic_fragment(record),
    }
}

/// Fallback renderer: every present field as a labeled list, so an unknown
/// form type still produces a readable notification.
fn generic_fragment(record: &SubmissionRecord) -> String {
    let mut out = String::new();

    for (label, value) in record.labeled_fields() {
        out.push_str(&row(label, value));
    }
    for (key, value) in &record.extra {
        out.push_str(&row(&humanize(key), value));
    }

    if out.is_empty() {
        out.push_str("<p>No additional details were submitted.</p>");
    }
    out
}

fn resume_row(record: &SubmissionRecord) -> String {
    if record.attachment.is_some() {
        row("Resume", "Attached as file")
    } else if let Some(link) = record.resume_link.as_deref() {
        row("Resume link", link)
    } else {
        row("Resume", record.resume.as_deref().unwrap_or(NOT_PROVIDED))
    }
}

fn row(label: &str, value: &str) -> String {
    format!("<p><strong>{label}:</strong> {value}</p>")
}

/// Confirmation subject line, keyed by category with a default arm.
#[must_use]
pub const fn confirmation_subject(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Contact => "Thank you for contacting Atlas Technosoft",
        FormKind::Consultation => "Your consultation request has been received",
        FormKind::JobApplication => "Your application has been received",
        FormKind::Newsletter => "Welcome to Atlas Technosoft Newsletter",
        FormKind::DemoRequest => "Your demo request has been received",
        FormKind::Chat => "Thanks for chatting with Atlas Technosoft",
        FormKind::Other => "Thank you for reaching out to Atlas Technosoft",
    }
}

const fn confirmation_paragraph(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Contact => {
            "We have received your message and our team will get back to you within one business day."
        }
        FormKind::Consultation => {
            "Thank you for requesting a consultation. One of our consultants will contact you shortly to \
             schedule a convenient time."
        }
        FormKind::JobApplication => {
            "Thank you for your interest in joining Atlas Technosoft. Our recruitment team will review your \
             application and contact you if your profile matches an open position."
        }
        FormKind::Newsletter => {
            "Welcome aboard! You will now receive our latest insights on SAP, ERP, and automation solutions \
             straight to your inbox."
        }
        FormKind::DemoRequest => {
            "Thank you for your interest in a demo. Our team will reach out shortly to schedule a session \
             tailored to your requirements."
        }
        FormKind::Chat => "Thanks for chatting with us. If you left your contact details, our team will follow up shortly.",
        FormKind::Other => {
            "Thank you for getting in touch. Our team will review your submission and respond as soon as possible."
        }
    }
}

/// First whitespace-delimited token of the submitter's name, for greeting.
fn first_name(name: Option<&str>) -> &str {
    name.and_then(|n| n.split_whitespace().next()).unwrap_or("there")
}

/// `job-application` -> `Job-Application`, `general` -> `General`.
fn title_case(label: &str) -> String {
    label
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| first.to_uppercase().collect::<String>() + chars.as_str())
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// `currentPage` -> `Current Page` for extras-bag labels.
fn humanize(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}
