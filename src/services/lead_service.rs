use crate::config::MailConfig;
use crate::domain::{OutboundEmail, SubmissionRecord};
use crate::error::{AppError, Result};
use crate::services::{chat, mailer::Mailer, templates};
use opentelemetry::{
    KeyValue, global,
    metrics::Counter,
};
use std::sync::Arc;

#[derive(Clone, Debug)]
struct Metrics {
    submissions_total: Counter<u64>,
    mail_sent_total: Counter<u64>,
    mail_failed_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("atlas-lead-server");
        Self {
            submissions_total: meter
                .u64_counter("atlas_submissions_total")
                .with_description("Total form submissions accepted for processing")
                .build(),
            mail_sent_total: meter
                .u64_counter("atlas_mail_sent_total")
                .with_description("Outbound emails delivered to the relay")
                .build(),
            mail_failed_total: meter
                .u64_counter("atlas_mail_failed_total")
                .with_description("Outbound emails the relay rejected")
                .build(),
        }
    }
}

/// Result of one processed submission. `reply` is populated on the chat path.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub reply: Option<String>,
}

/// Validates, routes, and dispatches one normalized submission.
///
/// Chat submissions get a canned reply plus a detached best-effort log email;
/// everything else sends an operator notification and, when an address is
/// present, a submitter confirmation. The notification send gates the
/// confirmation send.
#[derive(Clone, Debug)]
pub struct LeadService {
    mailer: Arc<dyn Mailer>,
    mail: MailConfig,
    metrics: Metrics,
}

impl LeadService {
    #[must_use]
    pub fn new(mailer: Arc<dyn Mailer>, mail: MailConfig) -> Self {
        Self { mailer, mail, metrics: Metrics::new() }
    }

    /// Runs the pipeline for one submission.
    ///
    /// # Errors
    /// Returns `AppError::MissingField` when required fields for the selected
    /// path are absent, or `AppError::Mail` when a gating send fails.
    pub async fn process(&self, record: SubmissionRecord) -> Result<SubmissionOutcome> {
        self.metrics.submissions_total.add(1, &[KeyValue::new("form", record.form.label())]);

        if record.form.is_chat() { self.handle_chat(&record) } else { self.handle_notification(&record).await }
    }

    fn handle_chat(&self, record: &SubmissionRecord) -> Result<SubmissionOutcome> {
        let Some(message) = record.message.as_deref().filter(|m| !m.trim().is_empty()) else {
            return Err(AppError::MissingField("Message is required for chat"));
        };

        let reply = chat::reply_for(message);
        self.spawn_chat_log(record);

        tracing::info!(page = record.current_page.as_deref().unwrap_or("Unknown"), "Chat reply generated");
        Ok(SubmissionOutcome { reply: Some(reply.to_string()) })
    }

    /// Fires the operator chat log without blocking the response. A delivery
    /// failure is logged and swallowed.
    fn spawn_chat_log(&self, record: &SubmissionRecord) {
        let email = templates::chat_log_email(record, &self.mail);
        let mailer = Arc::clone(&self.mailer);
        let metrics = self.metrics.clone();

        tokio::spawn(async move {
            match mailer.send(&email).await {
                Ok(()) => metrics.mail_sent_total.add(1, &[KeyValue::new("kind", "chat_log")]),
                Err(e) => {
                    tracing::warn!(error = %e, "Chat log email delivery failed");
                    metrics.mail_failed_total.add(1, &[KeyValue::new("kind", "chat_log")]);
                }
            }
        });
    }

    async fn handle_notification(&self, record: &SubmissionRecord) -> Result<SubmissionOutcome> {
        if record.name.is_none() || record.email.is_none() {
            return Err(AppError::MissingField("Required fields are missing"));
        }

        let notification = templates::notification_email(record, &self.mail);
        self.send_tracked(&notification, "notification").await?;

        if record.email.is_some() && record.send_confirmation != Some(false) {
            let confirmation = templates::confirmation_email(record, &self.mail);
            self.send_tracked(&confirmation, "confirmation").await?;
        }

        tracing::info!(form = record.form.label(), "Submission processed");
        Ok(SubmissionOutcome { reply: None })
    }

    async fn send_tracked(&self, email: &OutboundEmail, kind: &'static str) -> Result<()> {
        match self.mailer.send(email).await {
            Ok(()) => {
                self.metrics.mail_sent_total.add(1, &[KeyValue::new("kind", kind)]);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, kind, "Mail send failed");
                self.metrics.mail_failed_total.add(1, &[KeyValue::new("kind", kind)]);
                Err(e.into())
            }
        }
    }
}
