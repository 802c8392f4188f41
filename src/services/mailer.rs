use crate::config::SmtpConfig;
use crate::domain::OutboundEmail;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use lettre::message::{Attachment as AttachmentPart, Message, MultiPart, SinglePart, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Failed to build mail message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("Invalid attachment content type: {0}")]
    ContentType(#[from] lettre::message::header::ContentTypeErr),
    #[error("Invalid attachment payload: {0}")]
    Payload(#[from] base64::DecodeError),
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("Mail transport unavailable: {0}")]
    Unavailable(String),
}

/// Outbound mail transport.
///
/// The pipeline receives this as an explicit dependency so tests can
/// substitute a recording fake without touching process environment.
#[async_trait]
pub trait Mailer: Send + Sync + std::fmt::Debug {
    /// Delivers one message.
    ///
    /// # Errors
    /// Returns `MailError` if the message cannot be built or the relay rejects it.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;

    /// Verifies connectivity to the underlying relay, for readiness probes.
    ///
    /// # Errors
    /// Returns `MailError::Unavailable` if the relay cannot be reached.
    async fn verify(&self) -> Result<(), MailError>;
}

/// SMTP-backed `Mailer` built once at startup and reused across requests.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the pooled SMTP transport from configuration.
    ///
    /// # Errors
    /// Returns `MailError::Transport` if the relay parameters are invalid.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let mut builder = if config.implicit_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };

        builder = builder.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self { transport: builder.build() })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let message = build_message(email)?;
        self.transport.send(message).await?;
        Ok(())
    }

    async fn verify(&self) -> Result<(), MailError> {
        if self.transport.test_connection().await? {
            Ok(())
        } else {
            Err(MailError::Unavailable("SMTP relay refused the connection test".to_string()))
        }
    }
}

fn build_message(email: &OutboundEmail) -> Result<Message, MailError> {
    let builder =
        Message::builder().from(email.from.parse()?).to(email.to.parse()?).subject(email.subject.clone());

    let message = match &email.attachment {
        Some(attachment) => {
            let payload = BASE64.decode(&attachment.data)?;
            let content_type = ContentType::parse(&attachment.content_type)?;
            builder.multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::html(email.html.clone()))
                    .singlepart(AttachmentPart::new(attachment.filename.clone()).body(payload, content_type)),
            )?
        }
        None => builder.singlepart(SinglePart::html(email.html.clone()))?,
    };

    Ok(message)
}
