/// File uploaded alongside a submission, held as base64 text.
///
/// Built once by the intake normalizer from the raw multipart bytes and
/// consumed exactly once as a mail attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub data: String,
    pub content_type: String,
}

/// One outbound mail message, built by the formatter and handed straight to
/// the transport.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub attachment: Option<Attachment>,
}
