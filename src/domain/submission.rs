use crate::domain::Attachment;
use std::collections::BTreeMap;

/// Routing discriminator for an inbound form submission.
///
/// Parsed from the `formType` field; any unrecognized or absent value maps to
/// `Other`, which selects the generic template downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Consultation,
    JobApplication,
    Newsletter,
    DemoRequest,
    Chat,
    #[default]
    Other,
}

impl FormKind {
    #[must_use]
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("contact") => Self::Contact,
            Some("consultation") => Self::Consultation,
            Some("job-application") => Self::JobApplication,
            Some("newsletter") => Self::Newsletter,
            Some("demo-request") => Self::DemoRequest,
            Some("chat") => Self::Chat,
            _ => Self::Other,
        }
    }

    /// Category label used in email subjects and headers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Consultation => "consultation",
            Self::JobApplication => "job-application",
            Self::Newsletter => "newsletter",
            Self::DemoRequest => "demo-request",
            Self::Chat => "chat",
            Self::Other => "general",
        }
    }

    #[must_use]
    pub const fn is_chat(self) -> bool {
        matches!(self, Self::Chat)
    }
}

/// Normalized representation of one inbound submission.
///
/// Recognized fields are typed; anything else the client sent lands in the
/// `extra` bag, which only the generic formatter reads. Lives for the duration
/// of one request and is never persisted.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRecord {
    pub form: FormKind,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub job_title: Option<String>,
    pub experience: Option<String>,
    pub resume_link: Option<String>,
    pub resume: Option<String>,
    pub interest: Option<String>,
    pub product: Option<String>,
    pub current_page: Option<String>,
    pub send_confirmation: Option<bool>,
    pub attachment: Option<Attachment>,
    pub extra: BTreeMap<String, String>,
}

impl SubmissionRecord {
    /// Present recognized fields with their display labels, in declaration
    /// order. The generic formatter renders these as a labeled list.
    #[must_use]
    pub fn labeled_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Company", &self.company),
            ("Message", &self.message),
            ("Job Title", &self.job_title),
            ("Experience", &self.experience),
            ("Resume Link", &self.resume_link),
            ("Resume", &self.resume),
            ("Interest", &self.interest),
            ("Product", &self.product),
            ("Current Page", &self.current_page),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}
