pub mod email;
pub mod submission;

pub use email::{Attachment, OutboundEmail};
pub use submission::{FormKind, SubmissionRecord};
