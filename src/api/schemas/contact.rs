use serde::{Deserialize, Serialize};

/// Body returned for an accepted submission. `reply` is only present on the
/// chat path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}
