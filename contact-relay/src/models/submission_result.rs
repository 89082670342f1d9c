use serde::{Deserialize, Serialize};

/// Body of every `/api/contact` answer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn sent() -> Self {
        SubmissionResult {
            success: true,
            message: Some(String::from("Email sent successfully")),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        SubmissionResult {
            success: false,
            message: None,
            error: Some(error),
        }
    }
}
