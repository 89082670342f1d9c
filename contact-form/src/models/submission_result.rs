use serde::Deserialize;

/// Answer of `/api/contact`
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
