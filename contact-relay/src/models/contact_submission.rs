use crate::errors::contact_error::ContactError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email shape pattern is valid")
});

/// Contact form payload as it travels over the wire
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recaptcha_token: Option<String>,
}

/// A submission that passed the server-side presence and shape checks
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Validates the request and splits off the risk token
    pub fn from_request(
        request: ContactRequest,
    ) -> Result<(ContactSubmission, Option<String>), ContactError> {
        let (Some(name), Some(email), Some(message)) = (
            present(request.name),
            present(request.email),
            present(request.message),
        ) else {
            return Err(ContactError::MissingFields);
        };

        if !is_email_shaped(&email) {
            return Err(ContactError::InvalidEmail);
        }

        let token = request.recaptcha_token.filter(|token| !token.is_empty());
        Ok((
            ContactSubmission {
                name,
                email,
                message,
            },
            token,
        ))
    }
}

pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

fn present(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
