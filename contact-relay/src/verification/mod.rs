use crate::errors::unknown_value_error::UnknownValueError;
use crate::errors::verification_error::VerificationError;
use std::{future::Future, str::FromStr};

pub mod recaptcha;

/// How strictly submissions are checked for bots
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RiskCheckMode {
    /// A secret must be configured and every submission must carry a passing token
    Enforced,
    /// Tokens are verified when a secret is configured, skipped otherwise
    #[default]
    Optional,
    /// Tokens are never verified
    Disabled,
}

impl FromStr for RiskCheckMode {
    type Err = UnknownValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "enforced" => Ok(RiskCheckMode::Enforced),
            "optional" => Ok(RiskCheckMode::Optional),
            "disabled" => Ok(RiskCheckMode::Disabled),
            _ => Err(UnknownValueError::new("risk check mode", value)),
        }
    }
}

/// Decides whether a submission's risk token proves a human sent it
pub trait RiskVerifier: Send + Sync + 'static {
    fn verify(
        &self,
        token: Option<&str>,
    ) -> impl Future<Output = Result<(), VerificationError>> + Send;
}
