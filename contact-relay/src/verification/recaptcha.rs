use super::{RiskCheckMode, RiskVerifier};
use crate::config::RiskConfig;
use crate::errors::verification_error::VerificationError;
use crate::outbound::OutboundPolicy;
use serde::Deserialize;

pub const SITE_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
pub const SCORE_THRESHOLD: f64 = 0.5;

#[derive(Deserialize, Debug)]
struct SiteVerifyResponse {
    success: bool,
    #[serde(default)]
    score: f64,
}

/// Verifies reCAPTCHA v3 tokens against the siteverify endpoint
pub struct RecaptchaVerifier {
    client: reqwest::Client,
    mode: RiskCheckMode,
    secret: Option<String>,
    verify_url: String,
    policy: OutboundPolicy,
}

impl RecaptchaVerifier {
    pub fn new(config: &RiskConfig, policy: OutboundPolicy) -> Self {
        RecaptchaVerifier {
            client: reqwest::Client::new(),
            mode: config.mode,
            secret: config.secret.clone(),
            verify_url: config.verify_url.clone(),
            policy,
        }
    }

    async fn site_verify(
        &self,
        secret: &str,
        token: &str,
    ) -> Result<SiteVerifyResponse, VerificationError> {
        let response = self
            .client
            .post(&self.verify_url)
            .query(&[("secret", secret), ("response", token)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<SiteVerifyResponse>().await?)
    }
}

impl RiskVerifier for RecaptchaVerifier {
    async fn verify(&self, token: Option<&str>) -> Result<(), VerificationError> {
        let secret = match (self.mode, self.secret.as_deref()) {
            (RiskCheckMode::Disabled, _) | (RiskCheckMode::Optional, None) => return Ok(()),
            (RiskCheckMode::Enforced, None) => return Err(VerificationError::MissingSecret),
            (_, Some(secret)) => secret,
        };

        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return Err(VerificationError::MissingToken);
        };

        let answer = self
            .policy
            .run("reCAPTCHA verification", || self.site_verify(secret, token))
            .await?;

        if answer.success && answer.score >= SCORE_THRESHOLD {
            Ok(())
        } else {
            Err(VerificationError::Rejected {
                success: answer.success,
                score: answer.score,
            })
        }
    }
}
