use crate::errors::token_error::TokenError;
use log::warn;
use std::future::Future;
use std::time::Duration;

/// Action name the token is minted for
pub const SUBMIT_ACTION: &str = "submit";

/// Source of bot-detection tokens, normally the reCAPTCHA v3 script of the page
pub trait TokenProvider: Send + Sync {
    fn execute(&self, action: &str) -> impl Future<Output = Result<String, TokenError>> + Send;
}

/// Fetches a token for a submission, or an empty one when none can be had.
/// The server decides what an empty token means.
pub async fn obtain_risk_token<P: TokenProvider>(provider: Option<&P>, timeout: Duration) -> String {
    let Some(provider) = provider else {
        warn!("reCAPTCHA site key not configured, submitting without a token");
        return String::new();
    };

    match tokio::time::timeout(timeout, provider.execute(SUBMIT_ACTION)).await {
        Ok(Ok(token)) => token,
        Ok(Err(error)) => {
            warn!("Could not obtain a reCAPTCHA token: {error}");
            String::new()
        }
        Err(_) => {
            warn!("reCAPTCHA did not answer within {timeout:?}");
            String::new()
        }
    }
}
