use thiserror::Error;
use tokio::time::error::Elapsed;

#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("Verification is enforced but no secret is configured")]
    MissingSecret,
    #[error("No risk token was supplied")]
    MissingToken,
    #[error("Verifier rejected the token (success: {success}, score: {score})")]
    Rejected { success: bool, score: f64 },
    #[error("Could not reach the verifier: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Verifier did not answer in time")]
    TimedOut(#[from] Elapsed),
}
