use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("reCAPTCHA script could not be loaded")]
    ScriptUnavailable,
    #[error("reCAPTCHA site key may be invalid or the domain is not registered")]
    InvalidSiteKey,
    #[error("reCAPTCHA execution failed: {0}")]
    Execution(String),
}
