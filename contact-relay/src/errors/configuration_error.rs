use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("MY_EMAIL, OWNER_EMAIL or SMTP_USER must be set to receive contact messages")]
    MissingOwnerAddress,
    #[error("{key} has an invalid value: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("RISK_CHECK_MODE is enforced but SITE_SECRET_KEY is not set")]
    MissingSecret,
}
