use crate::errors::configuration_error::ConfigurationError;
use crate::mail::smtp::{SmtpConfig, SmtpCredentials, SmtpSecurity};
use crate::outbound::OutboundPolicy;
use crate::verification::RiskCheckMode;
use crate::verification::recaptcha::SITE_VERIFY_URL;
use axum::http::HeaderValue;
use email_address::EmailAddress;
use log::{info, warn};
use std::{env, str::FromStr, time::Duration};

/// Sources for the address that receives contact messages, highest priority first
pub const OWNER_ADDRESS_SOURCES: [&str; 3] = ["MY_EMAIL", "OWNER_EMAIL", "SMTP_USER"];
/// Sources for the address contact emails are sent from, highest priority first
pub const SENDER_ADDRESS_SOURCES: [&str; 2] = ["MY_EMAIL", "SMTP_USER"];

const SMTP_USER_SOURCES: [&str; 2] = ["MY_EMAIL", "SMTP_USER"];
const SMTP_PASSWORD_SOURCES: [&str; 2] = ["MY_PASSWORD", "SMTP_PASS"];

#[derive(Clone, Debug)]
pub struct RiskConfig {
    pub mode: RiskCheckMode,
    pub secret: Option<String>,
    pub verify_url: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub frontend_origin: Option<HeaderValue>,
    pub site_name: String,
    pub owner_address: String,
    pub sender_address: String,
    pub smtp: SmtpConfig,
    pub risk: RiskConfig,
    pub outbound: OutboundPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the configuration from any key-value source
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let (owner_key, owner_address) =
            first_of(&var, &OWNER_ADDRESS_SOURCES).ok_or(ConfigurationError::MissingOwnerAddress)?;
        ensure_address(owner_key, &owner_address)?;

        let sender_address = match first_of(&var, &SENDER_ADDRESS_SOURCES) {
            Some((key, address)) => {
                ensure_address(key, &address)?;
                address
            }
            None => {
                info!("No sender address set, sending from {owner_address}");
                owner_address.clone()
            }
        };

        let credentials = match (
            first_of(&var, &SMTP_USER_SOURCES),
            first_of(&var, &SMTP_PASSWORD_SOURCES),
        ) {
            (Some((_, username)), Some((_, password))) => Some(SmtpCredentials { username, password }),
            _ => {
                warn!("SMTP credentials not configured, sending will likely fail");
                None
            }
        };

        let smtp = SmtpConfig {
            host: var("SMTP_HOST").unwrap_or_else(|| String::from("smtp.gmail.com")),
            port: parse_or(&var, "SMTP_PORT", 587)?,
            security: parse_or(&var, "SMTP_SECURE", SmtpSecurity::StartTls)?,
            credentials,
        };

        let risk = RiskConfig {
            mode: parse_or(&var, "RISK_CHECK_MODE", RiskCheckMode::Optional)?,
            secret: var("SITE_SECRET_KEY"),
            verify_url: var("RECAPTCHA_VERIFY_URL").unwrap_or_else(|| String::from(SITE_VERIFY_URL)),
        };

        match (risk.mode, &risk.secret) {
            (RiskCheckMode::Enforced, None) => return Err(ConfigurationError::MissingSecret),
            (RiskCheckMode::Optional, None) => {
                warn!("SITE_SECRET_KEY not configured, skipping reCAPTCHA verification")
            }
            (RiskCheckMode::Disabled, _) => warn!("reCAPTCHA verification is disabled"),
            _ => (),
        }

        let timeout_secs: u64 = parse_or(&var, "OUTBOUND_TIMEOUT_SECS", 10)?;
        if timeout_secs == 0 {
            return Err(ConfigurationError::InvalidValue {
                key: "OUTBOUND_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
            });
        }

        let retries: u8 = parse_or(&var, "OUTBOUND_RETRIES", 0)?;
        if retries > OutboundPolicy::MAX_RETRIES {
            return Err(ConfigurationError::InvalidValue {
                key: "OUTBOUND_RETRIES",
                value: retries.to_string(),
            });
        }

        let frontend_origin = match var("FRONTEND_URL") {
            Some(url) => Some(url.parse::<HeaderValue>().or(Err(
                ConfigurationError::InvalidValue {
                    key: "FRONTEND_URL",
                    value: url,
                },
            ))?),
            None => None,
        };

        Ok(Config {
            port: parse_or(&var, "PORT", 3001)?,
            frontend_origin,
            site_name: var("SITE_NAME").unwrap_or_else(|| String::from("Lumina Studio")),
            owner_address,
            sender_address,
            smtp,
            risk,
            outbound: OutboundPolicy {
                timeout: Duration::from_secs(timeout_secs),
                retries,
            },
        })
    }
}

/// Returns the first source in `keys` that holds a value, with the key it came from
fn first_of(
    var: &impl Fn(&str) -> Option<String>,
    keys: &[&'static str],
) -> Option<(&'static str, String)> {
    keys.iter().find_map(|key| var(key).map(|value| (*key, value)))
}

fn ensure_address(key: &'static str, address: &str) -> Result<(), ConfigurationError> {
    if EmailAddress::is_valid(address) {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidValue {
            key,
            value: address.to_string(),
        })
    }
}

fn parse_or<T: FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigurationError> {
    match var(key) {
        Some(value) => value
            .parse()
            .or(Err(ConfigurationError::InvalidValue { key, value })),
        None => Ok(default),
    }
}
