use super::MailChannel;
use crate::errors::mail_error::MailError;
use crate::errors::unknown_value_error::UnknownValueError;
use crate::models::outgoing_email::OutgoingEmail;
use crate::outbound::OutboundPolicy;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{error, info, warn};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// TLS from the first byte, usually port 465
    Implicit,
    /// Plain connection upgraded with STARTTLS, usually port 587
    StartTls,
    /// No encryption, for local relays only
    Plaintext,
}

impl FromStr for SmtpSecurity {
    type Err = UnknownValueError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "true" => Ok(SmtpSecurity::Implicit),
            "false" => Ok(SmtpSecurity::StartTls),
            "none" => Ok(SmtpSecurity::Plaintext),
            _ => Err(UnknownValueError::new("SMTP security", value)),
        }
    }
}

#[derive(Clone)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub security: SmtpSecurity,
    pub credentials: Option<SmtpCredentials>,
}

/// Mail channel backed by a pooled SMTP relay connection
#[derive(Clone)]
pub struct SmtpChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpChannel {
    pub fn new(config: &SmtpConfig, policy: &OutboundPolicy) -> Result<Self, MailError> {
        let builder = match config.security {
            SmtpSecurity::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?,
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            }
            SmtpSecurity::Plaintext => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            }
        };

        let mut builder = builder.port(config.port).timeout(Some(policy.timeout));
        if let Some(credentials) = &config.credentials {
            builder = builder.credentials(Credentials::new(
                credentials.username.clone(),
                credentials.password.clone(),
            ));
        }

        Ok(SmtpChannel {
            transport: builder.build(),
        })
    }

    /// Opens one connection to the relay and logs whether it is usable
    pub async fn probe(&self) {
        match self.transport.test_connection().await {
            Ok(true) => info!("Email server is ready to send messages"),
            Ok(false) => warn!("Email server refused the connection probe"),
            Err(error) => error!("Email transporter error: {error}"),
        }
    }
}

impl MailChannel for SmtpChannel {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = build_message(email)?;
        self.transport.send(message).await?;
        Ok(())
    }
}

pub fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(email.from.parse::<Mailbox>()?)
        .to(email.to.parse::<Mailbox>()?)
        .subject(email.subject.as_str());

    if let Some(reply_to) = &email.reply_to {
        match reply_to.parse::<Mailbox>() {
            Ok(mailbox) => builder = builder.reply_to(mailbox),
            Err(error) => warn!("Leaving out Reply-To, {reply_to} is not a mailbox: {error}"),
        }
    }

    Ok(builder.multipart(MultiPart::alternative_plain_html(
        email.text.clone(),
        email.html.clone(),
    ))?)
}
