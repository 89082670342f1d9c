use crate::errors::mail_error::MailError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Could not set up the mail channel: {0}")]
    MailChannel(#[from] MailError),
    #[error("Could not bind HTTP server: {0}")]
    Bind(#[from] std::io::Error),
}
