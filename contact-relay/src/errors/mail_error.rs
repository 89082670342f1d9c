use thiserror::Error;
use tokio::time::error::Elapsed;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Could not parse mailbox: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Could not build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error("Mail channel did not answer in time")]
    TimedOut(#[from] Elapsed),
}
