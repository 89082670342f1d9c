use crate::errors::mail_error::MailError;
use crate::models::outgoing_email::OutgoingEmail;
use std::future::Future;

pub mod dispatcher;
pub mod smtp;
pub mod templates;

/// Something able to deliver a rendered email, one attempt per call
pub trait MailChannel: Send + Sync + 'static {
    fn send(&self, email: &OutgoingEmail) -> impl Future<Output = Result<(), MailError>> + Send;
}
