use super::MailChannel;
use super::templates::{Letterhead, render_confirmation_email, render_owner_email};
use crate::errors::mail_error::MailError;
use crate::models::contact_submission::ContactSubmission;
use crate::models::outgoing_email::OutgoingEmail;
use crate::outbound::OutboundPolicy;
use log::{error, info};

/// Renders the owner notification and sender confirmation and hands them to a mail channel
pub struct Dispatcher<M: MailChannel> {
    channel: M,
    letterhead: Letterhead,
    policy: OutboundPolicy,
}

impl<M: MailChannel> Dispatcher<M> {
    pub fn new(channel: M, letterhead: Letterhead, policy: OutboundPolicy) -> Self {
        Dispatcher {
            channel,
            letterhead,
            policy,
        }
    }

    pub fn channel(&self) -> &M {
        &self.channel
    }

    /// Sends the owner notification, then the confirmation. Stops at the first failure.
    pub async fn dispatch(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        let notification = render_owner_email(submission, &self.letterhead);
        self.send(&notification).await?;

        let confirmation = render_confirmation_email(submission, &self.letterhead);
        if let Err(error) = self.send(&confirmation).await {
            error!(
                "Owner was notified but the confirmation to {} failed",
                submission.email
            );
            return Err(error);
        }

        info!("Relayed contact message from {}", submission.email);
        Ok(())
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        self.policy
            .run("Sending email", || self.channel.send(email))
            .await
    }
}
