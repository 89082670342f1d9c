use crate::errors::mail_error::MailError;
use crate::models::submission_result::SubmissionResult;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Missing required fields: name, email, message")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("reCAPTCHA verification failed. Please try again.")]
    BotCheck,
    #[error("Failed to send email. Please try again later.")]
    Dispatch(#[source] MailError),
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::MissingFields | ContactError::InvalidEmail | ContactError::BotCheck => {
                StatusCode::BAD_REQUEST
            }
            ContactError::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        if let ContactError::Dispatch(ref source) = self {
            error!("Error sending email: {source}");
        }

        // Display only carries the client-facing sentence, never the source
        let status = self.status();
        (status, Json(SubmissionResult::failure(self.to_string()))).into_response()
    }
}
