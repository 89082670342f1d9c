use super::AppState;
use crate::errors::contact_error::ContactError;
use crate::mail::MailChannel;
use crate::models::contact_submission::{ContactRequest, ContactSubmission};
use crate::models::submission_result::SubmissionResult;
use crate::verification::RiskVerifier;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use log::warn;
use std::sync::Arc;

pub async fn contact<V: RiskVerifier, M: MailChannel>(
    State(state): State<Arc<AppState<V, M>>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<SubmissionResult>, ContactError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Unreadable contact body: {rejection}");
        ContactError::MissingFields
    })?;

    let (submission, token) = ContactSubmission::from_request(request)?;

    state
        .verifier
        .verify(token.as_deref())
        .await
        .map_err(|error| {
            warn!("reCAPTCHA verification error: {error}");
            ContactError::BotCheck
        })?;

    state
        .dispatcher
        .dispatch(&submission)
        .await
        .map_err(ContactError::Dispatch)?;

    Ok(Json(SubmissionResult::sent()))
}
