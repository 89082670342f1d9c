pub mod contact_submission;
pub mod outgoing_email;
pub mod submission_result;
