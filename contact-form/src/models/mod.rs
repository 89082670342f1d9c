pub mod contact_request;
pub mod submission_result;
