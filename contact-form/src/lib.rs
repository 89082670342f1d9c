//! Client side of the contact form: validation, risk token, submission and the form's state.

pub mod client;
pub mod controller;
pub mod errors;
pub mod models;
pub mod risk_token;
pub mod validation;
