pub mod configuration_error;
pub mod contact_error;
pub mod mail_error;
pub mod server_error;
pub mod unknown_value_error;
pub mod verification_error;
