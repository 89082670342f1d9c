pub mod token_error;
