use crate::client::ContactClient;
use crate::risk_token::{TokenProvider, obtain_risk_token};
use crate::validation::{ContactInput, Field, FieldErrors, validate};
use log::{info, warn};
use std::env;
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const GENERIC_FAILURE: &str = "Failed to send message. Please try again later.";

#[derive(Clone, Debug)]
pub struct ControllerConfig {
    pub api_url: String,
    pub token_timeout: Duration,
    /// How long the sent confirmation stays up before the form resets
    pub cool_down: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            api_url: String::from(DEFAULT_API_URL),
            token_timeout: Duration::from_secs(5),
            cool_down: Duration::from_secs(3),
        }
    }
}

impl ControllerConfig {
    pub fn from_env() -> Self {
        let mut config = ControllerConfig::default();
        if let Ok(api_url) = env::var("CONTACT_API_URL") {
            config.api_url = api_url;
        }
        config
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Submitted { at: Instant },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Invalid(FieldErrors),
    Failed(String),
    /// A submission is in flight or cooling down
    Busy,
}

/// Holds what the user typed and walks the form through its states
pub struct FormController<P> {
    client: ContactClient,
    provider: Option<P>,
    config: ControllerConfig,
    input: ContactInput,
    errors: FieldErrors,
    state: FormState,
}

impl<P: TokenProvider> FormController<P> {
    pub fn new(config: ControllerConfig, provider: Option<P>) -> Self {
        FormController {
            client: ContactClient::new(&config.api_url),
            provider,
            config,
            input: ContactInput::default(),
            errors: FieldErrors::new(),
            state: FormState::Idle,
        }
    }

    pub fn input(&self) -> &ContactInput {
        &self.input
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state == FormState::Idle
    }

    /// Replaces a field's value and drops the error shown for it
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.input.field_mut(field) = value.into();
        self.errors.remove(&field);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.refresh();
        if !self.can_submit() {
            return SubmitOutcome::Busy;
        }

        let valid = match validate(&self.input) {
            Ok(valid) => valid,
            Err(errors) => {
                self.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.errors.clear();
        self.state = FormState::Submitting;

        let token = obtain_risk_token(self.provider.as_ref(), self.config.token_timeout).await;

        match self.client.submit(&valid, token).await {
            Ok(result) if result.success => {
                info!("Contact message sent");
                self.state = FormState::Submitted { at: Instant::now() };
                SubmitOutcome::Sent
            }
            Ok(result) => {
                self.state = FormState::Idle;
                SubmitOutcome::Failed(result.error.unwrap_or_else(|| GENERIC_FAILURE.to_string()))
            }
            Err(error) => {
                warn!("Contact submission failed: {error}");
                self.state = FormState::Idle;
                SubmitOutcome::Failed(GENERIC_FAILURE.to_string())
            }
        }
    }

    pub fn refresh(&mut self) {
        self.refresh_at(Instant::now());
    }

    /// Ends the cool-down once it has run out, clearing the form
    pub fn refresh_at(&mut self, now: Instant) {
        if let FormState::Submitted { at } = self.state {
            if now.duration_since(at) >= self.config.cool_down {
                self.state = FormState::Idle;
                self.input = ContactInput::default();
            }
        }
    }

    /// Waits out the cool-down, if any
    pub async fn settle(&mut self) {
        if let FormState::Submitted { at } = self.state {
            tokio::time::sleep_until(at + self.config.cool_down).await;
            self.refresh();
        }
    }
}
