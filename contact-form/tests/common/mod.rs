#![allow(dead_code)]

use contact_form::controller::ControllerConfig;
use contact_form::errors::token_error::TokenError;
use contact_form::risk_token::TokenProvider;
use contact_relay::errors::mail_error::MailError;
use contact_relay::errors::verification_error::VerificationError;
use contact_relay::http::{self, AppState};
use contact_relay::mail::MailChannel;
use contact_relay::mail::dispatcher::Dispatcher;
use contact_relay::mail::templates::Letterhead;
use contact_relay::models::outgoing_email::OutgoingEmail;
use contact_relay::outbound::OutboundPolicy;
use contact_relay::verification::RiskVerifier;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Mail channel that keeps what it sends, or refuses everything
#[derive(Clone, Default)]
pub struct MemoryChannel {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    refuses: bool,
}

impl MemoryChannel {
    pub fn refusing() -> Self {
        MemoryChannel {
            refuses: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl MailChannel for MemoryChannel {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        if self.refuses {
            let elapsed = tokio::time::timeout(Duration::ZERO, std::future::pending::<()>())
                .await
                .unwrap_err();
            return Err(MailError::TimedOut(elapsed));
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Risk verifier that records the tokens it is shown
#[derive(Clone, Default)]
pub struct TokenRecorder {
    tokens: Arc<Mutex<Vec<Option<String>>>>,
    rejects: bool,
}

impl TokenRecorder {
    pub fn rejecting() -> Self {
        TokenRecorder {
            rejects: true,
            ..Default::default()
        }
    }

    pub fn tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().unwrap().clone()
    }
}

impl RiskVerifier for TokenRecorder {
    async fn verify(&self, token: Option<&str>) -> Result<(), VerificationError> {
        self.tokens.lock().unwrap().push(token.map(String::from));
        if self.rejects {
            Err(VerificationError::Rejected {
                success: true,
                score: 0.1,
            })
        } else {
            Ok(())
        }
    }
}

/// Token provider with a fixed answer that counts its calls
#[derive(Clone, Default)]
pub struct FixedToken {
    token: Option<&'static str>,
    calls: Arc<AtomicUsize>,
}

impl FixedToken {
    pub fn answering(token: &'static str) -> Self {
        FixedToken {
            token: Some(token),
            ..Default::default()
        }
    }

    pub fn broken() -> Self {
        FixedToken::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TokenProvider for FixedToken {
    async fn execute(&self, _action: &str) -> Result<String, TokenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.token {
            Some(token) => Ok(token.to_string()),
            None => Err(TokenError::ScriptUnavailable),
        }
    }
}

/// Starts a relay on an ephemeral port and returns its base URL
pub async fn spawn_relay<V: RiskVerifier>(verifier: V, channel: MemoryChannel) -> String {
    let letterhead = Letterhead {
        site_name: String::from("Lumina Studio"),
        sender_address: String::from("studio@x.com"),
        owner_address: String::from("owner@x.com"),
    };
    let state = AppState {
        verifier,
        dispatcher: Dispatcher::new(channel, letterhead, OutboundPolicy::default()),
    };
    let app = http::router(state, http::cors(None));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(http::serve(listener, app));

    format!("http://{address}")
}

/// A base URL nothing listens on
pub async fn unreachable_api() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}")
}

pub fn config(api_url: &str) -> ControllerConfig {
    ControllerConfig {
        api_url: api_url.to_string(),
        token_timeout: Duration::from_millis(200),
        cool_down: Duration::from_millis(200),
    }
}
