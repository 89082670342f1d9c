#![allow(dead_code)]

use axum::extract::Query;
use axum::routing::post;
use axum::{Json, Router};
use contact_relay::errors::mail_error::MailError;
use contact_relay::errors::verification_error::VerificationError;
use contact_relay::http::{self, AppState};
use contact_relay::mail::MailChannel;
use contact_relay::mail::dispatcher::Dispatcher;
use contact_relay::mail::templates::Letterhead;
use contact_relay::models::outgoing_email::OutgoingEmail;
use contact_relay::outbound::OutboundPolicy;
use contact_relay::verification::RiskVerifier;
use lettre::message::Mailbox;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const OWNER: &str = "owner@x.com";
pub const SENDER: &str = "studio@x.com";

pub fn letterhead() -> Letterhead {
    Letterhead {
        site_name: String::from("Lumina Studio"),
        sender_address: String::from(SENDER),
        owner_address: String::from(OWNER),
    }
}

pub fn refused() -> MailError {
    MailError::Address("refused".parse::<Mailbox>().unwrap_err())
}

/// Mail channel that records what it was asked to send
#[derive(Clone, Default)]
pub struct RecordingChannel {
    attempts: Arc<AtomicUsize>,
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    failing_attempts: Vec<usize>,
    delay: Option<Duration>,
}

impl RecordingChannel {
    /// Fails the given 1-based attempts and accepts every other one
    pub fn failing_on(attempts: &[usize]) -> Self {
        RecordingChannel {
            failing_attempts: attempts.to_vec(),
            ..Default::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        RecordingChannel {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl MailChannel for RecordingChannel {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing_attempts.contains(&attempt) {
            return Err(refused());
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Risk verifier with a fixed verdict that counts its calls
#[derive(Clone, Default)]
pub struct StubVerifier {
    calls: Arc<AtomicUsize>,
    rejects: bool,
}

impl StubVerifier {
    pub fn passing() -> Self {
        StubVerifier::default()
    }

    pub fn rejecting() -> Self {
        StubVerifier {
            rejects: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RiskVerifier for StubVerifier {
    async fn verify(&self, _token: Option<&str>) -> Result<(), VerificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.rejects {
            Err(VerificationError::Rejected {
                success: false,
                score: 0.0,
            })
        } else {
            Ok(())
        }
    }
}

pub async fn spawn_app<V: RiskVerifier, M: MailChannel>(verifier: V, channel: M) -> String {
    spawn_app_with_policy(verifier, channel, OutboundPolicy::default()).await
}

/// Starts the relay on an ephemeral port and returns its base URL
pub async fn spawn_app_with_policy<V: RiskVerifier, M: MailChannel>(
    verifier: V,
    channel: M,
    policy: OutboundPolicy,
) -> String {
    let state = AppState {
        verifier,
        dispatcher: Dispatcher::new(channel, letterhead(), policy),
    };
    let app = http::router(state, http::cors(None));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(http::serve(listener, app));

    format!("http://{address}")
}

pub async fn post_contact(base_url: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{base_url}/api/contact"))
        .json(&body)
        .send()
        .await
        .unwrap();

    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

pub fn ann() -> Value {
    json!({
        "name": "Ann",
        "email": "ann@x.com",
        "message": "Hello there, this works.",
    })
}

/// A stand-in for the reCAPTCHA siteverify endpoint
pub struct FakeSiteVerify {
    pub url: String,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeSiteVerify {
    pub async fn answering(answer: Value) -> Self {
        Self::answering_after(answer, Duration::ZERO).await
    }

    pub async fn answering_after(answer: Value, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        let app = Router::new().route(
            "/recaptcha/api/siteverify",
            post(move |Query(params): Query<HashMap<String, String>>| {
                let recorded = recorded.clone();
                let answer = answer.clone();
                async move {
                    recorded.lock().unwrap().push(params);
                    tokio::time::sleep(delay).await;
                    Json(answer)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        FakeSiteVerify {
            url: format!("http://{address}/recaptcha/api/siteverify"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

/// A URL nothing listens on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}/recaptcha/api/siteverify")
}
