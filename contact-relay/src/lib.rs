use config::Config;
use errors::server_error::ServerError;
use log::info;
use mail::dispatcher::Dispatcher;
use mail::smtp::SmtpChannel;
use mail::templates::Letterhead;
use tokio::net::TcpListener;
use verification::recaptcha::RecaptchaVerifier;

pub mod config;
pub mod errors;
pub mod http;
pub mod mail;
pub mod models;
pub mod outbound;
pub mod verification;

/// Starts the contact relay and serves until a shutdown signal arrives
pub async fn listen(config: Config) -> Result<(), ServerError> {
    let channel = SmtpChannel::new(&config.smtp, &config.outbound)?;

    let probe = channel.clone();
    tokio::spawn(async move { probe.probe().await });

    let letterhead = Letterhead {
        site_name: config.site_name.clone(),
        sender_address: config.sender_address.clone(),
        owner_address: config.owner_address.clone(),
    };

    let state = http::AppState {
        verifier: RecaptchaVerifier::new(&config.risk, config.outbound),
        dispatcher: Dispatcher::new(channel, letterhead, config.outbound),
    };

    let app = http::router(state, http::cors(config.frontend_origin.clone()));
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    info!("HTTP server listening on port {}", config.port);

    tokio::select! {
        _ = http::serve(listener, app) => {},
        _ = http::shutdown_signal() => {},
    }

    Ok(())
}
