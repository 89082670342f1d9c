use crate::mail::MailChannel;
use crate::mail::dispatcher::Dispatcher;
use crate::verification::RiskVerifier;
use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use hyper::{Request, body::Incoming};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server,
};
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal::{self, ctrl_c};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_service::Service;

pub mod contact;
mod health;

/// Read-only state shared by every request
pub struct AppState<V: RiskVerifier, M: MailChannel> {
    pub verifier: V,
    pub dispatcher: Dispatcher<M>,
}

/// Allows the configured frontend, or any origin when none is configured
pub fn cors(frontend_origin: Option<HeaderValue>) -> CorsLayer {
    let origin = match frontend_origin {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

pub fn router<V: RiskVerifier, M: MailChannel>(state: AppState<V, M>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::contact::<V, M>))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serves `app` with hyper so headers can be served with title case
pub async fn serve(listener: TcpListener, app: Router) {
    loop {
        let (socket, _remote_addr) = match listener.accept().await {
            Ok(listener) => listener,
            Err(error) => {
                error!("Could not get socket from accepted HTTP connection: {error}");
                continue;
            }
        };

        let tower_service = app.clone();
        tokio::spawn(async move {
            let socket = TokioIo::new(socket);
            let hyper_service = hyper::service::service_fn(move |request: Request<Incoming>| {
                tower_service.clone().call(request)
            });

            let mut builder = server::conn::auto::Builder::new(TokioExecutor::new());
            builder.http1().title_case_headers(true);

            if let Err(err) = builder
                .serve_connection_with_upgrades(socket, hyper_service)
                .await
            {
                error!("Failed to serve connection: {err:#}");
            }
        });
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = ctrl_c().await {
            error!("Could not listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(error) => {
                error!("Could not listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
