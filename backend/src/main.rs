use dotenvy::dotenv;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::EnvFilter;

mod config;
mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod utils {
    pub mod mailer;
    pub mod rate_limit;
    pub mod validation;
}

use config::Config;
use handlers::contact_handlers;
use utils::mailer::{ContactMailer, LogMailer, SmtpMailer, SMTP_TIMEOUT};
use utils::rate_limit::ContactLimiter;

const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub mailer: Arc<dyn ContactMailer>,
    pub limiter: ContactLimiter,
    pub send_timeout: Duration,
    pub trusted_proxies: Vec<IpAddr>,
}

/// API routes plus the built frontend, with `index.html` as the fallback
/// for client-side routes.
pub fn app(state: Arc<AppState>, frontend_dist: &Path) -> Router {
    let spa = ServeDir::new(frontend_dist)
        .not_found_service(ServeFile::new(frontend_dist.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            ..Default::default()
        }))
    });

    let mailer: Arc<dyn ContactMailer> = match &config.smtp {
        Some(smtp) => {
            info!("Forwarding contact messages to {} via {}", config.contact_inbox, smtp.host);
            Arc::new(SmtpMailer::new(smtp, &config.contact_sender, &config.contact_inbox)?)
        }
        None => {
            warn!("SMTP not configured, contact messages will only be logged");
            Arc::new(LogMailer)
        }
    };

    let state = Arc::new(AppState {
        mailer,
        limiter: ContactLimiter::default(),
        send_timeout: SMTP_TIMEOUT,
        trusted_proxies: config.trusted_proxies.clone(),
    });

    // Forget clients whose quota has refilled
    let prune_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            interval.tick().await;
            let tracked = prune_state.limiter.prune();
            debug!("Contact rate limiter tracking {} client(s)", tracked);
        }
    });

    let app = app(state, &config.frontend_dist);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("could not bind {}", config.bind_addr))?;
    info!("Serving {} on {}", config.frontend_dist.display(), config.bind_addr);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
