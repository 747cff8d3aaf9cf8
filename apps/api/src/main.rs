mod auth;
mod config;
mod dashboard;
mod errors;
mod fixtures;
mod jobs;
mod models;
mod onboarding;
mod routes;
mod sessions;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::{Authenticator, HttpAuthenticator, StubAuthenticator};
use crate::config::Config;
use crate::fixtures::Fixtures;
use crate::jobs::store::load_job_list;
use crate::routes::build_router;
use crate::state::AppState;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobExel API v{}", env!("CARGO_PKG_VERSION"));

    // Auth collaborator: real backend when configured, stub otherwise
    let auth: Arc<dyn Authenticator> = match &config.auth_backend_url {
        Some(url) => {
            info!("Auth backend: {url}");
            Arc::new(HttpAuthenticator::new(url.clone())?)
        }
        None => {
            info!("Auth backend not configured, using in-memory stub");
            Arc::new(StubAuthenticator::new())
        }
    };

    let fixtures = Fixtures::load()?;
    let jobs = load_job_list(config.job_list_path.as_deref()).await?;
    info!(
        "Fixtures loaded: {} applications, {} interviews, {} jobs",
        fixtures.applications.len(),
        fixtures.interviews.len(),
        jobs.len()
    );
    info!("Swipe threshold: {}px", config.swipe_threshold_px);

    let state = AppState::new(config.clone(), auth, fixtures, jobs);

    // Background sweep of abandoned onboarding drafts and decks
    let sweeper = state.clone();
    let idle_ttl = config.session_idle_ttl;
    info!("Session idle TTL: {}s", idle_ttl.as_secs());
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            ticker.tick().await;
            sweeper.sweep_idle_sessions(idle_ttl).await;
        }
    });

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
