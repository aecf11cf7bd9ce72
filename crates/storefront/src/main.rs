//! Witherstex storefront - public site and product admin.
//!
//! This binary serves the site on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework, Askama templates rendered on the server
//! - Hosted backend (PostgREST, storage, auth) for the product catalogue
//!   and admin accounts
//! - `PostgreSQL` session store for carts, language choice and admin logins
//! - Orders and product questions are handed off to WhatsApp
//!
//! # Security
//!
//! The storefront only holds the backend's public (anon) key. Writes to the
//! catalogue are made with the signed-in admin's access token, so the
//! backend's row-level policies decide what an account may change.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, middleware::from_fn, routing::get};
use sentry::integrations::tracing as sentry_tracing;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use witherstex_storefront::config::StorefrontConfig;
use witherstex_storefront::state::AppState;
use witherstex_storefront::{db, middleware, routes};

const STATIC_DIR: &str = "crates/storefront/static";

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.sentry_environment.clone().into()),
            send_default_pii: false,
            attach_stacktrace: true,
            traces_sample_rate: 0.1,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "witherstex_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // NOTE: Migrations are NOT run on startup.
    // Run them explicitly via: cargo run -p witherstex-cli -- migrate

    let state = AppState::new(config.clone(), pool);
    let session_layer = middleware::create_session_layer(state.pool(), state.config())
        .expect("Failed to create session layer");

    let app = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .route_service(
            "/placeholder.svg",
            ServeFile::new(format!("{STATIC_DIR}/placeholder.svg")),
        )
        .layer(session_layer)
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::csp_nonce_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    tracing::info!(%addr, base_url = %config.base_url, "storefront listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    // Peer addresses feed the rate limiters when no proxy header is present
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the session database answers. The hosted backend is not probed:
/// the catalogue degrades to an error notice when it is down.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
