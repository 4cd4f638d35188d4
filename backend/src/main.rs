use dotenvy::dotenv;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config {
    pub mod app_config;
}
mod api {
    pub mod resend;
}
mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}

use config::app_config::AppConfig;
use handlers::contact_handlers;

pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    // Unknown paths get the SPA shell so client-side routes survive a reload.
    let index = state.config.static_dir.join("index.html");
    let static_files = ServeDir::new(&state.config.static_dir)
        .not_found_service(ServeFile::new(index));

    Router::new()
        .route("/api/health", get(contact_handlers::health_check))
        .route(
            "/api/send-email",
            post(contact_handlers::send_email).fallback(contact_handlers::method_not_allowed),
        )
        .fallback_service(static_files)
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

    let _guard = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((dsn.as_str(), sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    config.validate_env();
    let bind_addr = config.bind_addr.clone();

    let state = Arc::new(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("listening on {}", bind_addr);

    axum::serve(listener, app(state).into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
