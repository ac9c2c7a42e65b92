//! Age API Server
//!
//! Computes a person's age from a birth date and returns either a greeting
//! message or a one-row spreadsheet export.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod render;
mod routes;

#[cfg(test)]
mod test_utils;


use adapters::SystemClock;
use app::PersonService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub person_service: Arc<PersonService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,age_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Age API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        reference_timezone = ?config.reference_timezone,
        reject_future_birth_dates = config.reject_future_birth_dates,
        "Configuration loaded"
    );

    // Create adapters and services
    let clock = Arc::new(SystemClock::new(config.reference_timezone));
    let person_service = Arc::new(PersonService::new(clock, config.reject_future_birth_dates));

    let state = AppState { person_service };
    let app = routes::build_router(state);

    // Start server
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
