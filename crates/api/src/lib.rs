//! # ClinicDesk API
//!
//! The API crate provides the local HTTP server that front ends use to manage
//! doctors, patients and medical records and to book appointments.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide cross-cutting concerns like authentication and error handling
//! - **Config**: Handle environment and application configuration
//!
//! Slot listing and booking go through [`BookingService`]; plain record
//! keeping talks to the repositories in `clinicdesk-db` directly.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Demo accounts for a fresh database
pub mod seed;

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, Router};
use clinicdesk_core::{booking::BookingService, slots::WorkingHours};
use clinicdesk_db::{DbPool, SqliteStore};
use eyre::{eyre, Result};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// SQLite connection pool for record keeping
    pub db_pool: DbPool,

    /// Slot computation and booking over the same database
    pub booking: BookingService<SqliteStore>,
}

impl ApiState {
    pub fn new(db_pool: DbPool, working_hours: WorkingHours) -> Self {
        let booking = BookingService::new(SqliteStore::new(db_pool.clone()), working_hours);
        Self { db_pool, booking }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Login and the account overview
        .merge(routes::auth::routes())
        .merge(routes::user::routes())
        // Doctor management, slots and appointment lists
        .merge(routes::doctor::routes())
        // Patient management and medical records
        .merge(routes::patient::routes())
        // Booking
        .merge(routes::appointment::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and database connection
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and working hours
/// * `db_pool` - SQLite connection pool with the schema already applied
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(db_pool, config.working_hours));
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| eyre!("Invalid CORS origin {}: {}", origin, e))
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    info!(
        "Slots offered {}-{} every {} minutes",
        config.working_hours.start_time(),
        config.working_hours.end_time(),
        config.working_hours.interval_minutes()
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
