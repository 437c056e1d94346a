//! # Slotbook API
//!
//! The API crate provides the web server implementation for the Slotbook
//! booking service. It exposes the slot-availability queries, the atomic
//! booking claim, and token-based cancellation.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Error-to-status mapping shared by all handlers
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database
//! interactions. Handlers are stateless; the database is the only shared
//! mutable resource and all booking writes go through the repository's
//! atomic claim/cancel primitives.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use slotbook_core::models::schedule::ScheduleConfig;
use slotbook_notify::Notifier;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Provider schedule configuration, loaded once at startup
    pub schedule: ScheduleConfig,
    /// Outbound Telegram relay; `None` when credentials are not configured
    pub notifier: Option<Notifier>,
}

/// Starts the API server with the provided configuration and dependencies
///
/// This function initializes logging, configures routes, and starts the
/// HTTP server. The notifier is optional: bookings commit identically
/// whether or not a relay is configured.
pub async fn start_server(
    config: config::ApiConfig,
    db_pool: PgPool,
    notifier: Option<Notifier>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        db_pool,
        schedule: config.schedule.clone(),
        notifier,
    });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Booking claim / query / cancel endpoints
        .merge(routes::booking::routes())
        // Candidate-slot and service catalogue endpoints
        .merge(routes::slots::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let mut allowed: Vec<axum::http::HeaderValue> = Vec::with_capacity(origins.len());
        for origin in origins {
            allowed.push(origin.parse()?);
        }
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            ))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
