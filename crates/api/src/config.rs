//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Slotbook
//! API server. Values come from environment variables with defaults where
//! appropriate; required values fail startup eagerly.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `BOOKING_TIMEZONE`: The provider's fixed civil timezone
//!   (default: "America/Montevideo")
//! - `SLOT_MINUTES`: Slot granularity in minutes (default: 30)
//! - `PROVIDER_ID`: Identifier of the provider this deployment serves
//! - `SCHEDULE_JSON`: Weekly template as JSON keyed by day index 0=Sunday,
//!   e.g. `{"1": {"open": "09:30", "close": "19:00"}, "0": null}`

use eyre::{eyre, Result, WrapErr};
use slotbook_core::models::schedule::{ScheduleConfig, WeeklyTemplate};
use std::env;
use tracing::Level;

/// Configuration for the Slotbook API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Provider schedule configuration
    pub schedule: ScheduleConfig,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - BOOKING_TIMEZONE is not a valid IANA timezone name
    /// - SLOT_MINUTES is zero or unparseable
    /// - SCHEDULE_JSON is present but malformed
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let schedule = schedule_from_env()?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            schedule,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a log level name to a tracing Level, defaulting to INFO.
pub fn parse_log_level(raw: &str) -> Level {
    match raw {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Builds the provider schedule from environment variables, starting from
/// the deployment defaults and overriding per variable.
fn schedule_from_env() -> Result<ScheduleConfig> {
    let mut schedule = ScheduleConfig::default();

    if let Ok(raw) = env::var("BOOKING_TIMEZONE") {
        schedule.timezone = raw
            .parse()
            .map_err(|_| eyre!("BOOKING_TIMEZONE '{raw}' is not a valid IANA timezone"))?;
    }

    if let Ok(raw) = env::var("SLOT_MINUTES") {
        let slot_minutes: u32 = raw.parse().wrap_err("Invalid SLOT_MINUTES value")?;
        if slot_minutes == 0 {
            return Err(eyre!("SLOT_MINUTES must be positive"));
        }
        schedule.slot_minutes = slot_minutes;
    }

    if let Ok(provider_id) = env::var("PROVIDER_ID") {
        schedule.provider_id = provider_id;
    }

    if let Ok(raw) = env::var("SCHEDULE_JSON") {
        let week: WeeklyTemplate =
            serde_json::from_str(&raw).wrap_err("Invalid SCHEDULE_JSON value")?;
        schedule.week = week;
    }

    Ok(schedule)
}
