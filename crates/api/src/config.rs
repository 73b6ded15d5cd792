//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the ClinicDesk API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "127.0.0.1")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: SQLite connection string (default: "sqlite://clinic.db")
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `WORKDAY_START`: First bookable slot, `HH:MM` (default: "10:00")
//! - `WORKDAY_END`: Last bookable slot, `HH:MM` (default: "18:00")
//! - `SLOT_INTERVAL_MINUTES`: Spacing between slots (default: 10)

use clinicdesk_core::{models::time_slot::TimeSlot, slots::WorkingHours};
use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the ClinicDesk API server
///
/// Everything the server needs is carried here and handed to the components
/// that use it; nothing is read from global state after startup.
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use clinicdesk_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// SQLite database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Opening hours and slot spacing offered to patients
    pub working_hours: WorkingHours,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - API_REQUEST_TIMEOUT_SECONDS is not a whole number of seconds
    /// - WORKDAY_START or WORKDAY_END is not a valid `HH:MM` time
    /// - SLOT_INTERVAL_MINUTES is not a positive integer
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        // Network settings
        let host = var("API_HOST", "127.0.0.1");
        let port: u16 = var("API_PORT", "3000")
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = var("DATABASE_URL", "sqlite://clinic.db");

        // Logging settings
        let log_level = match var("LOG_LEVEL", "info").as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout: u64 = var("API_REQUEST_TIMEOUT_SECONDS", "30")
            .parse()
            .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        // Booking grid
        let start_time: TimeSlot = var("WORKDAY_START", "10:00")
            .parse()
            .wrap_err("Invalid WORKDAY_START value")?;
        let end_time: TimeSlot = var("WORKDAY_END", "18:00")
            .parse()
            .wrap_err("Invalid WORKDAY_END value")?;
        let interval_minutes: u32 = var("SLOT_INTERVAL_MINUTES", "10")
            .parse()
            .wrap_err("Invalid SLOT_INTERVAL_MINUTES value")?;
        let working_hours = WorkingHours::new(start_time, end_time, interval_minutes)
            .wrap_err("Invalid SLOT_INTERVAL_MINUTES value")?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            working_hours,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
