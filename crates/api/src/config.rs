//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the SalonBook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `JWT_SECRET`: Secret used to verify bearer tokens (required)
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `ENFORCE_SERVICE_OFFERING`: Only book services the stylist offers (default: true)
//! - `AVAILABILITY_MODE`: `exact` or `overlap` slot filtering (default: "exact")
//! - `NOTIFY_WEBHOOK_URL`: Where notifications are POSTed; logged only when unset

use eyre::{Result, WrapErr};
use salonbook_core::scheduling::{AvailabilityMode, LedgerPolicy};
use std::env;
use tracing::Level;

/// Configuration for the SalonBook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use salonbook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
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

    /// HS256 secret for verifying bearer tokens
    pub jwt_secret: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Booking policy applied by the ledger
    pub ledger_policy: LedgerPolicy,

    /// How booked appointments remove slots from the availability grid
    pub availability_mode: AvailabilityMode,

    /// Webhook receiving notifications (optional)
    pub notify_webhook_url: Option<String>,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL or JWT_SECRET environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - API_REQUEST_TIMEOUT_SECONDS is not a whole number of seconds
    /// - ENFORCE_SERVICE_OFFERING is not a boolean
    /// - AVAILABILITY_MODE is neither "exact" nor "overlap"
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
        let log_level =
            parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Security settings
        let jwt_secret =
            env::var("JWT_SECRET").wrap_err("JWT_SECRET environment variable must be set")?;

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        // Scheduling settings
        let enforce_service_offering = env::var("ENFORCE_SERVICE_OFFERING")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .wrap_err("Invalid ENFORCE_SERVICE_OFFERING value, expected true or false")?;
        let availability_mode = env::var("AVAILABILITY_MODE")
            .unwrap_or_else(|_| "exact".to_string())
            .parse()
            .map_err(|e| eyre::eyre!("Invalid AVAILABILITY_MODE value: {}", e))?;

        // Notification settings
        let notify_webhook_url = env::var("NOTIFY_WEBHOOK_URL").ok().filter(|url| !url.is_empty());

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            jwt_secret,
            request_timeout,
            ledger_policy: LedgerPolicy {
                enforce_service_offering,
            },
            availability_mode,
            notify_webhook_url,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
