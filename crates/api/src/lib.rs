//! # SalonBook API
//!
//! The API crate provides the web server for the SalonBook appointment service.
//! It exposes booking, appointment lifecycle and stylist availability endpoints
//! on top of the scheduling core.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into scheduling operations
//! - **Middleware**: Bearer-token identity and error-to-response mapping
//! - **Notify**: Best-effort delivery of booking and cancellation notices
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Persistence is reached only through
//! the `AppointmentStore` trait, backed by PostgreSQL in production.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Notification delivery
pub mod notify;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use eyre::Result;
use salonbook_core::{
    notify::Notifier,
    scheduling::{
        AppointmentManager, AvailabilityCalculator, AvailabilityMode, BookingLedger, LedgerPolicy,
    },
    store::AppointmentStore,
};
use salonbook_db::{DbPool, PgAppointmentStore};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::notify::{LogNotifier, WebhookNotifier};

/// Shared application state that is accessible to all request handlers
///
/// Every dependency is injected here; the scheduling services share one
/// store instance.
pub struct ApiState {
    pub store: Arc<dyn AppointmentStore>,
    pub notifier: Arc<dyn Notifier>,
    pub ledger: BookingLedger,
    pub availability: AvailabilityCalculator,
    pub appointments: AppointmentManager,
    /// Secret used to verify bearer tokens
    pub jwt_secret: String,
}

impl ApiState {
    pub fn new(
        store: Arc<dyn AppointmentStore>,
        notifier: Arc<dyn Notifier>,
        policy: LedgerPolicy,
        mode: AvailabilityMode,
        jwt_secret: impl Into<String>,
    ) -> Self {
        Self {
            ledger: BookingLedger::new(store.clone(), policy),
            availability: AvailabilityCalculator::new(store.clone(), mode),
            appointments: AppointmentManager::new(store.clone()),
            store,
            notifier,
            jwt_secret: jwt_secret.into(),
        }
    }
}

/// Builds the application router with all routes attached to `state`
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Booking and lifecycle endpoints
        .merge(routes::appointment::routes())
        // Availability endpoints
        .merge(routes::availability::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and database connection
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// let config = salonbook_api::config::ApiConfig::from_env()?;
/// let db_pool = salonbook_db::create_pool(&config.database_url).await?;
/// salonbook_api::start_server(config, db_pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let store: Arc<dyn AppointmentStore> = Arc::new(PgAppointmentStore::new(db_pool));
    let notifier: Arc<dyn Notifier> = match &config.notify_webhook_url {
        Some(url) => Arc::new(WebhookNotifier::new(url.clone())),
        None => Arc::new(LogNotifier),
    };

    info!(
        "Scheduling policy: enforce_service_offering={}, availability_mode={:?}",
        config.ledger_policy.enforce_service_offering, config.availability_mode
    );

    let state = Arc::new(ApiState::new(
        store,
        notifier,
        config.ledger_policy,
        config.availability_mode,
        config.jwt_secret.clone(),
    ));

    let app = app(state).layer(TraceLayer::new_for_http());

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PATCH,
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
    let app = app.layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
