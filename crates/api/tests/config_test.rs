use salonbook_api::config::{parse_log_level, ApiConfig};
use salonbook_core::scheduling::{AvailabilityMode, LedgerPolicy};
use tracing::Level;

fn config() -> ApiConfig {
    ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        database_url: "postgres://localhost/salonbook".to_string(),
        log_level: Level::INFO,
        cors_origins: None,
        jwt_secret: "secret".to_string(),
        request_timeout: 30,
        ledger_policy: LedgerPolicy::default(),
        availability_mode: AvailabilityMode::default(),
        notify_webhook_url: None,
    }
}

#[test]
fn test_server_addr() {
    assert_eq!(config().server_addr(), "127.0.0.1:8080");
}

#[test]
fn test_scheduling_defaults() {
    let config = config();

    assert!(config.ledger_policy.enforce_service_offering);
    assert_eq!(config.availability_mode, AvailabilityMode::Exact);
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("debug"), Level::DEBUG);
    assert_eq!(parse_log_level("error"), Level::ERROR);
    // Unknown levels fall back to info
    assert_eq!(parse_log_level("verbose"), Level::INFO);
}

// The only test in this binary that touches the process environment.
#[test]
fn test_from_env_rejects_malformed_timeout() {
    std::env::set_var("DATABASE_URL", "postgres://localhost/salonbook");
    std::env::set_var("JWT_SECRET", "secret");
    std::env::set_var("API_REQUEST_TIMEOUT_SECONDS", "thirty");

    let err = ApiConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("API_REQUEST_TIMEOUT_SECONDS"));

    std::env::set_var("API_REQUEST_TIMEOUT_SECONDS", "45");
    assert_eq!(ApiConfig::from_env().unwrap().request_timeout, 45);
}
