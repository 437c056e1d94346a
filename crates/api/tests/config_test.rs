use pretty_assertions::assert_eq;
use slotbook_api::config::{parse_log_level, ApiConfig};
use slotbook_core::models::schedule::ScheduleConfig;
use tracing::Level;

#[test]
fn test_server_addr_formatting() {
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        database_url: "postgres://localhost".to_string(),
        log_level: Level::INFO,
        cors_origins: None,
        request_timeout: 30,
        schedule: ScheduleConfig::default(),
    };

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
}

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace"), Level::TRACE);
    assert_eq!(parse_log_level("debug"), Level::DEBUG);
    assert_eq!(parse_log_level("info"), Level::INFO);
    assert_eq!(parse_log_level("warn"), Level::WARN);
    assert_eq!(parse_log_level("error"), Level::ERROR);
    // Unknown names fall back to info rather than failing startup
    assert_eq!(parse_log_level("verbose"), Level::INFO);
}
