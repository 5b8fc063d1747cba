//! Integration tests for the nexus-config crate.

use std::fs;
use std::path::PathBuf;

use nexus_config::{Config, ConfigError, Currency, LogConfig, UiConfig};
use nexus_protocol::{Route, TaskView};
use tempfile::TempDir;

#[tokio::test]
async fn config_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nexus.json5");

    fs::write(
        &config_path,
        r#"
        {
            // Configuration for nexus
            business: {
                name: "Globex Trading",
                currency: "eur",
                invoice_prefix: "GX-",
            },
            ui: {
                start_route: "/orders",
                task_view: "list",
                page_size: 25,
            },
            log: { level: "nexus_tui=debug", directory: "/tmp/nexus-logs" },
        }
        "#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.business.name, "Globex Trading");
    assert_eq!(config.business.currency, Currency::Eur);
    assert_eq!(config.business.invoice_number(7), "GX-7");
    assert_eq!(config.start_route().unwrap(), Route::Orders);
    assert_eq!(config.ui.task_view, TaskView::List);
    assert_eq!(config.ui.page_size, 25);
    assert_eq!(config.log.level, "nexus_tui=debug");
    assert_eq!(
        config.log.resolved_directory().unwrap(),
        PathBuf::from("/tmp/nexus-logs")
    );
}

#[tokio::test]
async fn config_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("config.json");

    let mut original = Config::default();
    original.business.name = "Initech".to_string();
    original.business.currency = Currency::Usd;
    original.ui.page_size = 100;

    original.save_to(&config_path).unwrap();
    let loaded = Config::load_from(&config_path).unwrap();

    assert_eq!(loaded, original);

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(raw["business"]["currency"], "usd");
    assert_eq!(raw["ui"]["page_size"], 100);
    assert!(raw["log"].get("directory").is_none());
}

#[tokio::test]
async fn missing_fields_take_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nexus.json5");
    fs::write(&config_path, "{ business: { name: \"Solo\" } }").unwrap();

    let config = Config::load_from(&config_path).unwrap();

    assert_eq!(config.business.name, "Solo");
    assert_eq!(config.business.currency, Currency::Bdt);
    assert_eq!(config.business.invoice_prefix, "INV-");
    assert_eq!(config.ui, UiConfig::default());
    assert_eq!(config.log, LogConfig::default());
}

#[tokio::test]
async fn invalid_page_size_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nexus.json5");
    fs::write(&config_path, "{ ui: { page_size: 7 } }").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPageSize { size: 7 }));
}

#[tokio::test]
async fn undeclared_start_route_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nexus.json5");
    fs::write(&config_path, "{ ui: { start_route: \"/warehouse\" } }").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidStartRoute(_)));
}

#[tokio::test]
async fn malformed_file_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nexus.json5");
    fs::write(&config_path, "{ business: ").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseJson5(_)));
}

#[tokio::test]
async fn missing_file_reports_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(dir.path().join("absent.json5")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}
