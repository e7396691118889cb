//! Subscriber setup tests.

use std::path::PathBuf;

use chrono::Utc;
use oclog::model::{CountData, Row, Tag, TagKey, View, ViewData};
use oclog::telemetry::{init_logging, LogConfig, LogError, LogFormat};
use oclog::{Exporter, ViewExporter};
use serde_json::Value;

// =============================================================================
// LogConfig Tests
// =============================================================================

#[test]
fn log_config_default_is_json() {
    let config = LogConfig::default();
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "info");
    assert!(config.output_path.is_none());
}

#[test]
fn log_config_with_output_path() {
    let config = LogConfig {
        format: LogFormat::Pretty,
        level: "oclog=trace".to_string(),
        output_path: Some(PathBuf::from("/tmp/oclog.log")),
    };
    assert_eq!(config.output_path, Some(PathBuf::from("/tmp/oclog.log")));
    assert_ne!(config, LogConfig::default());
}

// =============================================================================
// LogError Tests
// =============================================================================

#[test]
fn log_error_invalid_filter_display() {
    let error = LogError::InvalidFilter("bad filter".to_string());
    assert!(error.to_string().contains("Invalid log filter"));
    assert!(error.to_string().contains("bad filter"));
}

#[test]
fn log_error_file_open_display() {
    let error = LogError::FileOpen {
        path: PathBuf::from("/nope/oclog.log"),
        reason: "permission denied".to_string(),
    };
    assert!(error.to_string().contains("/nope/oclog.log"));
    assert!(error.to_string().contains("permission denied"));
}

// =============================================================================
// Default Sink Integration
// =============================================================================

#[test]
fn default_exporter_writes_through_subscriber() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("oclog.log");
    let config = LogConfig {
        format: LogFormat::Json,
        level: "oclog=debug".to_string(),
        output_path: Some(path.clone()),
    };
    init_logging(&config).unwrap();
    assert!(matches!(
        init_logging(&config),
        Err(LogError::AlreadyInitialized)
    ));

    let data = ViewData {
        view: View {
            name: "test/nothing_view".to_string(),
            description: String::new(),
        },
        start: Utc::now(),
        end: Utc::now(),
        rows: vec![Row::new(
            vec![Tag::new(TagKey::new("tag1").unwrap(), "not1")],
            CountData { value: 2 },
        )],
    };
    Exporter::default().export_view(&data);

    let output = std::fs::read_to_string(&path).unwrap();
    let line = output
        .lines()
        .find(|l| l.contains("\"target\":\"oclog\""))
        .expect("exported record in subscriber output");
    let logged: Value = serde_json::from_str(line).unwrap();
    assert_eq!(logged["level"], "DEBUG");
    assert_eq!(logged["fields"]["message"], "metric");

    let fields: Value =
        serde_json::from_str(logged["fields"]["fields"].as_str().unwrap()).unwrap();
    assert_eq!(fields["name"], "test/nothing_view");
    assert_eq!(fields["count"], 2);
    assert_eq!(fields["tags"], serde_json::json!(["tag1:not1"]));
}
