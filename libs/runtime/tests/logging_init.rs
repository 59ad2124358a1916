//! Installs the global subscriber, so this file holds a single test.

use std::fs;

use runtime::{init_logging_from_config, LoggingConfig, Section};
use tempfile::tempdir;

fn section(console_level: &str, file: &str, file_level: &str) -> Section {
    Section {
        console_level: console_level.into(),
        file: file.into(),
        file_level: file_level.into(),
        max_backups: Some(1),
        max_size_mb: Some(1),
    }
}

#[test]
fn config_routes_json_records_to_rotating_files() {
    let home = tempdir().unwrap();
    let mut cfg = LoggingConfig::new();
    cfg.insert("default".into(), section("off", "logs/app.log", "debug"));
    cfg.insert("audit".into(), section("off", "logs/audit.log", "info"));

    init_logging_from_config(&cfg, home.path());
    // A second call keeps the first subscriber.
    init_logging_from_config(&LoggingConfig::new(), home.path());

    tracing::info!(answer = 42, "default file event");
    tracing::debug!("default debug event");
    tracing::trace!("default trace event");
    tracing::info!(target: "audit::trail", "audit event");
    tracing::debug!(target: "audit::trail", "audit debug event");

    let app_log = fs::read_to_string(home.path().join("logs/app.log")).unwrap();
    let records: Vec<serde_json::Value> = app_log
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let messages: Vec<&str> = records
        .iter()
        .map(|r| r["fields"]["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, ["default file event", "default debug event"]);
    assert_eq!(records[0]["level"], "INFO");
    assert_eq!(records[0]["fields"]["answer"], 42);
    assert_eq!(records[0]["target"], "logging_init");
    assert!(records[0]["timestamp"].as_str().unwrap().ends_with('Z'));

    let audit_log = fs::read_to_string(home.path().join("logs/audit.log")).unwrap();
    assert!(audit_log.contains("\"audit event\""));
    assert!(!audit_log.contains("audit debug event"));
    assert!(!app_log.contains("audit event"));
}
