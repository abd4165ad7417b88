// tests/unit_config.rs
use lintpost_core::config::{Config, CONFIG_FILE};
use lintpost_core::reporting::DEFAULT_FIX_COMMAND;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_when_file_missing() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path());
    assert!(config.report.faq);
    assert_eq!(config.report.fix_command, DEFAULT_FIX_COMMAND);
}

#[test]
fn test_loads_report_table() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE),
        "[report]\nfaq = false\nfix_command = \"yarn lint --fix\"\n",
    )
    .unwrap();

    let config = Config::load(dir.path());
    assert!(!config.report.faq);
    assert_eq!(config.report.fix_command, "yarn lint --fix");
}

#[test]
fn test_partial_table_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "[report]\nfaq = false\n").unwrap();

    let config = Config::load(dir.path());
    assert!(!config.report.faq);
    assert_eq!(config.report.fix_command, DEFAULT_FIX_COMMAND);
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), "report = {{{").unwrap();

    let config = Config::load(dir.path());
    assert!(config.report.faq);
    assert_eq!(config.report.fix_command, DEFAULT_FIX_COMMAND);
}
