//! Configuration parsing tests.

use std::io::Write;

use pretty_assertions::assert_eq;
use rv64emu_core::common::SimError;
use rv64emu_core::config::{Config, UnmappedAccess};
use tempfile::NamedTempFile;

#[test]
fn defaults_describe_the_standard_machine() {
    let config = Config::default();
    assert_eq!(config.system.ram_base, 0x8000_0000);
    assert_eq!(config.system.ram_size, 128 * 1024 * 1024);
    assert_eq!(config.system.uart_base, 0x1000_0000);
    assert_eq!(config.system.syscon_base, 0x0010_0000);
    assert_eq!(config.system.unmapped_access, UnmappedAccess::Ignore);
    assert_eq!(config.system.ram_end(), 0x8800_0000);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.start_pc, None);
    assert_eq!(config.general.max_instructions, None);
}

#[test]
fn empty_object_is_all_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.system.ram_base, 0x8000_0000);
    assert_eq!(config.system.unmapped_access, UnmappedAccess::Ignore);
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config = Config::from_json(
        r#"{ "general": { "start_pc": 2147483904 }, "system": { "ram_size": 65536 } }"#,
    )
    .unwrap();
    assert_eq!(config.general.start_pc, Some(0x8000_0100));
    assert_eq!(config.system.ram_size, 0x1_0000);
    assert_eq!(config.system.uart_base, 0x1000_0000);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = Config::from_json(r#"{ "system": { "ram_size": "big" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)), "got {err:?}");
}

#[test]
fn unknown_policy_is_rejected() {
    let err = Config::from_json(r#"{ "system": { "unmapped_access": "Panic" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn from_file_reads_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "system": {{ "unmapped_access": "Fault" }} }}"#).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.system.unmapped_access, UnmappedAccess::Fault);
}

#[test]
fn from_file_reports_missing_path() {
    let err = Config::from_file("/nonexistent/rv64emu.json").unwrap_err();
    match err {
        SimError::Io { path, .. } => assert_eq!(path, "/nonexistent/rv64emu.json"),
        other => panic!("expected Io error, got {other:?}"),
    }
}
