use breqd::collector::RuntimeInfo;
use breqd::output::{
    read_json_value, read_trace, trace_file_name, validate_path, write_rankings, write_trace,
};
use breqd::ranker::DurationRecord;
use breqd::trace::TraceEvent;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_events() -> Vec<TraceEvent> {
    vec![
        TraceEvent::measure("http", 0.0, 4.0),
        TraceEvent::measure("fs", 1.0, 2.0),
    ]
}

#[test]
fn test_write_and_read_trace() {
    let events = create_test_events();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_trace(&events, path).unwrap();
    let loaded = read_trace(path).unwrap();

    assert_eq!(loaded, events);
}

#[test]
fn test_trace_is_single_json_array() {
    let temp_file = NamedTempFile::new().unwrap();
    write_trace(&create_test_events(), temp_file.path()).unwrap();

    let content = std::fs::read_to_string(temp_file.path()).unwrap();

    assert!(content.starts_with('['));
    assert!(content.ends_with(']'));
    assert!(!content.contains('\n'));
}

#[test]
fn test_write_empty_trace() {
    let temp_file = NamedTempFile::new().unwrap();
    write_trace(&[], temp_file.path()).unwrap();

    assert_eq!(std::fs::read_to_string(temp_file.path()).unwrap(), "[]");
}

#[test]
fn test_write_and_read_rankings() {
    let temp_file = NamedTempFile::new().unwrap();
    let records = vec![
        DurationRecord::new("http", 30.0),
        DurationRecord::new("fs", 10.0),
    ];

    write_rankings(&records, temp_file.path()).unwrap();
    let value = read_json_value(temp_file.path()).unwrap();

    assert!(value.is_array());

    let loaded: Vec<DurationRecord> = serde_json::from_value(value).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/trace.json");

    write_trace(&create_test_events(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_read_missing_trace_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(read_trace(temp_dir.path().join("missing.json")).is_err());
}

#[test]
fn test_trace_file_name_encodes_runtime() {
    let info = RuntimeInfo {
        version: "v20.11.1".to_string(),
        platform: "linux".to_string(),
        arch: "x64".to_string(),
    };

    assert_eq!(trace_file_name(&info), "breqd-node-v20.11.1-linux-x64.json");
}
