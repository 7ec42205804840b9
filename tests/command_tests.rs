use breqd::commands::{
    convert_file, rank_file, validate_args, validate_trace_file, ConvertArgs, MeasureArgs,
};
use breqd::output::{read_trace, write_trace};
use breqd::trace::TraceEvent;
use std::path::PathBuf;

#[test]
fn test_validate_args_default() {
    assert!(validate_args(&MeasureArgs::default()).is_ok());
}

#[test]
fn test_validate_args_empty_runtime() {
    let args = MeasureArgs {
        runtime: PathBuf::new(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_zero_cycles() {
    let args = MeasureArgs {
        cycles: 0,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_too_many_cycles() {
    let args = MeasureArgs {
        cycles: 5000,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_zero_top() {
    let args = MeasureArgs {
        top: 0,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_empty_output_dir() {
    let args = MeasureArgs {
        output_dir: PathBuf::new(),
        ..Default::default()
    };
    assert!(validate_args(&args).is_err());

    let args = MeasureArgs {
        output_dir: PathBuf::new(),
        output: Some(PathBuf::from("trace.json")),
        ..Default::default()
    };
    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_convert_file_writes_trace() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("rankings.json");
    let output = temp_dir.path().join("out/trace.json");

    std::fs::write(
        &input,
        r#"[{"moduleName":"http","duration":4000},{"moduleName":"fs","duration":2000}]"#,
    )
    .unwrap();

    let written = convert_file(&ConvertArgs {
        input,
        output: output.clone(),
    })
    .unwrap();

    assert_eq!(written, output);
    let events = read_trace(&output).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].name, "fs");
    assert_eq!(events[1].ts, 1.0);
    assert_eq!(events[1].dur, 2.0);
}

#[test]
fn test_convert_file_rejects_malformed_rankings() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("rankings.json");
    let output = temp_dir.path().join("trace.json");

    std::fs::write(&input, r#"{"fs": 2000}"#).unwrap();

    assert!(convert_file(&ConvertArgs {
        input,
        output: output.clone()
    })
    .is_err());
    assert!(!output.exists());
}

#[test]
fn test_rank_file_writes_rankings() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("durations.json");
    let output = temp_dir.path().join("rankings.json");

    std::fs::write(&input, r#"{"fs": 2000, "http": 4000, "os": 10}"#).unwrap();

    let ranked = rank_file(&input, Some(output.as_path())).unwrap();

    assert_eq!(ranked[0].name, "http");
    assert!(output.exists());
}

#[test]
fn test_validate_trace_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("trace.json");

    write_trace(&[TraceEvent::measure("fs", 0.0, 1.0)], &path).unwrap();
    assert!(validate_trace_file(path.clone()).is_ok());

    let mut foreign = TraceEvent::measure("fs", 0.0, 1.0);
    foreign.ph = "B".to_string();
    write_trace(&[foreign], &path).unwrap();
    assert!(validate_trace_file(path).is_err());
}
