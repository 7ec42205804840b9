//! JSON writers and readers for trace and rankings files.

use crate::ranker::DurationRecord;
use crate::trace::TraceEvent;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write trace events as a single compact JSON array
///
/// **Public** - main entry point for trace output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let events = format(&rank(&collect()?)?)?;
/// write_trace(&events, "breqd-node-v20.11.1-linux-x64.json")?;
/// ```
pub fn write_trace(events: &[TraceEvent], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} trace events to: {}", events.len(), output_path.display());
    write_json(events, output_path, false)?;

    info!(
        "Trace written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Write ranked durations as pretty JSON
///
/// **Public** - the file can be fed back through `convert`
pub fn write_rankings(
    records: &[DurationRecord],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} rankings to: {}", records.len(), output_path.display());
    write_json(records, output_path, true)
}

/// **Private** - validate, create parents, serialize
fn write_json<T: Serialize + ?Sized>(
    value: &T,
    output_path: &Path,
    pretty: bool,
) -> Result<(), OutputError> {
    super::validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }

    writer.flush().map_err(OutputError::WriteFailed)?;
    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read trace events from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_trace(input_path: impl AsRef<Path>) -> Result<Vec<TraceEvent>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading trace from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let events: Vec<TraceEvent> = serde_json::from_reader(BufReader::new(file))?;

    debug!("Trace loaded: {} events", events.len());

    Ok(events)
}

/// Read any JSON document, for the dynamic rank/format entry points
pub fn read_json_value(input_path: impl AsRef<Path>) -> Result<Value, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
