//! Output writers for trace and rankings data.
//!
//! This module handles writing data to disk:
//! - Trace Event Format files (compact JSON array)
//! - Rankings files (pretty JSON)

pub mod json;

// Re-export main functions
pub use json::{read_json_value, read_trace, write_rankings, write_trace};

use crate::collector::RuntimeInfo;
use crate::utils::config::TRACE_FILE_PREFIX;
use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// File name encoding the runtime that produced the trace
///
/// e.g. `breqd-node-v20.11.1-linux-x64.json`
pub fn trace_file_name(info: &RuntimeInfo) -> String {
    format!(
        "{}-{}-{}-{}.json",
        TRACE_FILE_PREFIX, info.version, info.platform, info.arch
    )
}
