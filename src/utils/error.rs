//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// A single probe run that did not produce a usable duration
#[derive(Error, Debug)]
pub enum MeasurementFailure {
    #[error("failed to spawn probe for '{unit}': {source}")]
    Spawn {
        unit: String,
        #[source]
        source: std::io::Error,
    },

    #[error("probe for '{unit}' exited with code {code}, stderr: {stderr}")]
    Exited {
        unit: String,
        code: i32,
        stderr: String,
    },

    #[error("probe for '{unit}' was terminated by signal {signal}, stderr: {stderr}")]
    Signaled {
        unit: String,
        signal: i32,
        stderr: String,
    },

    #[error("probe for '{unit}' produced no output")]
    EmptyOutput { unit: String },

    #[error("'{unit}' '{output}' is not a safe integer")]
    UnsafeInteger { unit: String, output: String },
}

impl MeasurementFailure {
    /// Name of the unit whose measurement failed
    pub fn unit(&self) -> &str {
        match self {
            Self::Spawn { unit, .. }
            | Self::Exited { unit, .. }
            | Self::Signaled { unit, .. }
            | Self::EmptyOutput { unit }
            | Self::UnsafeInteger { unit, .. } => unit,
        }
    }
}

/// Errors that abort a duration collection
#[derive(Error, Debug)]
pub enum CollectError {
    #[error(transparent)]
    Measurement(#[from] MeasurementFailure),

    #[error("Failed to enumerate units: {0}")]
    Enumeration(String),

    #[error("Runtime query failed: {0}")]
    Runtime(String),
}

/// Malformed input handed to the ranker or the trace formatter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeMismatch {
    #[error("durations must be a mapping of unit names to numbers")]
    NotAMapping,

    #[error("The value, {value}, of key '{key}' must be a finite number")]
    InvalidValue { key: String, value: String },

    #[error("durations must be an array")]
    NotAnArray,

    #[error("durations[0].duration must be a number")]
    InvalidAnchor,

    #[error("durations[{index}] must be an object")]
    NotAnObject { index: usize },

    #[error("durations[{index}].name must be a string")]
    InvalidName { index: usize },

    #[error("durations[{index}].duration must be a number")]
    InvalidDuration { index: usize },

    #[error("durations[{index}].duration must be finite")]
    InvalidRecord { index: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
