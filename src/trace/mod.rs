//! Trace Event Format output for ranked durations.
//!
//! This module converts ranked records into events that trace viewers
//! can display on one shared timeline.

pub mod formatter;
pub mod schema;

pub use formatter::{format, format_value};
pub use schema::{TraceEvent, TraceEventSequence};
