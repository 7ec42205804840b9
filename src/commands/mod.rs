//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod measure;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use measure::{execute_measure, validate_args};
pub use models::{ConvertArgs, MeasureArgs};
pub use utils::{
    convert_file, display_version, list_units, probe_unit, rank_file, render_summary,
    validate_trace_file,
};
