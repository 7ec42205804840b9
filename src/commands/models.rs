use crate::utils::config::{DEFAULT_CYCLES, DEFAULT_RUNTIME, DEFAULT_TOP};
use std::path::PathBuf;

/// Arguments for the measure command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct MeasureArgs {
    /// Runtime executable to measure
    pub runtime: PathBuf,

    /// Probe runs averaged per unit
    pub cycles: u32,

    /// Directory for the generated trace file
    pub output_dir: PathBuf,

    /// Explicit trace file path (overrides the generated name)
    pub output: Option<PathBuf>,

    /// Optional path for the ranked durations JSON
    pub rankings: Option<PathBuf>,

    /// Print the ranking table to stdout
    pub print_summary: bool,

    /// Rows shown in the ranking table
    pub top: usize,
}

impl Default for MeasureArgs {
    fn default() -> Self {
        Self {
            runtime: PathBuf::from(DEFAULT_RUNTIME),
            cycles: DEFAULT_CYCLES,
            output_dir: PathBuf::from("."),
            output: None,
            rankings: None,
            print_summary: false,
            top: DEFAULT_TOP,
        }
    }
}

/// Arguments for the convert command
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Rankings JSON (array of `{name, duration}`)
    pub input: PathBuf,

    /// Trace file to write
    pub output: PathBuf,
}
