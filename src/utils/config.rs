//! Configuration and constants for the CLI.

/// Number of probe runs averaged for every unit
pub const DEFAULT_CYCLES: u32 = 5;

/// Upper bound accepted for `--cycles`
pub const MAX_CYCLES: u32 = 1000;

/// Runtime executable used when nothing else is configured
pub const DEFAULT_RUNTIME: &str = "node";

/// Environment variable overriding the runtime executable
pub const RUNTIME_ENV_VAR: &str = "BREQD_RUNTIME";

/// Rows shown in the ranking table
pub const DEFAULT_TOP: usize = 20;

// Temporary probe entry point, `breqd-probe-XXXXXX.cjs`
pub const PROBE_SCRIPT_PREFIX: &str = "breqd-probe-";
pub const PROBE_SCRIPT_SUFFIX: &str = ".cjs";

// Builtins that only resolve with the `node:` scheme and are missing
// from `Module.builtinModules`.
// Refs: https://nodejs.org/api/modules.html#built-in-modules-with-mandatory-node-prefix
pub const PREFIX_ONLY_UNITS: &[&str] = &["node:sea", "node:test", "node:test/reporters"];

/// Largest integer a JavaScript number holds exactly (`Number.MAX_SAFE_INTEGER`)
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

// Trace Event Format constants
// Refs: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU/preview
pub const TRACE_CATEGORY: &str = "measure";
pub const TRACE_PHASE: &str = "X"; // complete event
pub const TRACE_PID: u32 = 1;

// ns -> us for `dur`. `ts` uses twice the divisor so events center on
// a common axis in the viewer.
pub const DUR_DIVISOR: f64 = 1000.0;
pub const TS_DIVISOR: f64 = 2000.0;

/// Prefix of generated trace file names
pub const TRACE_FILE_PREFIX: &str = "breqd-node";

/// Viewer that opens the generated trace files
pub const VIEWER_URL: &str = "https://ui.perfetto.dev";
