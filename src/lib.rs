//! breqd
//!
//! Measures how long each builtin module of a Node.js runtime takes to
//! load, ranks the modules by load cost and exports the ranking in the
//! Trace Event Format.
//!
//! The pipeline is three calls:
//!
//! ```ignore
//! let durations = breqd::collect()?;
//! let ranked = breqd::rank(&durations)?;
//! let events = breqd::format(&ranked)?;
//! ```
//!
//! Open the written file on https://ui.perfetto.dev to compare modules
//! on one timeline.

pub mod collector;
pub mod commands;
pub mod output;
pub mod ranker;
pub mod trace;
pub mod utils;

pub use collector::{collect, collect_with, DurationMapping};
pub use ranker::{rank, DurationRecord, OrderedDurations};
pub use trace::{format, TraceEvent, TraceEventSequence};
