//! Trace Event Format schema written to disk.
//!
//! Only complete events (`"ph": "X"`) are produced. The file is a bare
//! JSON array of events, which ui.perfetto.dev and chrome://tracing both
//! accept.

use crate::utils::config::{TRACE_CATEGORY, TRACE_PHASE, TRACE_PID};
use serde::{Deserialize, Serialize};

/// A single complete event on the shared timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Unit name
    pub name: String,

    /// Category, always `measure`
    pub cat: String,

    /// Phase, always `X` (complete event)
    pub ph: String,

    /// Synthetic process id, always 1
    pub pid: u32,

    /// Start timestamp in microseconds
    pub ts: f64,

    /// Duration in microseconds
    pub dur: f64,
}

impl TraceEvent {
    /// Build a `measure` complete event
    pub fn measure(name: impl Into<String>, ts: f64, dur: f64) -> Self {
        Self {
            name: name.into(),
            cat: TRACE_CATEGORY.to_string(),
            ph: TRACE_PHASE.to_string(),
            pid: TRACE_PID,
            ts,
            dur,
        }
    }

    /// End of the event on the timeline
    pub fn end(&self) -> f64 {
        self.ts + self.dur
    }
}

/// Events in the same order as the ranked records they came from
pub type TraceEventSequence = Vec<TraceEvent>;
