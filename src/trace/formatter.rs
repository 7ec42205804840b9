//! Conversion of ranked durations into trace events.
//!
//! The slowest unit anchors the timeline. Each event is shifted right by
//! half of its gap to the anchor, so in the viewer every bar is centered
//! on the midpoint of the slowest one.
//! Refs: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU/preview#heading=h.yr4qxyxotyw

use super::schema::{TraceEvent, TraceEventSequence};
use crate::ranker::DurationRecord;
use crate::utils::config::{DUR_DIVISOR, TS_DIVISOR};
use crate::utils::error::TypeMismatch;
use log::debug;
use serde_json::Value;

/// Field names accepted for the unit name in ranking files
const NAME_FIELDS: &[&str] = &["name", "moduleName", "module"];

/// Convert ranked durations into trace events
///
/// **Public** - third stage of the pipeline
///
/// The first record is taken as the longest duration. Input that is not
/// sorted descending is formatted anyway, just off-center.
///
/// # Errors
/// * `TypeMismatch::InvalidRecord` - a duration is NaN or infinite
pub fn format(records: &[DurationRecord]) -> Result<TraceEventSequence, TypeMismatch> {
    let Some(anchor) = records.first() else {
        return Ok(Vec::new());
    };
    let max_duration = anchor.duration;

    let events = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if !record.duration.is_finite() {
                return Err(TypeMismatch::InvalidRecord { index });
            }
            Ok(to_event(&record.name, record.duration, max_duration))
        })
        .collect::<Result<TraceEventSequence, _>>()?;

    debug!("Formatted {} trace events", events.len());
    Ok(events)
}

/// Convert a ranking loaded from JSON into trace events
///
/// **Public** - used for rankings files saved by other runs
///
/// # Errors
/// * `TypeMismatch::NotAnArray` - input is not a JSON array
/// * `TypeMismatch::InvalidAnchor` - the first duration is not a number
/// * `TypeMismatch::NotAnObject` - an element is not an object
/// * `TypeMismatch::InvalidName` - an element has no string name
/// * `TypeMismatch::InvalidDuration` - an element has no numeric duration
pub fn format_value(records: &Value) -> Result<TraceEventSequence, TypeMismatch> {
    let records = records.as_array().ok_or(TypeMismatch::NotAnArray)?;

    let Some(anchor) = records.first() else {
        return Ok(Vec::new());
    };
    let max_duration = anchor
        .get("duration")
        .and_then(Value::as_f64)
        .ok_or(TypeMismatch::InvalidAnchor)?;

    let mut events = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let fields = record
            .as_object()
            .ok_or(TypeMismatch::NotAnObject { index })?;

        let name = NAME_FIELDS
            .iter()
            .find_map(|field| fields.get(*field))
            .and_then(Value::as_str)
            .ok_or(TypeMismatch::InvalidName { index })?;

        let duration = fields
            .get("duration")
            .and_then(Value::as_f64)
            .ok_or(TypeMismatch::InvalidDuration { index })?;

        events.push(to_event(name, duration, max_duration));
    }

    debug!("Formatted {} trace events", events.len());
    Ok(events)
}

/// **Private** - the centering transform shared by both entry points
fn to_event(name: &str, duration: f64, max_duration: f64) -> TraceEvent {
    TraceEvent::measure(
        name,
        (max_duration - duration) / TS_DIVISOR,
        duration / DUR_DIVISOR,
    )
}
