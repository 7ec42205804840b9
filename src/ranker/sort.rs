//! Validation and descending sort of collected durations.

use crate::collector::DurationMapping;
use crate::utils::error::TypeMismatch;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit and its averaged load duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationRecord {
    /// Unit name
    #[serde(alias = "moduleName", alias = "module")]
    pub name: String,

    /// Load duration in nanoseconds
    pub duration: f64,
}

impl DurationRecord {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Records sorted by descending duration
pub type OrderedDurations = Vec<DurationRecord>;

/// Rank a duration mapping, longest first
///
/// **Public** - second stage of the pipeline
///
/// Equal durations keep no particular relative order.
///
/// # Errors
/// * `TypeMismatch::InvalidValue` - a duration is NaN or infinite
pub fn rank(durations: &DurationMapping) -> Result<OrderedDurations, TypeMismatch> {
    let mut records = Vec::with_capacity(durations.len());

    for (name, &duration) in durations {
        if !duration.is_finite() {
            return Err(TypeMismatch::InvalidValue {
                key: name.clone(),
                value: duration.to_string(),
            });
        }
        records.push(DurationRecord::new(name.as_str(), duration));
    }

    Ok(sort_descending(records))
}

/// Rank a mapping loaded from JSON
///
/// **Public** - used for durations files saved by other runs
///
/// # Errors
/// * `TypeMismatch::NotAMapping` - input is not a JSON object
/// * `TypeMismatch::InvalidValue` - a value is not a number
pub fn rank_value(durations: &Value) -> Result<OrderedDurations, TypeMismatch> {
    let map = durations.as_object().ok_or(TypeMismatch::NotAMapping)?;

    let mut records = Vec::with_capacity(map.len());
    for (name, value) in map {
        let duration = value.as_f64().ok_or_else(|| TypeMismatch::InvalidValue {
            key: name.clone(),
            value: value.to_string(),
        })?;
        records.push(DurationRecord::new(name.as_str(), duration));
    }

    Ok(sort_descending(records))
}

/// **Private** - shared tail of rank and rank_value
fn sort_descending(mut records: Vec<DurationRecord>) -> OrderedDurations {
    records.sort_by(|a, b| b.duration.total_cmp(&a.duration));

    if let Some(first) = records.first() {
        debug!(
            "Ranked {} units, slowest: {} ({:.0} ns)",
            records.len(),
            first.name,
            first.duration
        );
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_descending_orders_by_duration() {
        let records = vec![
            DurationRecord::new("a", 1.0),
            DurationRecord::new("b", 3.0),
            DurationRecord::new("c", 2.0),
        ];

        let names: Vec<_> = sort_descending(records)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_rejects_infinite() {
        let mut durations = DurationMapping::new();
        durations.insert("fs".to_string(), f64::INFINITY);

        let err = rank(&durations).unwrap_err();
        assert!(matches!(err, TypeMismatch::InvalidValue { ref key, .. } if key == "fs"));
    }

    #[test]
    fn test_record_accepts_module_name_alias() {
        let record: DurationRecord =
            serde_json::from_value(json!({"moduleName": "fs", "duration": 12.5})).unwrap();
        assert_eq!(record, DurationRecord::new("fs", 12.5));
    }
}
