//! Ranking of collected durations.
//!
//! Converts a [`DurationMapping`](crate::collector::DurationMapping) into
//! records ordered from the slowest unit to the fastest.

pub mod sort;

pub use sort::{rank, rank_value, DurationRecord, OrderedDurations};
