//! Duration collection for every builtin unit of a runtime.
//!
//! This module turns a runtime into a [`DurationMapping`]:
//! - Unit enumeration ([`UnitCatalog`])
//! - Isolated single-shot measurement ([`Probe`])
//! - Averaging of repeated samples ([`MovingAverage`])

pub mod average;
pub mod catalog;
pub mod probe;
pub mod runtime;

// Re-export main types and functions
pub use average::{measure_average, MovingAverage};
pub use catalog::{StaticCatalog, UnitCatalog};
pub use probe::{parse_probe_output, ProcessProbe, Probe};
pub use runtime::{NodeProbe, NodeRuntime, RuntimeInfo, PROBE_SCRIPT};

use crate::utils::config::DEFAULT_CYCLES;
use crate::utils::error::CollectError;
use log::info;
use std::collections::BTreeMap;
use std::time::Instant;

/// Unit name to averaged load duration in nanoseconds
pub type DurationMapping = BTreeMap<String, f64>;

/// Measure every builtin of the default runtime
///
/// **Public** - first stage of the pipeline
///
/// Uses the runtime named by `BREQD_RUNTIME` (or `node`) and
/// `DEFAULT_CYCLES` samples per unit.
pub fn collect() -> Result<DurationMapping, CollectError> {
    let runtime = NodeRuntime::from_env();
    let probe = runtime.probe()?;
    collect_with(&runtime, &probe, DEFAULT_CYCLES)
}

/// Measure every unit of `catalog` with `probe`
///
/// **Public** - injectable variant of [`collect`]
///
/// Units are measured one after another. Concurrent probes would add
/// scheduling noise to the very durations being measured.
///
/// # Errors
/// The first enumeration or measurement failure aborts the collection;
/// no partial mapping is returned.
pub fn collect_with<C, P>(catalog: &C, probe: &P, cycles: u32) -> Result<DurationMapping, CollectError>
where
    C: UnitCatalog + ?Sized,
    P: Probe + ?Sized,
{
    let start_time = Instant::now();
    let units = catalog.enumerate()?;
    let total = units.len();

    info!("Measuring {} units ({} cycles each)...", total, cycles);

    let mut durations = DurationMapping::new();
    for (index, unit) in units.into_iter().enumerate() {
        let duration = measure_average(probe, &unit, cycles)?;
        info!("[{}/{}] {}: {:.0} ns", index + 1, total, unit, duration);
        durations.insert(unit, duration);
    }

    info!(
        "Collected {} durations in {:.2}s",
        durations.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(durations)
}
