//! Noise mitigation by averaging repeated probe runs.

use super::probe::Probe;
use crate::utils::error::CollectError;
use log::debug;

/// Streaming mean that never holds the sum of its samples
///
/// Each sample is folded in as `avg * (c / (c + 1)) + s / (c + 1)` where
/// `c` is the number of samples seen before it. Large nanosecond sums
/// never materialize.
/// Refs: https://math.stackexchange.com/a/4456455
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovingAverage {
    average: f64,
    samples: u32,
}

impl MovingAverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one sample and return the updated average
    pub fn observe(&mut self, sample: f64) -> f64 {
        let cycle = f64::from(self.samples);
        self.average = self.average * (cycle / (cycle + 1.0)) + sample / (cycle + 1.0);
        self.samples += 1;
        self.average
    }

    /// Current average, `0.0` before the first sample
    pub fn value(&self) -> f64 {
        self.average
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }
}

/// Measure `unit` `cycles` times and return the mean duration
///
/// **Public** - used by collect_with and the `probe` command
///
/// # Errors
/// The first failing sample aborts the measurement.
pub fn measure_average<P: Probe + ?Sized>(
    probe: &P,
    unit: &str,
    cycles: u32,
) -> Result<f64, CollectError> {
    let mut average = MovingAverage::new();

    for cycle in 0..cycles {
        let duration = probe.measure_once(unit)?;
        let current = average.observe(duration as f64);
        debug!(
            "{} cycle {}/{}: {} ns (avg {:.1})",
            unit,
            cycle + 1,
            cycles,
            duration,
            current
        );
    }

    Ok(average.value())
}
