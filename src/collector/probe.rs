//! Single-shot load-time measurement in an isolated process.
//!
//! A unit loaded once is cached by the process that loaded it, so every
//! sample runs in a freshly spawned process that loads nothing else.

use crate::utils::config::MAX_SAFE_INTEGER;
use crate::utils::error::{CollectError, MeasurementFailure};
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Capability that takes one duration sample for a unit
///
/// **Public** - implemented by [`ProcessProbe`], [`NodeProbe`](super::NodeProbe) and by test doubles
pub trait Probe {
    /// Load `unit` once and return the elapsed nanoseconds
    fn measure_once(&self, unit: &str) -> Result<u64, CollectError>;
}

impl<P: Probe + ?Sized> Probe for &P {
    fn measure_once(&self, unit: &str) -> Result<u64, CollectError> {
        (**self).measure_once(unit)
    }
}

/// Probe that runs `program [args..] <unit>` and reads the duration
/// from its stderr
#[derive(Debug, Clone)]
pub struct ProcessProbe {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ProcessProbe {
    /// Create a probe for `program` with no leading arguments
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a fixed argument placed before the unit name
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Program spawned for every sample
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Fixed arguments passed before the unit name
    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl Probe for ProcessProbe {
    fn measure_once(&self, unit: &str) -> Result<u64, CollectError> {
        // Needs to be synchronous, otherwise the results are very flaky.
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(unit)
            .output()
            .map_err(|source| MeasurementFailure::Spawn {
                unit: unit.to_string(),
                source,
            })?;

        check_status(unit, &output)?;

        let duration = parse_probe_output(unit, &output.stderr)?;
        debug!("{}: {} ns", unit, duration);

        Ok(duration)
    }
}

/// Reject probe runs that exited unsuccessfully or were killed
///
/// **Private** - internal helper for measure_once
fn check_status(unit: &str, output: &Output) -> Result<(), MeasurementFailure> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if let Some(code) = output.status.code() {
        return Err(MeasurementFailure::Exited {
            unit: unit.to_string(),
            code,
            stderr,
        });
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = output.status.signal() {
            return Err(MeasurementFailure::Signaled {
                unit: unit.to_string(),
                signal,
                stderr,
            });
        }
    }

    Err(MeasurementFailure::Exited {
        unit: unit.to_string(),
        code: -1,
        stderr,
    })
}

/// Parse the decimal duration a probe wrote to stderr
///
/// **Public** - exposed so alternate probes can share the same rules
///
/// Every non-digit character is stripped first, so trailing newlines,
/// unit suffixes or a BigInt `n` do not matter.
///
/// # Errors
/// * `MeasurementFailure::EmptyOutput` - no digits in the output
/// * `MeasurementFailure::UnsafeInteger` - value above `Number.MAX_SAFE_INTEGER`
pub fn parse_probe_output(unit: &str, raw: &[u8]) -> Result<u64, MeasurementFailure> {
    let digits: String = String::from_utf8_lossy(raw)
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return Err(MeasurementFailure::EmptyOutput {
            unit: unit.to_string(),
        });
    }

    let unsafe_integer = || MeasurementFailure::UnsafeInteger {
        unit: unit.to_string(),
        output: digits.clone(),
    };

    let duration: u64 = digits.parse().map_err(|_| unsafe_integer())?;
    if duration > MAX_SAFE_INTEGER {
        return Err(unsafe_integer());
    }

    Ok(duration)
}
