//! Node.js runtime bindings for enumeration and probing.
//!
//! Everything that knows about Node lives here: the helper scripts and
//! how they are spawned. The rest of the collector only sees
//! [`UnitCatalog`] and [`Probe`].

use super::catalog::{dedup_units, UnitCatalog};
use super::probe::{ProcessProbe, Probe};
use crate::utils::config::{
    DEFAULT_RUNTIME, PREFIX_ONLY_UNITS, PROBE_SCRIPT_PREFIX, PROBE_SCRIPT_SUFFIX, RUNTIME_ENV_VAR,
};
use crate::utils::error::CollectError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempPath;

/// Measurement entry point run in every probe process.
///
/// Runs as the main script file, so `process.argv` is
/// `[runtime, script, unit]`. Loads the unit and writes the elapsed
/// nanoseconds to stderr.
pub const PROBE_SCRIPT: &str = "\
const unit = process.argv[2];
const before = process.hrtime.bigint();
require(unit);
const after = process.hrtime.bigint();
process.stderr.write(String(after - before));
";

// Prefix-only builtins are passed as arguments and kept when the
// runtime recognizes them.
const ENUMERATE_SCRIPT: &str = "\
const Module = require('module');
const units = [...Module.builtinModules];
for (const unit of process.argv.slice(1)) {
  if (typeof Module.isBuiltin === 'function' && Module.isBuiltin(unit)) {
    units.push(unit);
  }
}
process.stdout.write(JSON.stringify(units));
";

const INFO_SCRIPT: &str = "\
process.stdout.write(JSON.stringify({
  version: process.version,
  platform: process.platform,
  arch: process.arch,
}));
";

/// Version, platform and architecture reported by the runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInfo {
    /// `process.version`, e.g. `v20.11.1`
    pub version: String,

    /// `process.platform`, e.g. `linux`
    pub platform: String,

    /// `process.arch`, e.g. `x64`
    pub arch: String,
}

/// A Node.js executable used to enumerate and load builtin modules
#[derive(Debug, Clone)]
pub struct NodeRuntime {
    executable: PathBuf,
}

impl NodeRuntime {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Runtime named by `BREQD_RUNTIME`, falling back to `node` on PATH
    pub fn from_env() -> Self {
        match std::env::var_os(RUNTIME_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Probe that loads one unit per freshly spawned runtime
    ///
    /// Writes [`PROBE_SCRIPT`] to a temporary file that is removed when the
    /// returned probe is dropped. Every sample runs
    /// `<runtime> --no-warnings <script> <unit>`.
    pub fn probe(&self) -> Result<NodeProbe, CollectError> {
        let script = write_probe_script()
            .map_err(|e| CollectError::Runtime(format!("cannot write probe script: {}", e)))?;
        debug!("Probe script written to {}", script.display());

        let process = ProcessProbe::new(&self.executable)
            .arg("--no-warnings")
            .arg(script.as_os_str());

        Ok(NodeProbe { process, script })
    }

    /// Ask the runtime for its version, platform and architecture
    pub fn info(&self) -> Result<RuntimeInfo, CollectError> {
        let stdout = self.run_script(INFO_SCRIPT, &[])?;
        let info: RuntimeInfo = serde_json::from_str(&stdout).map_err(|e| {
            CollectError::Runtime(format!("unexpected runtime info '{}': {}", stdout, e))
        })?;

        debug!(
            "Runtime {} on {}-{}",
            info.version, info.platform, info.arch
        );

        Ok(info)
    }

    /// Run a helper script to completion and return its stdout
    ///
    /// **Private** - shared by enumerate and info
    fn run_script(&self, script: &str, args: &[&str]) -> Result<String, CollectError> {
        let output = Command::new(&self.executable)
            .arg("--no-warnings")
            .arg("-e")
            .arg(script)
            .args(args)
            .output()
            .map_err(|e| {
                CollectError::Runtime(format!(
                    "cannot spawn {}: {}",
                    self.executable.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(CollectError::Runtime(format!(
                "{} exited with {}: {}",
                self.executable.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Write the probe entry point to a fresh temporary file
///
/// **Private** - the `.cjs` suffix keeps it CommonJS whatever
/// `package.json` sits above the temp dir
fn write_probe_script() -> io::Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix(PROBE_SCRIPT_PREFIX)
        .suffix(PROBE_SCRIPT_SUFFIX)
        .tempfile()?;

    file.write_all(PROBE_SCRIPT.as_bytes())?;
    file.flush()?;

    Ok(file.into_temp_path())
}

/// Probe running [`PROBE_SCRIPT`] as the main file of a fresh runtime
///
/// Unlike `-e`, a file entry point leaves the `module` builtin unloaded
/// until the script itself requires the unit.
#[derive(Debug)]
pub struct NodeProbe {
    process: ProcessProbe,
    script: TempPath,
}

impl NodeProbe {
    /// Command spawned for every sample (the unit is appended last)
    pub fn process(&self) -> &ProcessProbe {
        &self.process
    }

    /// Location of the probe script; deleted when the probe is dropped
    pub fn script_path(&self) -> &Path {
        &self.script
    }
}

impl Probe for NodeProbe {
    fn measure_once(&self, unit: &str) -> Result<u64, CollectError> {
        self.process.measure_once(unit)
    }
}

impl Default for NodeRuntime {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME)
    }
}

impl UnitCatalog for NodeRuntime {
    fn enumerate(&self) -> Result<Vec<String>, CollectError> {
        let stdout = self.run_script(ENUMERATE_SCRIPT, PREFIX_ONLY_UNITS)?;
        let units: Vec<String> = serde_json::from_str(&stdout)
            .map_err(|e| CollectError::Enumeration(format!("invalid unit list: {}", e)))?;

        let units = dedup_units(units);
        info!(
            "Found {} builtin units in {}",
            units.len(),
            self.executable.display()
        );

        Ok(units)
    }
}
