//! Measure command implementation.
//!
//! The measure command:
//! 1. Queries the runtime for version, platform and architecture
//! 2. Collects averaged load durations for every builtin
//! 3. Ranks them
//! 4. Formats them as trace events
//! 5. Writes output files

use crate::collector::{collect_with, NodeRuntime};
use crate::commands::models::MeasureArgs;
use crate::commands::utils::render_summary;
use crate::output::{trace_file_name, write_rankings, write_trace};
use crate::ranker::rank;
use crate::trace::format;
use crate::utils::config::{MAX_CYCLES, VIEWER_URL};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Execute the measure command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Path of the written trace file
///
/// # Errors
/// * Runtime spawn or query failures
/// * Any failed probe (the whole run is aborted)
/// * File write errors
pub fn execute_measure(args: MeasureArgs) -> Result<PathBuf> {
    let start_time = Instant::now();
    let runtime = NodeRuntime::new(&args.runtime);

    info!("Starting measurement with runtime: {}", args.runtime.display());

    let runtime_info = runtime
        .info()
        .context("Failed to query runtime information")?;
    info!(
        "Runtime: node {} ({}-{})",
        runtime_info.version, runtime_info.platform, runtime_info.arch
    );

    let probe = runtime
        .probe()
        .context("Failed to prepare the probe script")?;
    let durations = collect_with(&runtime, &probe, args.cycles)
        .context("Failed to collect module durations")?;

    let ranked = rank(&durations).context("Failed to rank module durations")?;

    if let Some(rankings_path) = &args.rankings {
        write_rankings(&ranked, rankings_path).context("Failed to write rankings JSON")?;
        info!("✓ Rankings written to: {}", rankings_path.display());
    }

    let events = format(&ranked).context("Failed to convert durations to trace events")?;

    let trace_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.output_dir.join(trace_file_name(&runtime_info)));

    write_trace(&events, &trace_path).context("Failed to write trace JSON")?;

    if args.print_summary {
        println!("{}", render_summary(&ranked, args.top));
    }

    println!("File generated by breqd: {}", trace_path.display());
    println!("Open it on {}!", VIEWER_URL);

    info!(
        "Measurement completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(trace_path)
}

/// Validate measure arguments
///
/// **Public** - can be called before execute_measure for early validation
pub fn validate_args(args: &MeasureArgs) -> Result<()> {
    if args.runtime.as_os_str().is_empty() {
        anyhow::bail!("Runtime path cannot be empty");
    }

    if args.cycles == 0 {
        anyhow::bail!("cycles must be greater than 0");
    }

    if args.cycles > MAX_CYCLES {
        anyhow::bail!("cycles is too large (max {})", MAX_CYCLES);
    }

    if args.top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.output.is_none() && args.output_dir.as_os_str().is_empty() {
        anyhow::bail!("Output directory cannot be empty");
    }

    Ok(())
}
