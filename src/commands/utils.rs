use crate::collector::{measure_average, NodeRuntime, UnitCatalog};
use crate::commands::models::ConvertArgs;
use crate::output::{read_json_value, read_trace, write_rankings, write_trace};
use crate::ranker::{rank_value, DurationRecord};
use crate::trace::format_value;
use crate::utils::config::{
    DUR_DIVISOR, TRACE_CATEGORY, TRACE_FILE_PREFIX, TRACE_PHASE, TRACE_PID, TS_DIVISOR,
    VIEWER_URL,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Print every unit the runtime can load
pub fn list_units(runtime: &Path) -> Result<()> {
    let units = NodeRuntime::new(runtime)
        .enumerate()
        .context("Failed to enumerate builtin units")?;

    for unit in &units {
        println!("{}", unit);
    }
    println!("{} units", units.len());

    Ok(())
}

/// Measure a single unit and print its averaged duration
pub fn probe_unit(runtime: &Path, unit: &str, cycles: u32) -> Result<f64> {
    if cycles == 0 {
        anyhow::bail!("cycles must be greater than 0");
    }

    let probe = NodeRuntime::new(runtime)
        .probe()
        .context("Failed to prepare the probe script")?;
    let duration = measure_average(&probe, unit, cycles)
        .with_context(|| format!("Failed to measure '{}'", unit))?;

    println!(
        "{}: {:.0} ns ({:.3} ms, {} cycles)",
        unit,
        duration,
        duration / 1_000_000.0,
        cycles
    );

    Ok(duration)
}

/// Rank a saved durations mapping and print or save the result
pub fn rank_file(input: &Path, output: Option<&Path>) -> Result<Vec<DurationRecord>> {
    let durations = read_json_value(input)
        .with_context(|| format!("Failed to read durations from {}", input.display()))?;

    let ranked = rank_value(&durations).context("Invalid durations file")?;

    match output {
        Some(path) => {
            write_rankings(&ranked, path).context("Failed to write rankings JSON")?;
            println!("✓ Rankings written to: {}", path.display());
        }
        None => println!("{}", render_summary(&ranked, ranked.len().max(1))),
    }

    Ok(ranked)
}

/// Convert a saved rankings file into a trace file
pub fn convert_file(args: &ConvertArgs) -> Result<PathBuf> {
    let rankings = read_json_value(&args.input)
        .with_context(|| format!("Failed to read rankings from {}", args.input.display()))?;

    let events = format_value(&rankings).context("Invalid rankings file")?;
    write_trace(&events, &args.output).context("Failed to write trace JSON")?;

    println!("✓ Trace written to: {}", args.output.display());
    println!("Open it on {}!", VIEWER_URL);

    Ok(args.output.clone())
}

/// Validate a trace JSON file
pub fn validate_trace_file(file_path: PathBuf) -> Result<()> {
    println!("Validating trace: {}", file_path.display());

    let events = read_trace(&file_path)?;

    let foreign = events
        .iter()
        .filter(|e| e.cat != TRACE_CATEGORY || e.ph != TRACE_PHASE || e.pid != TRACE_PID)
        .count();
    if foreign > 0 {
        anyhow::bail!(
            "{} events are not '{}' complete events on pid {}",
            foreign,
            TRACE_CATEGORY,
            TRACE_PID
        );
    }

    println!("✓ Valid trace JSON");
    println!("  Events: {}", events.len());
    if let Some(slowest) = events.iter().max_by(|a, b| a.dur.total_cmp(&b.dur)) {
        println!("  Slowest: {} ({:.3} ms)", slowest.name, slowest.dur / 1000.0);
    }
    let span = events.iter().map(|e| e.end()).fold(0.0_f64, f64::max);
    println!("  Timeline span: {:.3} ms", span / 1000.0);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("breqd v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "Trace events: cat={} ph={} pid={} (ts = gap / {}, dur = ns / {})",
        TRACE_CATEGORY, TRACE_PHASE, TRACE_PID, TS_DIVISOR, DUR_DIVISOR
    );
    println!("Output files: {}-<version>-<platform>-<arch>.json", TRACE_FILE_PREFIX);
    println!();
    println!("Measures how long each Node.js builtin module takes to load.");
    println!("Open the generated files on {}", VIEWER_URL);
}

/// Render the slowest `top` units as a text table
///
/// **Public** - used by measure and rank
pub fn render_summary(ranked: &[DurationRecord], top: usize) -> String {
    let width = ranked
        .iter()
        .take(top)
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max("MODULE".len());

    let mut lines = vec![format!(
        "{:>4}  {:<width$}  {:>12}",
        "#", "MODULE", "LOAD (ms)"
    )];
    lines.extend(ranked.iter().take(top).enumerate().map(|(i, record)| {
        format!(
            "{:>4}  {:<width$}  {:>12.3}",
            i + 1,
            record.name,
            record.duration / 1_000_000.0
        )
    }));
    if ranked.len() > top {
        lines.push(format!("  ... {} more", ranked.len() - top));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_summary_truncates() {
        let ranked = vec![
            DurationRecord::new("http", 3_000_000.0),
            DurationRecord::new("fs", 2_000_000.0),
            DurationRecord::new("os", 1_000_000.0),
        ];

        let table = render_summary(&ranked, 2);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("http"));
        assert!(lines[1].ends_with("3.000"));
        assert!(lines[2].contains("fs"));
        assert!(lines[3].contains("1 more"));
    }

    #[test]
    fn test_render_summary_aligns_columns() {
        let ranked = vec![
            DurationRecord::new("child_process", 1_500_000.0),
            DurationRecord::new("fs", 250_000.0),
        ];

        let table = render_summary(&ranked, 5);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert!(lines[1].ends_with("1.500"));
        assert!(lines[2].ends_with("0.250"));
        assert!(!table.ends_with('\n'));
    }

    #[test]
    fn test_render_summary_empty() {
        let table = render_summary(&[], 5);
        assert_eq!(table.lines().count(), 1);
    }
}
