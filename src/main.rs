//! breqd CLI
//!
//! Measures builtin module load times of a Node.js runtime and writes
//! them as a Trace Event Format file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use breqd::commands::{
    convert_file, display_version, execute_measure, list_units, probe_unit, rank_file,
    validate_args, validate_trace_file, ConvertArgs, MeasureArgs,
};
use breqd::utils::config::{DEFAULT_CYCLES, DEFAULT_RUNTIME, DEFAULT_TOP, RUNTIME_ENV_VAR};

/// breqd - builtin module load time profiler
#[derive(Parser, Debug)]
#[command(name = "breqd")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Measure every builtin module and write a trace file
    Measure {
        /// Runtime executable
        #[arg(short, long, env = RUNTIME_ENV_VAR, default_value = DEFAULT_RUNTIME)]
        runtime: PathBuf,

        /// Probe runs averaged per module
        #[arg(short, long, default_value_t = DEFAULT_CYCLES)]
        cycles: u32,

        /// Directory for the generated trace file
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Trace file path (overrides the generated name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write the ranked durations as JSON
        #[arg(long)]
        rankings: Option<PathBuf>,

        /// Print the ranking table to stdout
        #[arg(long)]
        summary: bool,

        /// Rows shown in the ranking table
        #[arg(long, default_value_t = DEFAULT_TOP)]
        top: usize,
    },

    /// List the builtin modules of the runtime
    List {
        /// Runtime executable
        #[arg(short, long, env = RUNTIME_ENV_VAR, default_value = DEFAULT_RUNTIME)]
        runtime: PathBuf,
    },

    /// Measure a single module
    Probe {
        /// Module name, e.g. `fs` or `node:test`
        unit: String,

        /// Runtime executable
        #[arg(short, long, env = RUNTIME_ENV_VAR, default_value = DEFAULT_RUNTIME)]
        runtime: PathBuf,

        /// Probe runs to average
        #[arg(short, long, default_value_t = DEFAULT_CYCLES)]
        cycles: u32,
    },

    /// Rank a saved durations JSON object
    Rank {
        /// Path to `{ "<module>": <ns>, ... }` JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Write the rankings here instead of printing them
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a saved rankings JSON array into a trace file
    Convert {
        /// Path to rankings JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output trace file
        #[arg(short, long, default_value = "breqd-trace.json")]
        output: PathBuf,
    },

    /// Validate a trace JSON file
    Validate {
        /// Path to trace JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Measure {
            runtime,
            cycles,
            output_dir,
            output,
            rankings,
            summary,
            top,
        } => {
            let args = MeasureArgs {
                runtime,
                cycles,
                output_dir,
                output,
                rankings,
                print_summary: summary,
                top,
            };

            // Validate args first
            validate_args(&args)?;

            execute_measure(args)?;
        }

        Commands::List { runtime } => {
            list_units(&runtime)?;
        }

        Commands::Probe {
            unit,
            runtime,
            cycles,
        } => {
            probe_unit(&runtime, &unit, cycles)?;
        }

        Commands::Rank { input, output } => {
            rank_file(&input, output.as_deref())?;
        }

        Commands::Convert { input, output } => {
            convert_file(&ConvertArgs { input, output })?;
        }

        Commands::Validate { file } => {
            validate_trace_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
