//! Command-line parsing for the complexity probe.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the measurement/fitting code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bigo", version, about = "Empirical asymptotic-complexity probe")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Measure a workload over growing sizes, estimate its complexity, and
    /// print diagnostics/plots.
    Run(RunArgs),
    /// List registered workloads.
    List,
    /// Plot a previously exported run JSON.
    Plot(PlotArgs),
}

/// Options for a probe run.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Registry name of the workload to measure (see `bigo list`).
    pub workload: String,

    /// Random seed for workload input generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Operation executions per timed batch.
    #[arg(long, default_value_t = 10)]
    pub reps: usize,

    /// Largest input size to scan.
    #[arg(long, default_value_t = 999)]
    pub max_size: u64,

    /// Cumulative measured-time ceiling in seconds.
    #[arg(long, default_value_t = 30.0)]
    pub max_time: f64,

    /// Disable the terminal plot (rendered by default).
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export per-sample results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the run (model + samples) to JSON.
    #[arg(long = "export-run")]
    pub export_run: Option<PathBuf>,

    /// Write a markdown diagnostics bundle under ./debug/.
    #[arg(long)]
    pub debug_bundle: bool,
}

/// Options for plotting a saved run.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Run JSON file produced by `bigo run --export-run`.
    #[arg(long, value_name = "JSON")]
    pub run: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(argv: &[&str]) -> RunArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Run(args) => args,
            other => panic!("expected run subcommand, got {other:?}"),
        }
    }

    #[test]
    fn run_plots_by_default() {
        let args = run_args(&["bigo", "run", "sort"]);
        let config = crate::app::probe_config_from_args(&args);
        assert!(config.plot);
    }

    #[test]
    fn no_plot_disables_the_terminal_plot() {
        let args = run_args(&["bigo", "run", "sort", "--no-plot"]);
        let config = crate::app::probe_config_from_args(&args);
        assert!(!config.plot);
    }

    #[test]
    fn run_defaults_match_the_documented_scan() {
        let args = run_args(&["bigo", "run", "sum"]);
        assert_eq!(args.seed, 42);
        assert_eq!(args.reps, 10);
        assert_eq!(args.max_size, 999);
        assert_eq!(args.max_time, 30.0);
    }
}
