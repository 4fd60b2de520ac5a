//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the workload and runs the measurement scan
//! - runs model fitting + selection
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Cli, Command, PlotArgs, RunArgs};
use crate::domain::{FitResult, ProbeConfig, SampleResidual};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `bigo` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => handle_run(args),
        Command::List => handle_list(),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_run(args: RunArgs) -> Result<(), AppError> {
    let config = probe_config_from_args(&args);
    let run = pipeline::run_probe(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(&run.samples, &run.estimate, &config)
    );

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &run.residuals,
            &run.estimate.best,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_samples {
        crate::io::write_samples_csv(path, &run.residuals)?;
    }
    if let Some(path) = &config.export_run {
        crate::io::write_run_json(path, &run.samples, &run.estimate, &config)?;
    }
    if config.debug_bundle {
        let path = crate::debug::write_debug_bundle(&run.samples, &run.estimate, &config)?;
        println!("Debug bundle written to {}", path.display());
    }

    Ok(())
}

fn handle_list() -> Result<(), AppError> {
    println!("Registered workloads:");
    for (name, description) in crate::bench::names() {
        println!("  {name:<10} {description}");
    }
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let run = crate::io::read_run_json(&args.run)?;

    // Rebuild per-sample fitted values from the saved model.
    let fit = FitResult {
        model: run.model.clone(),
        quality: run.quality.clone(),
    };
    let residuals: Vec<SampleResidual> = run
        .samples
        .size
        .iter()
        .zip(run.samples.time_secs.iter())
        .map(|(&size, &time)| {
            let fitted = crate::models::predict(fit.model.kind, size as f64, &fit.model.coeffs);
            SampleResidual {
                size,
                time,
                fitted,
                residual: time - fitted,
            }
        })
        .collect();

    let plot = crate::plot::render_ascii_plot(&residuals, &fit, args.width, args.height);
    println!("{plot}");
    Ok(())
}

pub fn probe_config_from_args(args: &RunArgs) -> ProbeConfig {
    ProbeConfig {
        workload: args.workload.clone(),
        seed: args.seed,
        repetitions: args.reps,
        max_size: args.max_size,
        max_time_secs: args.max_time,
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_samples: args.export.clone(),
        export_run: args.export_run.clone(),
        debug_bundle: args.debug_bundle,
    }
}
