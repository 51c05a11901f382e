//! # Fractum Report
//!
//! Runs a batch of generator jobs and prints what each one produced.
//!
//! ```bash
//! # All built-in presets
//! ./fractum_report
//!
//! # A job file
//! ./fractum_report demos/classic.toml
//! ```
//!
//! Geometry is only measured, never written out.

use std::process::ExitCode;

use fractum::procedural::BatchOutcome;
use fractum::{presets, run_batch, JobFile, NamedJob};

fn load_jobs() -> Result<(String, Vec<NamedJob>), String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let file = JobFile::from_file(&path).map_err(|e| format!("{path}: {e}"))?;
            Ok((path, file.jobs))
        }
        None => Ok(("built-in presets".to_string(), presets::all())),
    }
}

fn print_outcome(outcome: &BatchOutcome) -> bool {
    match &outcome.result {
        Ok(geometry) => {
            let bounds = geometry.bounds().map_or_else(
                || "-".to_string(),
                |b| {
                    format!(
                        "[{:.3}, {:.3}] x [{:.3}, {:.3}]",
                        b.min.x, b.max.x, b.min.y, b.max.y
                    )
                },
            );
            println!(
                "  ✓ {:<24} {:>9} {:>9}  {:<40} {:>10.2?}",
                outcome.name,
                geometry.kind(),
                geometry.len(),
                bounds,
                outcome.elapsed
            );
            true
        }
        Err(err) => {
            println!("  ✗ {:<24} {}", outcome.name, err);
            false
        }
    }
}

fn main() -> ExitCode {
    println!("═══════════════════════════════════════════════════════════════════");
    println!("                       FRACTUM REPORT");
    println!("═══════════════════════════════════════════════════════════════════");

    let (source, jobs) = match load_jobs() {
        Ok(loaded) => loaded,
        Err(message) => {
            eprintln!("  ✗ FATAL: {message}");
            return ExitCode::FAILURE;
        }
    };

    println!("  Source: {source}");
    println!("  Jobs:   {}", jobs.len());
    println!();

    let outcomes = run_batch(&jobs);
    let failed = outcomes.iter().filter(|o| !print_outcome(o)).count();

    println!();
    println!("═══════════════════════════════════════════════════════════════════");
    println!("  {} succeeded, {} failed", outcomes.len() - failed, failed);
    println!("═══════════════════════════════════════════════════════════════════");

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
