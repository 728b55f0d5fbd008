//! `fws-conformance`: runs the self-check suite against one parameter set.
//!
//! Checks the rule table, expansion, extraction and search properties and
//! prints one line per check, or a JSON report with `--json`.
//!
//! **Usage:**
//! ```
//! fws-conformance [-n 10] [-a 5] [-b 6] [-c 7] [--config run.toml]
//!                 [--max-depth D] [--max-steps S] [--json]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use fws_clients::{init_tracing, ParamArgs};
use fws_conformance::{run_all, Severity};

/// Run the fractal word search self-check suite.
#[derive(Parser)]
#[command(
    name = "fws-conformance",
    about = "Verify rule, expansion, extraction and search properties"
)]
struct Args {
    #[command(flatten)]
    params: ParamArgs,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = args.params.resolve()?;
    let params = config.params()?;
    let report = run_all(params, config.limits()?);

    let passed = report.count(Severity::Pass);
    let warned = report.count(Severity::Warning);
    let failed = report.failure_count();

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        println!("Fractal Word Search Self-Check ({})", params);
        println!("==========================================");
        println!();

        for result in &report.results {
            println!("[{}] {}: {}", result.severity.tag(), result.check, result.message);
            for detail in &result.details {
                println!("       {}", detail);
            }
        }

        println!();
        println!(
            "Summary: {} passed, {} warnings, {} failed",
            passed, warned, failed
        );
    }

    if failed > 0 {
        eprintln!("Self-check FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    if !args.json {
        println!("Self-check PASSED.");
    }
    Ok(())
}
