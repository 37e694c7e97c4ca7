//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_monitor` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Console report rendering
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_monitor::initialization::{init_crypto_provider, init_logger_with};
use domain_monitor::report::render_report;
use domain_monitor::{run_monitor, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    match run_monitor(config).await {
        Ok(report) => {
            print!(
                "{}",
                render_report(&report.keyword, &report.discovered, &report.records)
            );
            println!(
                "Assessed {} of {} discovered domain{} in {:.1}s - results saved in {}",
                report.records.len(),
                report.discovered.len(),
                if report.discovered.len() == 1 { "" } else { "s" },
                report.elapsed_seconds,
                report.output_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_monitor error: {:#}", e);
            process::exit(1);
        }
    }
}
