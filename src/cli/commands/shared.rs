//! Shared components for CLI commands
//!
//! Logging setup, progress bars, and report printing used by the command
//! implementations.

use crate::Result;
use crate::app::services::catalog_publisher::PublishStats;
use crate::app::services::record_normalizer::ImportStats;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Set up structured logging for a command
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mims_importer={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar for batch operations
pub fn create_progress_bar(total: u64, operation: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(operation.to_string());
    pb
}

/// Print the human-readable batch report
pub fn print_report(import: &ImportStats, publish: Option<&PublishStats>) {
    println!();
    println!("{}", "Import report".bold());
    println!("  Rows read:            {}", import.rows_read);
    println!("  Records normalized:   {}", import.normalized);
    println!("  Documents assembled:  {}", import.assembled);

    let skipped = format!("  Records skipped:      {}", import.skipped);
    if import.skipped > 0 {
        println!("{}", skipped.yellow());
    } else {
        println!("{}", skipped);
    }

    if !import.diagnostics.is_empty() {
        println!();
        println!("{}", "Skipped records".bold());
        for diagnostic in &import.diagnostics {
            println!("  {}", diagnostic.yellow());
        }
    }

    if let Some(publish) = publish {
        println!();
        println!("{}", "Publish report".bold());
        println!("  Documents attempted:  {}", publish.attempted);
        println!(
            "  Documents added:      {}",
            publish.added.to_string().green()
        );
        println!("  Validation errors:    {}", publish.validation_errors);
        println!("  Workflow advanced:    {}", publish.workflow_advanced);

        if publish.failed > 0 {
            println!(
                "  Documents failed:     {}",
                publish.failed.to_string().red()
            );
            for failure in &publish.failures {
                println!("  {}", failure.red());
            }
        }
    }

    println!();
    let rate_line = format!("Success rate: {:.1}%", import.success_rate());
    if import.is_successful() {
        println!("{}", rate_line.green());
    } else {
        println!("{}", rate_line.yellow());
    }
}
