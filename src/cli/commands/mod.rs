//! Command implementations for the MIMS importer CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and error handling for the CLI interface.

pub mod import;
pub mod shared;

// Re-export the main report type
pub use import::ImportReport;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the MIMS importer
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<ImportReport> {
    match args.get_command() {
        Commands::Import(import_args) => import::run_import(import_args).await,
    }
}
