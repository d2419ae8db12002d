use clap::Parser;
use mims_importer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(report) => {
            // Partial batches succeed, but a run where nothing was imported
            // should fail loudly for scripting use
            if report.import.rows_read > 0 && report.import.assembled == 0 {
                eprintln!("Error: no records could be imported");
                process::exit(1);
            }
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("MIMS Importer - Metadata Master Sheet to Catalog Converter");
    println!("==========================================================");
    println!();
    println!("Convert MIMS metadata master sheet records into catalog metadata");
    println!("documents and publish them to the catalog API.");
    println!();
    println!("USAGE:");
    println!("    mims-importer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Import a master sheet and assemble catalog documents");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Assemble documents from a workbook without publishing:");
    println!("    mims-importer import --sheet-file MIMS.Metadata.Master.Sheet.xlsx \\");
    println!("                         --sheet CKAN_Geographic --dry-run");
    println!();
    println!("    # Import and write the assembled documents to a file:");
    println!("    mims-importer import -f sheet.xlsx -o documents.json");
    println!();
    println!("    # Import and publish to the catalog:");
    println!("    CATALOG_API_KEY=... mims-importer import -f sheet.xlsx --publish \\");
    println!("                         --organization dea --collection sadco-test");
    println!();
    println!("For detailed help on any command, use:");
    println!("    mims-importer import --help");
}
