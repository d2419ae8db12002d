//! Import command implementation
//!
//! The complete import workflow: read the sheet, normalize each row,
//! assemble each normalized record into a catalog document, then publish
//! the documents when requested. Failure isolation is per record at every
//! stage; only reading the sheet itself is fatal to the run.

use crate::app::services::catalog_publisher::{CatalogPublisher, PublishStats};
use crate::app::services::record_normalizer::{ImportStats, RecordNormalizer};
use crate::app::services::schema_builder::{MetadataDocument, assemble_document};
use crate::app::services::sheet_reader;
use crate::cli::args::ImportArgs;
use crate::config::Config;
use crate::{Error, Result};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use super::shared::{create_progress_bar, print_report, setup_logging};

/// Result of one import run
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Import pipeline statistics
    pub import: ImportStats,
    /// Publish statistics, present when publishing was requested
    pub publish: Option<PublishStats>,
}

/// Import command runner
///
/// Orchestrates the import workflow:
/// 1. Set up logging and validate arguments
/// 2. Read the master sheet into raw rows
/// 3. Normalize rows and assemble documents with per-record isolation
/// 4. Optionally write documents to JSON and publish them to the catalog
pub async fn run_import(args: ImportArgs) -> Result<ImportReport> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting MIMS import from {}", args.sheet_file.display());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args.to_config();

    // Read the sheet; no rows means nothing to do and is fatal to the run
    let rows = sheet_reader::read_rows(&args.sheet_file, args.sheet.as_deref())?;
    if rows.is_empty() {
        return Err(Error::sheet_read(
            args.sheet_file.display().to_string(),
            "sheet contains no data rows",
        ));
    }

    // Normalize every row, then assemble every surviving record
    let mut stats = ImportStats::new();
    let normalizer = RecordNormalizer::from_config(&config);

    let progress = if args.show_progress() {
        Some(create_progress_bar(rows.len() as u64, "Normalizing records"))
    } else {
        None
    };

    let records = normalizer.normalize_rows(&rows, &mut stats, progress.as_ref());

    if let Some(pb) = progress {
        pb.finish_with_message(format!("Normalized {} records", records.len()));
    }

    let documents = assemble_documents(&records, &config, &mut stats);

    info!("{}", stats.summary());

    if let Some(output_json) = &args.output_json {
        write_documents_json(output_json, &documents)?;
        info!(
            "Wrote {} documents to {}",
            documents.len(),
            output_json.display()
        );
    }

    // Publish when requested; per-document failures do not stop the batch
    let publish_stats = if args.publish && !args.dry_run {
        Some(publish_documents(&documents, &config).await?)
    } else {
        if args.dry_run {
            info!("Dry run: skipping publish of {} documents", documents.len());
        }
        None
    };

    if !args.quiet {
        print_report(&stats, publish_stats.as_ref());
        println!(
            "Finished in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(ImportReport {
        import: stats,
        publish: publish_stats,
    })
}

/// Assemble documents from normalized records with per-record isolation
fn assemble_documents(
    records: &[crate::app::models::NormalizedRecord],
    config: &Config,
    stats: &mut ImportStats,
) -> Vec<MetadataDocument> {
    let mut documents = Vec::with_capacity(records.len());

    for record in records {
        match assemble_document(record, &config.timestamp_offset) {
            Ok(document) => {
                stats.assembled += 1;
                documents.push(document);
            }
            Err(assembly_error) => {
                let message = format!(
                    "Record id {}: document assembly failed: {}",
                    record.file_identifier, assembly_error
                );
                warn!("{}", message);
                stats.record_skip(message);
            }
        }
    }

    documents
}

/// Publish assembled documents, aggregating outcomes into explicit stats
async fn publish_documents(
    documents: &[MetadataDocument],
    config: &Config,
) -> Result<PublishStats> {
    let publisher = CatalogPublisher::new(config.publisher.clone())?;
    let mut stats = PublishStats::new();

    info!("Publishing {} documents to the catalog", documents.len());

    for document in documents {
        stats.attempted += 1;

        match publisher.add_record(document).await {
            Ok(outcome) => {
                if !outcome.validation_errors.is_empty() {
                    warn!(
                        "Record id {} added with validation errors: {}",
                        document.file_identifier,
                        outcome.validation_errors.join(", ")
                    );
                }
                stats.record_added(&outcome);

                if config.publisher.advance_workflow {
                    match publisher
                        .set_workflow_state(
                            &document.file_identifier,
                            &config.publisher.workflow_state,
                        )
                        .await
                    {
                        Ok(()) => stats.workflow_advanced += 1,
                        Err(workflow_error) => {
                            error!(
                                "Workflow advance failed for record id {}: {}",
                                document.file_identifier, workflow_error
                            );
                        }
                    }
                }
            }
            Err(publish_error) => {
                error!(
                    "Publish failed for record id {}: {}",
                    document.file_identifier, publish_error
                );
                stats.record_failure(&document.file_identifier, publish_error.to_string());
            }
        }
    }

    info!("{}", stats.summary());
    Ok(stats)
}

/// Write assembled documents to a JSON file
fn write_documents_json(path: &std::path::Path, documents: &[MetadataDocument]) -> Result<()> {
    let json = serde_json::to_string_pretty(documents)
        .map_err(|e| Error::configuration(format!("Cannot serialize documents: {}", e)))?;

    std::fs::write(path, json)
        .map_err(|e| Error::io(format!("Cannot write {}", path.display()), e))?;

    Ok(())
}
