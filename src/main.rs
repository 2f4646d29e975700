use anyhow::Context;
use maxterra_export::utils::logger;
use maxterra_export::{savings_report, CsvExporter, ExportConfig, LocalStorage};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger();

    let config = ExportConfig::default();
    let output_path = config.output_path.clone();
    let exporter = CsvExporter::new(LocalStorage::default(), config);

    let record = savings_report();
    tracing::debug!("Exporting savings report with {} fields", record.len());

    let written = exporter
        .export_default(&record)
        .inspect_err(|e| tracing::error!("❌ Export failed: {}", e))
        .with_context(|| {
            format!(
                "failed to export savings report to {}",
                output_path.display()
            )
        })?;

    println!("CSV file '{}' created successfully.", written.display());
    Ok(())
}
