use crate::config::AppConfig;
use crate::processor::PipelineOutcome;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub mod color;
pub mod geojson_doc;
pub mod reject_log;
pub mod summary;

async fn write_file(path: &Path, contents: String) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Writes the trip document and the reject log.
pub async fn write_outputs(config: &AppConfig, outcome: &PipelineOutcome) -> Result<()> {
    let document = geojson_doc::render(&outcome.trips)?;
    write_file(&config.trips_output_path, document).await?;
    info!(
        "Wrote {} trips to {}",
        outcome.trips.len(),
        config.trips_output_path.display()
    );

    write_file(
        &config.rejects_output_path,
        reject_log::render(&outcome.rejections),
    )
    .await?;
    info!(
        "Wrote {} rejections to {}",
        outcome.rejections.len(),
        config.rejects_output_path.display()
    );

    Ok(())
}
