mod config;
mod geo;
mod models;
mod output;
mod processor;
mod source;

use clap::Parser;
use config::AppConfig;
use source::LineSource;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "trip-segmenter")]
#[command(about = "Split device location records into trips", long_about = None)]
struct Cli {
    /// CSV file of device_id,latitude,longitude,timestamp rows
    input: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let started = Instant::now();

    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .init();

    info!("Segmenting trips from {}", cli.input.display());

    let source = LineSource::open(&cli.input).await?;
    let outcome = processor::run_pipeline(source.lines());

    output::write_outputs(&config, &outcome).await?;

    for line in output::summary::summary_lines(&outcome) {
        println!("{}", line);
    }
    println!("Completed in {:.2?}", started.elapsed());

    Ok(())
}
