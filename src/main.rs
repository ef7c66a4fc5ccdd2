//! `plotkit` CLI: turn a JSON shape list into ordered polylines and a
//! motion plan.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use plotkit::{init_logging, run_pipeline, PipelineConfig, Shape, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(version, about = "Prepare vector paths for pen plotting")]
struct Cli {
    /// JSON file holding an array of shapes
    input: PathBuf,

    /// Job settings (.json or .toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only write statistics and plan totals
    #[arg(long)]
    stats_only: bool,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;
    info!("plotkit {} (built {})", VERSION, BUILD_DATE);

    let config = match &cli.config {
        Some(path) => PipelineConfig::load_from_file(path)?,
        None => PipelineConfig::default(),
    };

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read shapes from {}", cli.input.display()))?;
    let shapes: Vec<Shape> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid shape list in {}", cli.input.display()))?;

    let output = run_pipeline(&shapes, &config)
        .with_context(|| format!("Failed to process {}", cli.input.display()))?;

    let json = if cli.stats_only {
        serde_json::to_string_pretty(&output.summary())
    } else {
        serde_json::to_string_pretty(&output)
    }
    .context("Failed to serialize result")?;

    match &cli.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
