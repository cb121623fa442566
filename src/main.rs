use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palettepull::models::AppConfig;
use palettepull::report::{outcome_line, MISSING_ARGUMENT};
use palettepull::services::{PalettePipeline, PaletteRun};

#[derive(Parser)]
#[command(name = "palettepull", version)]
#[command(about = "Extract the distinct colours of an image or a directory tree into a sorted palette PNG")]
struct Cli {
    /// Image file or directory to pull colours from
    source: PathBuf,
}

fn main() {
    // Every outcome is reported as one line; failures do not change the exit status
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingRequiredArgument => {
                println!("{MISSING_ARGUMENT}");
                return;
            }
            _ => {
                let message = e.to_string();
                println!("{}", message.lines().next().unwrap_or(MISSING_ARGUMENT));
                return;
            }
        },
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palettepull=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    println!("{}", outcome_line(&run(&cli.source)));
}

fn run(source: &Path) -> anyhow::Result<PaletteRun> {
    let config = AppConfig::from_env();
    let pipeline = PalettePipeline::new(config);
    let report = pipeline.run(source)?;
    tracing::info!(
        files = report.stats.files_seen,
        colours = report.colours,
        width = report.width,
        height = report.height,
        "Palette complete"
    );
    Ok(report)
}
