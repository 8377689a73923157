use anyhow::Result;
use clap::{ArgAction, Parser};
use clippings::{ClippingsError, OutputConfig, PipelineConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "clippings")]
#[command(about = "Group e-reader highlight clippings by book")]
#[command(version)]
struct Args {
    /// Clippings export to read (e.g. "My Clippings.txt")
    #[arg(long)]
    input: PathBuf,

    /// Directory for clippings.json and the per-author text files
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Write a "Page <N>" line before each highlight
    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pages: bool,
}

impl From<Args> for PipelineConfig {
    fn from(args: Args) -> Self {
        Self {
            input: args.input,
            output: OutputConfig {
                output_dir: args.output,
                pages: args.pages,
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout only carries the user-facing result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let config = PipelineConfig::from(args);

    match clippings::run(&config).await {
        Ok(summary) => {
            println!(
                "Done! {} highlights from {} books written to {}",
                summary.highlights,
                summary.titles,
                config.output.output_dir.display()
            );
            if summary.parse.records_skipped > 0 || summary.parse.unparseable_pages > 0 {
                println!(
                    "  Skipped {} malformed records, {} highlights without a page number",
                    summary.parse.records_skipped, summary.parse.unparseable_pages
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ ClippingsError::InputNotReadable { .. }) => {
            error!("{}", e);
            eprintln!("Invalid input file: {}", config.input.display());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(anyhow::Error::new(e).context("Failed to generate output")),
    }
}
