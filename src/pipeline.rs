use crate::aggregator::{build_highlights_map, HighlightsMap, ParseStats};
use crate::error::Result;
use crate::materializer::{materialize, MaterializeSummary, OutputConfig};
use crate::reader::read_clippings;
use std::path::PathBuf;
use tracing::info;

/// Configuration for one run of the tool
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Clippings export to read
    pub input: PathBuf,
    pub output: OutputConfig,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub parse: ParseStats,
    pub titles: usize,
    pub highlights: usize,
    pub output: MaterializeSummary,
}

/// Read, parse and aggregate the input without touching the output directory.
pub async fn load_highlights(config: &PipelineConfig) -> Result<(HighlightsMap, ParseStats)> {
    let content = read_clippings(&config.input).await?;
    Ok(build_highlights_map(&content))
}

/// Run the full pipeline: read the export, group highlights, write the tree.
///
/// Nothing is written when the input cannot be read.
pub async fn run(config: &PipelineConfig) -> Result<RunSummary> {
    info!("Processing clippings from {}", config.input.display());

    let (map, parse) = load_highlights(config).await?;
    let output = materialize(&map, &config.output).await?;

    Ok(RunSummary {
        parse,
        titles: map.len(),
        highlights: map.highlight_count(),
        output,
    })
}
