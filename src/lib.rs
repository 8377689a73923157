pub mod aggregator;
pub mod error;
pub mod materializer;
pub mod normalization;
pub mod parser;
pub mod pipeline;
pub mod reader;
pub mod splitter;
pub mod title;

// Re-export main types for convenient access
pub use aggregator::{build_highlights_map, Highlight, HighlightsMap, ParseStats};
pub use error::ClippingsError;
pub use parser::{parse_page_number, parse_record, ParsedClipping, PAGE_NUMBER_OFFSET};
pub use splitter::{split_records, RECORD_SEPARATOR};
pub use title::{TitleInfo, UNKNOWN_AUTHOR};

// Re-export output and pipeline entry points
pub use materializer::{materialize, render_title_file, MaterializeSummary, OutputConfig, INDEX_FILE_NAME};
pub use pipeline::{run, PipelineConfig, RunSummary};
