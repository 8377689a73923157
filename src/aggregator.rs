use crate::parser::{parse_record, ParsedClipping};
use crate::splitter::split_records;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A single highlight within a book.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Page number; serialized as `null` when the export had none we could read
    pub page: Option<u32>,
    pub text: String,
}

/// Highlights grouped by normalized title.
///
/// Keys are kept sorted so the JSON index is byte-identical across runs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct HighlightsMap {
    books: BTreeMap<String, Vec<Highlight>>,
}

/// Counters collected while building a [`HighlightsMap`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Raw blocks produced by the splitter, artifacts included
    pub records_seen: u64,
    pub records_parsed: u64,
    /// Blocks dropped as malformed
    pub records_skipped: u64,
    /// Parsed records whose page could not be read
    pub unparseable_pages: u64,
}

impl HighlightsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clipping to its title's bucket.
    ///
    /// Every earlier highlight whose text is contained in the new text is
    /// dropped first: the device re-emits a highlight each time the selection
    /// is extended, and the final, longest version arrives last. The reverse
    /// does not apply; a later text contained in an earlier one is kept.
    pub fn insert(&mut self, clipping: ParsedClipping) {
        let ParsedClipping { title, page, text } = clipping;
        let bucket = self.books.entry(title).or_default();

        bucket.retain(|existing| !text.contains(existing.text.as_str()));
        bucket.push(Highlight { page, text });
    }

    /// Sort every bucket by page.
    ///
    /// Stable, so equal pages keep export order. Highlights without a page go
    /// after all numbered ones.
    pub fn finalize(&mut self) {
        for highlights in self.books.values_mut() {
            highlights.sort_by(|a, b| compare_pages(a.page, b.page));
        }
    }

    pub fn get(&self, title: &str) -> Option<&[Highlight]> {
        self.books.get(title).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Highlight])> {
        self.books
            .iter()
            .map(|(title, highlights)| (title.as_str(), highlights.as_slice()))
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Total highlights across all titles.
    pub fn highlight_count(&self) -> usize {
        self.books.values().map(Vec::len).sum()
    }
}

fn compare_pages(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Parse a whole clippings export into a finalized [`HighlightsMap`].
pub fn build_highlights_map(content: &str) -> (HighlightsMap, ParseStats) {
    let mut map = HighlightsMap::new();
    let mut stats = ParseStats::default();

    for (index, record) in split_records(content).enumerate() {
        stats.records_seen += 1;

        match parse_record(record) {
            Some(clipping) => {
                stats.records_parsed += 1;
                if clipping.page.is_none() {
                    debug!("Record {} has no readable page: {:?}", index, clipping.title);
                    stats.unparseable_pages += 1;
                }
                map.insert(clipping);
            }
            None => {
                debug!("Skipping malformed record {}", index);
                stats.records_skipped += 1;
            }
        }
    }

    map.finalize();

    info!(
        "Parsed {} of {} records into {} titles ({} skipped, {} without page)",
        stats.records_parsed,
        stats.records_seen,
        map.len(),
        stats.records_skipped,
        stats.unparseable_pages
    );

    (map, stats)
}
