use crate::normalization::strip_non_ascii;

/// Character offset of the page number inside the location line.
///
/// The export writes a fixed-width prefix before the number, e.g.
/// `- Your Highlight on page 12 | Location 180-182 | Added on ...`.
/// Everything before this offset is that prefix.
pub const PAGE_NUMBER_OFFSET: usize = 24;

/// Separator between the fields of the location line.
const LOCATION_FIELD_SEPARATOR: char = '|';

/// Line terminator of the export. A bare `\n` belongs to the highlight text.
const LINE_TERMINATOR: &str = "\r\n";

/// One clipping extracted from a raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClipping {
    /// Title line with non-ASCII characters removed
    pub title: String,
    /// Page number, `None` when the location line could not be parsed
    pub page: Option<u32>,
    /// Highlight text, verbatim
    pub text: String,
}

/// Parse one raw record into a clipping.
///
/// Returns `None` for structural artifacts of the export: records with fewer
/// than three non-empty lines, or whose title is empty once normalized.
pub fn parse_record(record: &str) -> Option<ParsedClipping> {
    let mut lines = record
        .split(LINE_TERMINATOR)
        .filter(|line| !line.is_empty());

    let raw_title = lines.next()?;
    let location = lines.next()?;
    let text = lines.next()?;

    let title = strip_non_ascii(raw_title);
    if title.is_empty() {
        return None;
    }

    Some(ParsedClipping {
        title,
        page: parse_page_number(location),
        text: text.to_string(),
    })
}

/// Extract the page number from a location line.
///
/// Takes the first `|` field, skips [`PAGE_NUMBER_OFFSET`] characters and any
/// whitespace after them, then reads the leading run of ASCII digits.
/// Returns `None` if the line is too short, has no digits there, or the
/// number does not fit in a `u32`.
pub fn parse_page_number(location: &str) -> Option<u32> {
    let page_info = location
        .split(LOCATION_FIELD_SEPARATOR)
        .next()
        .unwrap_or_default();

    // Offset is counted in characters; the prefix can be localized.
    let (byte_offset, _) = page_info.char_indices().nth(PAGE_NUMBER_OFFSET)?;
    let candidate = page_info[byte_offset..].trim_start();

    let digits_end = candidate
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(candidate.len());

    if digits_end == 0 {
        return None;
    }

    candidate[..digits_end].parse().ok()
}
