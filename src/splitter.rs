/// Literal line the device writes between two clippings.
pub const RECORD_SEPARATOR: &str = "==========";

/// Split a clippings export into raw records.
///
/// Lazy; empty or truncated blocks (typically the one after the final
/// separator) are yielded as-is and left for the parser to reject.
pub fn split_records(content: &str) -> impl Iterator<Item = &str> {
    content.split(RECORD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_trailing_artifact() {
        let content = "A\r\nmeta\r\n\r\none\r\n==========\r\nB\r\nmeta\r\n\r\ntwo\r\n==========\r\n";
        let records: Vec<&str> = split_records(content).collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].starts_with("A\r\n"));
        assert!(records[1].starts_with("\r\nB\r\n"));
        assert_eq!(records[2], "\r\n");
    }

    #[test]
    fn test_split_without_separator() {
        let records: Vec<&str> = split_records("just text").collect();
        assert_eq!(records, vec!["just text"]);
    }

    #[test]
    fn test_split_empty_input() {
        let records: Vec<&str> = split_records("").collect();
        assert_eq!(records, vec![""]);
    }
}
