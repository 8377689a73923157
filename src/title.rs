/// Author used when a title carries no `(Author)` suffix.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Book and author decomposed from a title line such as `Dune (Frank Herbert)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInfo {
    pub book: String,
    pub author: String,
}

impl TitleInfo {
    /// Split a normalized title on its first `(` and first `)`.
    ///
    /// The book is everything before the `(` without the single space that
    /// conventionally precedes it; the author is everything between the two
    /// parentheses. Titles that don't follow this convention (missing or
    /// misordered parentheses, empty book or author) fall back to the whole
    /// title as book and [`UNKNOWN_AUTHOR`].
    pub fn from_title(title: &str) -> Self {
        Self::split_parenthesized(title).unwrap_or_else(|| Self {
            book: title.to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
        })
    }

    fn split_parenthesized(title: &str) -> Option<Self> {
        let open = title.find('(')?;
        let close = title.find(')')?;
        if close < open {
            return None;
        }

        let before = &title[..open];
        let book = before.strip_suffix(' ').unwrap_or(before);
        let author = &title[open + 1..close];

        if book.is_empty() || author.is_empty() {
            return None;
        }

        Some(Self {
            book: book.to_string(),
            author: author.to_string(),
        })
    }
}
