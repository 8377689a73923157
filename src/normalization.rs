// WHY: some exporters prefix titles with BOMs and directionality marks that are
// invisible but would split one book into several map keys

/// Remove every character whose code point is 0x80 or above.
pub fn strip_non_ascii(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    strip_non_ascii_into(text, &mut result);
    result
}

/// Same as [`strip_non_ascii`], writing into a reusable buffer.
pub fn strip_non_ascii_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());
    buffer.extend(text.chars().filter(char::is_ascii));
}
