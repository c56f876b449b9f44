//! Common utility functions shared across the codebase.

/// Converts a byte offset into a 1-based (line, column) pair.
///
/// Columns count characters, not bytes. Offsets past the end of the text are
/// clamped to the last position.
///
/// # Examples
///
/// ```
/// use reslint::utils::line_col;
///
/// assert_eq!(line_col("abc", 0), (1, 1));
/// assert_eq!(line_col("a\nbc", 2), (2, 1));
/// assert_eq!(line_col("a\nbc", 3), (2, 2));
/// ```
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

/// Returns the full text of the line containing `offset`, without the
/// trailing newline.
pub fn line_at(text: &str, offset: usize) -> &str {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let start = text[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = text[offset..]
        .find('\n')
        .map(|i| offset + i)
        .unwrap_or(text.len());
    text[start..end].trim_end_matches('\r')
}

/// Strips a trailing `.xml` extension from a file name, if present.
pub fn xml_stem(file_name: &str) -> &str {
    file_name.strip_suffix(".xml").unwrap_or(file_name)
}
