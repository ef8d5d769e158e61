//! Common utility functions shared across the codebase.

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0]; // Line 1 starts at offset 0
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Translate a byte offset into a 1-based (line, column) pair.
///
/// The column counts characters from the line start, so multi-byte text
/// before the offset does not inflate it.
///
/// # Examples
///
/// ```
/// use langconf::utils::{build_line_index, offset_to_position};
///
/// let content = "ab\ncd";
/// let index = build_line_index(content);
/// assert_eq!(offset_to_position(content, &index, 0), (1, 1));
/// assert_eq!(offset_to_position(content, &index, 4), (2, 2));
/// ```
pub fn offset_to_position(content: &str, line_index: &[usize], offset: usize) -> (usize, usize) {
    let line = match line_index.binary_search(&offset) {
        Ok(line) => line + 1, // Exact match at line start
        Err(line) => line,    // Falls within this line
    };
    let line_start = line_index[line - 1];
    let column = content[line_start..offset.min(content.len())].chars().count() + 1;
    (line, column)
}
