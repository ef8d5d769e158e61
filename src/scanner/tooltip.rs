//! Tooltip content for point queries.
//!
//! Rendering policy differs from annotation mode in exactly one way: a
//! reference whose key is missing from the index produces an explicit
//! "not found" body instead of being omitted.

use crate::index::TranslationEntry;

/// Render the tooltip body for a reference at a position.
///
/// Resolved entries get the key as a heading, one line per non-empty locale
/// value, then module/section/file metadata lines, each omitted when absent.
/// A key with no non-empty value at all gets a single placeholder line.
pub fn render_tooltip(key: &str, entry: Option<&TranslationEntry>) -> String {
    let mut lines = vec![key.to_string()];

    let Some(entry) = entry else {
        lines.push("⚠ Translation not found".to_string());
        return lines.join("\n");
    };

    if entry.is_untranslated() {
        lines.push("No translations available".to_string());
    } else {
        if !entry.en.is_empty() {
            lines.push(format!("English: {}", entry.en));
        }
        if !entry.ar.is_empty() {
            lines.push(format!("العربية: {}", entry.ar));
        }
    }

    if let Some(module) = &entry.module {
        lines.push(format!("Module: {module}"));
    }
    if let Some(section) = &entry.section {
        lines.push(format!("Section: {section}"));
    }
    if let Some(file_path) = &entry.file_path {
        lines.push(format!("File: {file_path}"));
    }

    lines.join("\n")
}
