//! Output formatting and printing utilities.
//!
//! Annotation rows and tooltips go to stdout; load diagnostics and summary
//! lines go to stderr so stdout stays machine-consumable.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::index::LoadOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Marker printed before an inline annotation label.
pub const LABEL_MARK: &str = "\u{1F4AC}"; // 💬

/// One printable annotation: a `file:line:col` location and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRow {
    pub location: String,
    pub label: String,
}

/// Print index-load diagnostics and the key-count summary to stderr.
///
/// Warnings are shown only in verbose mode; the summary line always prints,
/// and an empty index is the "no translations found" case the end user needs
/// to see rather than an error.
pub fn print_load_summary(outcome: &LoadOutcome, key_count: usize, root: &Path, verbose: bool) {
    let mut stderr = io::stderr().lock();

    if verbose {
        for warning in &outcome.warnings {
            let _ = writeln!(stderr, "{} {}", "warning:".yellow().bold(), warning);
        }
        let _ = writeln!(
            stderr,
            "parsed {} lang file(s) in {} module(s)",
            outcome.files, outcome.modules
        );
    }

    if key_count == 0 {
        let _ = writeln!(
            stderr,
            "{} no translations found under {} (expected modules/*/view/lang/lang.*.conf)",
            FAILURE_MARK.yellow(),
            root.display()
        );
    } else {
        let _ = writeln!(
            stderr,
            "{} indexed {} translation key(s) from {} module(s)",
            SUCCESS_MARK.green(),
            key_count,
            outcome.modules
        );
    }
}

/// Print annotation rows with the location column aligned.
pub fn print_annotations(rows: &[AnnotationRow]) {
    print_annotations_to(rows, &mut io::stdout().lock());
}

pub fn print_annotations_to<W: Write>(rows: &[AnnotationRow], writer: &mut W) {
    let width = rows
        .iter()
        .map(|row| row.location.width())
        .max()
        .unwrap_or(0);

    for row in rows {
        let padding = " ".repeat(width - row.location.width());
        let _ = writeln!(
            writer,
            "{}{}  {} {}",
            row.location.bold(),
            padding,
            LABEL_MARK,
            row.label.cyan()
        );
    }
}

/// Summary line for the annotate command, on stderr like the load summary.
pub fn print_annotate_summary(annotation_count: usize, file_count: usize) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {} annotation(s) in {} file(s)",
        SUCCESS_MARK.green(),
        annotation_count,
        file_count
    );
}
