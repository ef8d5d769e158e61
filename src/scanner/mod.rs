//! Reference scanner: finds localization-key references in document text and
//! resolves them against a [`TranslationIndex`].
//!
//! Two reference syntaxes are recognized in the same pass:
//!
//! - template syntax: `{#LNG_2964#}` / `{#LKP_5822#}`;
//! - call syntax: `$this->cLang('LNG_2964')` (any receiver; keys that do not
//!   carry an indexed prefix are discarded without a lookup).
//!
//! Matching is implemented once in [`find_references`]; the two consuming
//! modes differ only in fallback policy. Annotation mode silently omits
//! unresolved keys, tooltip mode reports them explicitly.
//!
//! Scanning is pure over an immutable text snapshot: no IO, no index
//! mutation, safe to fan out across files.

pub mod tooltip;

use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::index::{KEY_PREFIXES, TranslationEntry, TranslationIndex};

static TEMPLATE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{#(LNG_\d+|LKP_\d+)#\}").unwrap());

static CALL_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Receiver, a cLang call, a quoted key, then the closing paren or the
    // comma before further arguments.
    Regex::new(r#"\$?\w+(?:->|::|\.)cLang\(\s*['"]([A-Z_]+\d*)['"]\s*[),]"#).unwrap()
});

/// Which locale value(s) an annotation label shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    En,
    Ar,
    Both,
}

/// The syntax a reference was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Syntax {
    /// `{#KEY#}` — wins over [`Syntax::Call`] when both match at one offset.
    Template,
    /// `receiver->cLang('KEY')`.
    Call,
}

/// One localization-key reference found in a scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub key: String,
    /// Byte offset of the start of the full matched span.
    pub start: usize,
    /// Byte offset just past the full matched span.
    pub end: usize,
    pub syntax: Syntax,
}

/// A resolved annotation anchored immediately after its reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Byte offset (within the caller's coordinate space) the label anchors at.
    pub offset: usize,
    pub label: String,
}

/// Point-query result: the reference at a position, resolved or not.
///
/// `entry: None` means the reference exists but the key is not in the index,
/// which is distinct from no reference at the position at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub key: String,
    pub reference: Reference,
    pub entry: Option<&'a TranslationEntry>,
}

/// Find every reference in `text`, leftmost-first across both syntaxes.
///
/// Call-syntax matches whose key is not `LNG_`/`LKP_`-prefixed are dropped
/// before resolution. When both syntaxes match at the same start offset the
/// template match wins, and a match starting inside an already-accepted span
/// is dropped, so one stretch of text never produces two references.
pub fn find_references(text: &str) -> Vec<Reference> {
    let mut references: Vec<Reference> = Vec::new();

    for captures in TEMPLATE_KEY_REGEX.captures_iter(text) {
        let full = captures.get(0).unwrap();
        references.push(Reference {
            key: captures[1].to_string(),
            start: full.start(),
            end: full.end(),
            syntax: Syntax::Template,
        });
    }

    for captures in CALL_KEY_REGEX.captures_iter(text) {
        let key = &captures[1];
        if !KEY_PREFIXES.iter().any(|prefix| key.starts_with(prefix)) {
            continue;
        }
        let full = captures.get(0).unwrap();
        references.push(Reference {
            key: key.to_string(),
            start: full.start(),
            end: full.end(),
            syntax: Syntax::Call,
        });
    }

    dedupe_overlaps(references)
}

/// Overlap policy between the two syntaxes: matches are ordered
/// leftmost-first, template before call on an identical start offset, and a
/// match starting inside an already-accepted span is dropped.
fn dedupe_overlaps(mut references: Vec<Reference>) -> Vec<Reference> {
    references.sort_by_key(|r| (r.start, r.syntax));

    let mut accepted: Vec<Reference> = Vec::with_capacity(references.len());
    for reference in references {
        match accepted.last() {
            Some(previous) if reference.start < previous.end => {}
            _ => accepted.push(reference),
        }
    }
    accepted
}

/// Format an annotation label for one entry, or `None` when the configured
/// mode has nothing to show.
pub fn format_label(entry: &TranslationEntry, mode: DisplayMode) -> Option<String> {
    let label = match mode {
        DisplayMode::En => entry.en.clone(),
        DisplayMode::Ar => entry.ar.clone(),
        DisplayMode::Both => {
            let parts: Vec<&str> = [entry.en.as_str(), entry.ar.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect();
            parts.join(" / ")
        }
    };
    if label.is_empty() { None } else { Some(label) }
}

/// Annotation mode: resolve every reference in `text` and anchor a label
/// immediately after each matched span.
///
/// `range_offset` shifts the emitted offsets into the caller's coordinate
/// space when `text` is a slice of a larger document. Unresolved keys and
/// empty labels are omitted silently. `cancel` is checked between matches;
/// when raised the annotations produced so far are returned.
pub fn scan_annotations(
    index: &TranslationIndex,
    text: &str,
    range_offset: usize,
    mode: DisplayMode,
    cancel: Option<&AtomicBool>,
) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    for reference in find_references(text) {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            break;
        }
        let Some(entry) = index.lookup(&reference.key) else {
            continue;
        };
        if let Some(label) = format_label(entry, mode) {
            annotations.push(Annotation {
                offset: range_offset + reference.end,
                label,
            });
        }
    }
    annotations
}

/// Tooltip mode: find the one reference whose span contains `position`.
///
/// Returns `None` when no reference covers the position; otherwise the key
/// is extracted with the same matching logic as annotation mode and looked
/// up, with a miss reported as `entry: None` rather than swallowed.
pub fn resolve_at<'a>(
    index: &'a TranslationIndex,
    text: &str,
    position: usize,
) -> Option<Resolution<'a>> {
    let reference = find_references(text)
        .into_iter()
        .find(|r| r.start <= position && position < r.end)?;
    let entry = index.lookup(&reference.key);
    Some(Resolution {
        key: reference.key.clone(),
        reference,
        entry,
    })
}
