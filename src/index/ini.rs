//! Best-effort parser for the INI-style `lang.*.conf` files.
//!
//! The legacy format is line-oriented: `[section]` headers followed by
//! `key = value` pairs. The parser is deliberately lenient; the only hard
//! failure is the file read itself (IO error or invalid UTF-8). Anything
//! that does not look like a header or a pair is skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// One `[section]` block and the pairs declared under it, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
    pub name: String,
    pub pairs: Vec<(String, String)>,
}

/// A parsed lang file. Pairs that appear before any `[section]` header are
/// not collected; the legacy loader only ever consumed sectioned keys.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IniDocument {
    pub sections: Vec<IniSection>,
}

pub fn parse_ini_file(path: &Path) -> Result<IniDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lang file: {}", path.display()))?;
    Ok(parse_ini(&content))
}

pub fn parse_ini(content: &str) -> IniDocument {
    let mut document = IniDocument::default();
    let mut current: Option<IniSection> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            if let Some(section) = current.take() {
                document.sections.push(section);
            }
            current = Some(IniSection {
                name: name.trim().to_string(),
                pairs: Vec::new(),
            });
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let Some(section) = current.as_mut() else {
            continue;
        };
        section
            .pairs
            .push((key.trim().to_string(), unquote(value.trim()).to_string()));
    }

    if let Some(section) = current.take() {
        document.sections.push(section);
    }
    document
}

/// Strip one pair of matching surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 {
        let bytes = value.as_bytes();
        if (bytes[0] == b'"' && bytes[value.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[value.len() - 1] == b'\'')
        {
            return &value[1..value.len() - 1];
        }
    }
    value
}
