use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;
use walkdir::WalkDir;

use super::super::{
    ExitStatus,
    args::AnnotateCommand,
    report::{self, AnnotationRow},
};
use super::{Workspace, display_mode, load_workspace};
use crate::config::Config;
use crate::index::TranslationIndex;
use crate::scanner::{self, DisplayMode};
use crate::utils::{build_line_index, offset_to_position};

/// Scan the given paths (or the config `includes`) for key references and
/// print one row per resolved annotation.
pub fn annotate(cmd: AnnotateCommand) -> Result<ExitStatus> {
    let common = &cmd.common;
    let Workspace { config, index } = load_workspace(common)?;

    if !config.enable_inline_hints {
        if common.verbose {
            eprintln!("inline hints are disabled in config");
        }
        return Ok(ExitStatus::Success);
    }

    let roots: Vec<PathBuf> = if cmd.paths.is_empty() {
        config
            .includes
            .iter()
            .map(|dir| common.root.join(dir))
            .collect()
    } else {
        cmd.paths.clone()
    };

    let files = collect_files(&roots, &config, &common.root);
    let mode = display_mode(common, &config);

    // The scanner is pure over the index, so files fan out freely.
    let rows: Vec<AnnotationRow> = files
        .par_iter()
        .flat_map_iter(|path| annotate_file(&index, path, &common.root, mode))
        .collect();

    report::print_annotations(&rows);
    report::print_annotate_summary(rows.len(), files.len());

    Ok(ExitStatus::Success)
}

/// Walk `roots` and gather candidate files, honoring the `ignores` globs
/// against root-relative paths. Sorted for stable output.
fn collect_files(roots: &[PathBuf], config: &Config, workspace_root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in roots {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            let relative = path.strip_prefix(workspace_root).unwrap_or(&path);
            if config.is_ignored(relative) {
                continue;
            }
            files.push(path);
        }
    }
    files.sort();
    files.dedup();
    files
}

/// Produce the printable rows for one file. Unreadable (binary) files
/// contribute nothing; locations point at the annotation anchor, immediately
/// after the matched reference.
fn annotate_file(
    index: &TranslationIndex,
    path: &Path,
    workspace_root: &Path,
    mode: DisplayMode,
) -> Vec<AnnotationRow> {
    let Ok(content) = fs::read_to_string(path) else {
        return Vec::new();
    };
    let annotations = scanner::scan_annotations(index, &content, 0, mode, None);
    if annotations.is_empty() {
        return Vec::new();
    }

    let line_index = build_line_index(&content);
    let display = path.strip_prefix(workspace_root).unwrap_or(path);
    annotations
        .into_iter()
        .map(|annotation| {
            let (line, column) = offset_to_position(&content, &line_index, annotation.offset);
            AnnotationRow {
                location: format!("{}:{}:{}", display.display(), line, column),
                label: annotation.label,
            }
        })
        .collect()
}
