use std::fs;

use anyhow::{Context, Result};

use super::super::{ExitStatus, args::ResolveCommand};
use super::{Workspace, load_workspace};
use crate::scanner::{self, tooltip::render_tooltip};

/// Point query: resolve the reference covering a byte offset and print its
/// tooltip.
///
/// A position with no reference is not an error; a reference whose key is
/// missing from the index prints the explicit "not found" tooltip and exits
/// with [`ExitStatus::Failure`] so scripts can tell the two apart.
pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let common = &cmd.common;
    let Workspace { config, index } = load_workspace(common)?;

    if !config.enable_hover_tooltips {
        if common.verbose {
            eprintln!("hover tooltips are disabled in config");
        }
        return Ok(ExitStatus::Success);
    }

    let content = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read file: {}", cmd.file.display()))?;
    if cmd.offset > content.len() {
        anyhow::bail!(
            "offset {} is past the end of {} ({} bytes)",
            cmd.offset,
            cmd.file.display(),
            content.len()
        );
    }

    match scanner::resolve_at(&index, &content, cmd.offset) {
        None => {
            println!(
                "no localization reference at {}:{}",
                cmd.file.display(),
                cmd.offset
            );
            Ok(ExitStatus::Success)
        }
        Some(resolution) => {
            println!("{}", render_tooltip(&resolution.key, resolution.entry));
            if resolution.entry.is_some() {
                Ok(ExitStatus::Success)
            } else {
                Ok(ExitStatus::Failure)
            }
        }
    }
}
