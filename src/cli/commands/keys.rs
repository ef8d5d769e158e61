use anyhow::Result;

use super::super::{ExitStatus, args::KeysCommand};
use super::{Workspace, load_workspace};

/// List the indexed keys (sorted), or just their number with `--count`.
pub fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let Workspace { index, .. } = load_workspace(&cmd.common)?;

    if cmd.count {
        println!("{}", index.len());
        return Ok(ExitStatus::Success);
    }

    let mut keys = index.all_keys();
    keys.sort();
    for key in keys {
        println!("{key}");
    }

    Ok(ExitStatus::Success)
}
