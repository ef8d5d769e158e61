//! Command handlers and the workspace loading they share.

pub mod annotate;
pub mod init;
pub mod keys;
pub mod resolve;

use anyhow::Result;

use super::args::CommonArgs;
use super::report;
use crate::config::{Config, load_config};
use crate::index::TranslationIndex;
use crate::scanner::DisplayMode;

/// Config plus a populated index; every command that reads the tree starts
/// from one of these.
pub(crate) struct Workspace {
    pub config: Config,
    pub index: TranslationIndex,
}

/// Load config, build the index from the root, and print load diagnostics.
pub(crate) fn load_workspace(common: &CommonArgs) -> Result<Workspace> {
    let loaded = load_config(&common.root)?;
    if common.verbose && loaded.from_file {
        eprintln!("using config file found from {}", common.root.display());
    }

    let mut index = TranslationIndex::new();
    let outcome = index.load(&common.root);
    report::print_load_summary(&outcome, index.len(), &common.root, common.verbose);

    Ok(Workspace {
        config: loaded.config,
        index,
    })
}

/// CLI flag wins over the config file.
pub(crate) fn display_mode(common: &CommonArgs, config: &Config) -> DisplayMode {
    common.display_language.unwrap_or(config.display_language)
}
