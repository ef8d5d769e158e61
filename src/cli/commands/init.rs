use std::fs;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::super::{ExitStatus, report::SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default config file into the current directory.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    println!("{} created {}", SUCCESS_MARK.green(), CONFIG_FILE_NAME);

    Ok(ExitStatus::Success)
}
