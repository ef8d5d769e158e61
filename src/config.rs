use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::scanner::DisplayMode;

pub const CONFIG_FILE_NAME: &str = ".langconfrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for files the annotate walk skips.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Directories under the root the annotate walk covers.
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    /// Master switch for the annotate command.
    #[serde(default = "default_enabled")]
    pub enable_inline_hints: bool,
    /// Master switch for the resolve command.
    #[serde(default = "default_enabled")]
    pub enable_hover_tooltips: bool,
    /// Which locale value(s) annotation labels show.
    #[serde(default)]
    pub display_language: DisplayMode,
}

fn default_includes() -> Vec<String> {
    vec!["modules".to_string()]
}

fn default_enabled() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: default_includes(),
            enable_inline_hints: default_enabled(),
            enable_hover_tooltips: default_enabled(),
            display_language: DisplayMode::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// True when `path` matches any of the `ignores` patterns. Patterns that
    /// fail to compile never match.
    pub fn is_ignored(&self, path: &Path) -> bool {
        self.ignores
            .iter()
            .filter_map(|pattern| Pattern::new(pattern).ok())
            .any(|pattern| pattern.matches_path(path))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
