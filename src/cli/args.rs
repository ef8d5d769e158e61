//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Langconf
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `annotate`: Print inline translation labels for key references in files
//! - `resolve`: Resolve the reference at one position and print its tooltip
//! - `keys`: List indexed translation keys
//! - `init`: Initialize langconf configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::scanner::DisplayMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Annotate(cmd)) => cmd.common.verbose,
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Workspace root containing the modules/ tree
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Display language for annotation labels (overrides config file)
    #[arg(long, value_enum)]
    pub display_language: Option<DisplayMode>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AnnotateCommand {
    /// Files or directories to scan (default: config `includes` under the root)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// File containing the reference
    pub file: PathBuf,

    /// Byte offset of the query position within the file
    #[arg(long)]
    pub offset: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Print only the number of indexed keys
    #[arg(long)]
    pub count: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Annotate localization key references in files with their translations
    Annotate(AnnotateCommand),
    /// Resolve the reference at a byte offset and print its tooltip
    Resolve(ResolveCommand),
    /// List translation keys indexed from the lang files
    Keys(KeysCommand),
    /// Initialize a new .langconfrc.json configuration file
    Init,
}
