//! Langconf - localization key resolver for legacy PHP projects
//!
//! Langconf is a CLI tool and library for resolving `LNG_`/`LKP_` localization
//! key references found in source and template files against the per-module
//! INI-style language files (`modules/<module>/view/lang/lang.<locale>.conf`)
//! such projects ship.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Configuration file loading and parsing
//! - `index`: Translation index built from on-disk lang files
//! - `scanner`: Reference scanning, annotation and tooltip resolution
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod index;
pub mod scanner;
pub mod utils;
