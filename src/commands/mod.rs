//! Subcommand handlers.

pub mod config;
pub mod extract;
pub mod inspect;
pub mod split;

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Output directory resolution: CLI flag first, then the config file,
/// then the built-in default.
pub(crate) fn resolve_output_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    Ok(artex::Config::load()?.output_dir)
}
