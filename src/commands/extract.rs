//! `extract` subcommand: run the grouping heuristic over log files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use artex::files::load_lines;
use artex::transcript::ChatLine;
use artex::{ArtifactStore, GroupingEngine};

/// Extract artifacts from each input file into the output directory.
#[cfg(not(tarpaulin_include))]
pub fn handle(files: &[PathBuf], output_dir: Option<&Path>) -> Result<()> {
    let output_dir = super::resolve_output_dir(output_dir)?;
    for file in files {
        extract_file(file, &output_dir)?;
    }
    Ok(())
}

/// Decode one log file and group its lines into stored artifacts.
pub fn extract_file(path: &Path, output_dir: &Path) -> Result<()> {
    let lines: Vec<ChatLine> = load_lines(path)?
        .iter()
        .map(|raw| ChatLine::parse(raw))
        .collect();
    info!(path = %path.display(), lines = lines.len(), "extracting");

    let mut store = ArtifactStore::new(output_dir)?;
    GroupingEngine::new().run(&lines, &mut store)
}
