//! `split` subcommand: manually partition one file into tagged artifacts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use artex::files::load_lines;
use artex::palette;
use artex::split::{partition, Section};
use artex::transcript::ChatLine;
use artex::ArtifactStore;

/// Partition `file` per the section tokens and write one artifact per
/// tag. Coverage errors abort before anything is written; on success the
/// source file is deleted unless `preview` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, sections: &[String], output_dir: Option<&Path>, preview: bool) -> Result<()> {
    let output_dir = super::resolve_output_dir(output_dir)?;

    let sections: Vec<Section> = sections
        .iter()
        .map(|token| Section::parse(token))
        .collect::<Result<_, _>>()?;

    let lines: Vec<ChatLine> = load_lines(file)?
        .iter()
        .map(|raw| ChatLine::parse(raw))
        .collect();
    let groups = partition(&lines, &sections)?;

    let color = atty::is(atty::Stream::Stdout);
    let mut store = if preview {
        None
    } else {
        Some(ArtifactStore::new(&output_dir)?)
    };

    for (tag, members) in &groups {
        println!("Tag {tag}:");
        for line in members {
            if color {
                println!("{}{}", palette::render_line(line), palette::RESET);
            } else {
                println!("{}", palette::render_plain(line));
            }
        }
        if let Some(store) = store.as_mut() {
            let path = store.write(members)?;
            println!("Wrote {}", path.display());
        }
        println!();
    }

    if !preview {
        fs::remove_file(file)
            .with_context(|| format!("failed to remove source file {}", file.display()))?;
    }
    Ok(())
}
