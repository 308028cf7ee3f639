//! `inspect` subcommand: print a file's decoded form without grouping.

use std::path::Path;

use anyhow::Result;

use artex::files::load_lines;
use artex::palette;
use artex::transcript::ChatLine;

/// Print each line's rendered form, optionally prefixed with its 0-based
/// line number. Colors are only emitted when stdout is a terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, numbers: bool) -> Result<()> {
    let color = atty::is(atty::Stream::Stdout);
    for (index, raw) in load_lines(file)?.iter().enumerate() {
        let line = ChatLine::parse(raw);
        if numbers {
            print!("{index}\t");
        }
        if color {
            println!("{}{}", palette::render_line(&line), palette::RESET);
        } else {
            println!("{}", palette::render_plain(&line));
        }
    }
    Ok(())
}

/// Print the color palette swatches for debugging.
#[cfg(not(tarpaulin_include))]
pub fn handle_palette() -> Result<()> {
    print!("{}", palette::palette_dump());
    Ok(())
}
