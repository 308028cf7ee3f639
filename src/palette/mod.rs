//! Terminal rendering of decoded lines.
//!
//! Maps the 16-entry mIRC color palette onto xterm-256 indices and turns
//! a line's decoded segments into ANSI escape sequences for human
//! inspection. Purely cosmetic: extraction and grouping never depend on
//! this module.

use crate::transcript::{ChatLine, Segment};

/// xterm-256 indices for mIRC palette entries 0-15: white, dark grey,
/// blue, green, orange, red, purple, dark yellow, yellow, light green,
/// aquamarine, cyan, light blue, light purple, light grey, very light
/// grey.
pub const PALETTE: [u8; 16] = [15, 237, 4, 2, 9, 1, 96, 220, 3, 10, 6, 14, 12, 13, 8, 252];

/// Reset-all-attributes escape.
pub const RESET: &str = "\x1b[0m";

/// Render a line's segments as ANSI-colored text. No trailing reset is
/// appended; callers emit [`RESET`] once per line.
pub fn render_line(line: &ChatLine) -> String {
    let mut out = String::new();
    for segment in line.segments() {
        match segment {
            Segment::Text(text) => out.push_str(text),
            // The color grammar caps indices at 15, so palette lookups
            // cannot go out of bounds.
            Segment::Fg(index) => {
                out.push_str("\x1b[38;5;");
                out.push_str(&PALETTE[usize::from(*index)].to_string());
                out.push('m');
            }
            Segment::Bg(index) => {
                out.push_str("\x1b[48;5;");
                out.push_str(&PALETTE[usize::from(*index)].to_string());
                out.push('m');
            }
            Segment::Reset => out.push_str(RESET),
        }
    }
    out
}

/// Render a line's text with all style directives dropped.
pub fn render_plain(line: &ChatLine) -> String {
    line.segments()
        .iter()
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

/// Palette debug dump: one background swatch row per entry.
pub fn palette_dump() -> String {
    let mut out = String::new();
    for (index, code) in PALETTE.iter().enumerate() {
        out.push_str(RESET);
        out.push_str(&format!(
            "{index:2}: \x1b[48;5;{code}m {index} {index} {index} {index} {index} "
        ));
        out.push_str(RESET);
        out.push('\n');
    }
    out
}
