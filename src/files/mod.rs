//! Transcript file loading.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

/// Read a transcript file, one entry per line (trailing `\n` stripped).
/// Lines that are not valid UTF-8 are dropped with a logged warning
/// rather than aborting the run.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let file =
        fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        match std::str::from_utf8(&buf) {
            Ok(text) => lines.push(text.to_string()),
            Err(_) => warn!(path = %path.display(), "dropped undecodable line"),
        }
    }

    Ok(lines)
}
