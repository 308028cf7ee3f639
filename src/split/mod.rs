//! Manual partitioning of a transcript into tagged artifacts.
//!
//! When the grouping heuristic gets a file wrong, the operator assigns
//! line ranges to tags by hand with `START[-END]TAG` tokens and each tag
//! becomes one output artifact. Coverage is all-or-nothing: any line left
//! without a tag, or any range past the end of the file, fails the whole
//! operation before anything is written.

use thiserror::Error;

use crate::transcript::ChatLine;

/// Errors for section-token parsing and range assignment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("invalid section token '{token}': expected START[-END]TAG")]
    Malformed { token: String },

    #[error("section range {start}-{end} exceeds the file's {len} lines")]
    OutOfRange { start: usize, end: usize, len: usize },

    #[error("line {index} is not covered by any section")]
    Uncovered { index: usize },
}

/// One parsed `START[-END]TAG` token. `start` and `end` are inclusive
/// 0-based line indices; a single-index token has `end == start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub start: usize,
    pub end: usize,
    pub tag: String,
}

impl Section {
    /// Parse a section token: digits, optional `-digits`, then a
    /// lowercase-letter tag. The whole token must match.
    pub fn parse(token: &str) -> Result<Self, SectionError> {
        let malformed = || SectionError::Malformed {
            token: token.to_string(),
        };

        let (start, rest) = read_number(token).ok_or_else(malformed)?;
        let (end, rest) = match rest.strip_prefix('-') {
            Some(after) => read_number(after).ok_or_else(malformed)?,
            None => (start, rest),
        };

        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(malformed());
        }

        Ok(Self {
            start,
            end,
            tag: rest.to_string(),
        })
    }
}

/// Read a leading run of ASCII digits; returns the value and the rest.
fn read_number(input: &str) -> Option<(usize, &str)> {
    let digits = input.len() - input.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let value = input[..digits].parse().ok()?;
    Some((value, &input[digits..]))
}

/// Assign every line to a tag per `sections`, a later token overwriting an
/// earlier one on overlap, and group the lines by tag in order of first
/// occurrence. Fails without partial effect when a section points past the
/// end of the file or any line ends up uncovered.
pub fn partition(
    lines: &[ChatLine],
    sections: &[Section],
) -> Result<Vec<(String, Vec<ChatLine>)>, SectionError> {
    let mut tags: Vec<Option<&str>> = vec![None; lines.len()];
    for section in sections {
        // An inverted range assigns nothing; it only fails later if lines
        // stay uncovered.
        for index in section.start..=section.end {
            if index >= lines.len() {
                return Err(SectionError::OutOfRange {
                    start: section.start,
                    end: section.end,
                    len: lines.len(),
                });
            }
            tags[index] = Some(&section.tag);
        }
    }

    let mut groups: Vec<(String, Vec<ChatLine>)> = Vec::new();
    for (index, tag) in tags.iter().enumerate() {
        let tag = tag.ok_or(SectionError::Uncovered { index })?;
        match groups.iter_mut().find(|(name, _)| name == tag) {
            Some((_, members)) => members.push(lines[index].clone()),
            None => groups.push((tag.to_string(), vec![lines[index].clone()])),
        }
    }
    Ok(groups)
}
