//! Artifact grouping engine.
//!
//! Clusters formatted transcript lines into discrete art pieces in one
//! forward pass over the decoded line stream. Per-sender state lives in a
//! [`WatchTable`]; a sender who interleaves with an active piece joins it
//! through an alias entry, so collaborative art lands in one artifact.
//! Artifacts finalize on a gap timeout or at end of stream, and each is
//! handed to the sink the moment it closes.

mod table;

pub use table::{SenderKey, Slot, WatchTable};

use anyhow::Result;
use tracing::{info, warn};

use crate::output::ArtifactSink;
use crate::transcript::ChatLine;

/// An artifact is finalized once more than this many lines pass without a
/// new contribution (strict greater-than comparison).
pub const TIMEOUT_GAP: usize = 16;

/// How many upcoming lines are scanned for the same sender when deciding
/// whether a newcomer is joining an existing piece.
pub const LOOKAHEAD: usize = 15;

/// Single-pass grouping over a decoded line stream.
pub struct GroupingEngine {
    table: WatchTable,
}

impl GroupingEngine {
    pub fn new() -> Self {
        Self {
            table: WatchTable::default(),
        }
    }

    /// Run the full pass, handing each finalized artifact to `sink`.
    pub fn run(mut self, lines: &[ChatLine], sink: &mut dyn ArtifactSink) -> Result<()> {
        for (index, line) in lines.iter().enumerate() {
            self.sweep_timeouts(index, sink)?;
            if !line.has_format() {
                continue;
            }
            self.accept(index, line, lines);
        }
        self.flush(sink)
    }

    /// Finalize every root whose gap since its last contribution exceeds
    /// [`TIMEOUT_GAP`].
    fn sweep_timeouts(&mut self, index: usize, sink: &mut dyn ArtifactSink) -> Result<()> {
        let expired: Vec<SenderKey> = self
            .table
            .iter()
            .filter(|(_, slot)| slot.alias_of.is_none() && index - slot.last_seen > TIMEOUT_GAP)
            .map(|(key, _)| key.clone())
            .collect();
        for key in expired {
            self.finalize(&key, "timeout", sink)?;
        }
        Ok(())
    }

    /// Route one formatted line into the table.
    fn accept(&mut self, index: usize, line: &ChatLine, lines: &[ChatLine]) {
        let key: SenderKey = line.sender().map(str::to_string);

        if self.table.get(&key).is_some() {
            self.append_existing(&key, index, line);
            return;
        }

        // A newcomer whose formatted line lands right after someone else's
        // formatted lines, and who keeps talking shortly after, is taken to
        // be a collaborator on that piece rather than starting a new one.
        if let Some(neighbor) = lookback_artist(index, lines) {
            if speaks_again(&key, index, lines) && self.join(key.clone(), &neighbor, index, line) {
                return;
            }
        }

        self.table.insert(
            key,
            Slot {
                last_seen: index,
                lines: vec![line.clone()],
                alias_of: None,
            },
        );
    }

    /// Append to an already-watched sender's artifact, routing through the
    /// alias when the entry is one.
    fn append_existing(&mut self, key: &SenderKey, index: usize, line: &ChatLine) {
        if let Some(slot) = self.table.get_mut(key) {
            slot.last_seen = index;
        }
        let Some(root) = self.resolve(key) else {
            return;
        };
        if let Some(slot) = self.table.get_mut(&root) {
            slot.last_seen = index;
            slot.lines.push(line.clone());
        }
    }

    /// Alias `key` onto `neighbor`'s root and append the line there. The
    /// root's own `last_seen` is deliberately left untouched by the join
    /// itself. Returns false when the neighbor has no table entry, in
    /// which case the caller starts a fresh root instead.
    fn join(&mut self, key: SenderKey, neighbor: &SenderKey, index: usize, line: &ChatLine) -> bool {
        let Some(root) = self.resolve(neighbor) else {
            return false;
        };
        self.table.insert(
            key,
            Slot {
                last_seen: index,
                lines: Vec::new(),
                alias_of: Some(root.clone()),
            },
        );
        if let Some(slot) = self.table.get_mut(&root) {
            slot.lines.push(line.clone());
        }
        true
    }

    /// Walk alias links to the owning root. Iterative with a hop cap so a
    /// malformed reference chain cannot loop; returns `None` when the key
    /// is unknown or the cap is exhausted.
    fn resolve(&self, key: &SenderKey) -> Option<SenderKey> {
        let mut current = key.clone();
        for _ in 0..=self.table.len() {
            match &self.table.get(&current)?.alias_of {
                Some(next) => current = next.clone(),
                None => return Some(current),
            }
        }
        warn!(key = key.as_deref().unwrap_or("-"), "alias chain did not terminate");
        None
    }

    /// Remove an artifact from the table, hand its lines to the sink, and
    /// drop every alias that pointed at it.
    fn finalize(&mut self, key: &SenderKey, trigger: &str, sink: &mut dyn ArtifactSink) -> Result<()> {
        let Some(slot) = self.table.remove(key) else {
            return Ok(());
        };
        info!(
            sender = key.as_deref().unwrap_or("-"),
            lines = slot.lines.len(),
            trigger,
            "artifact completed"
        );
        sink.write_artifact(&slot.lines)?;
        self.table.remove_aliases_of(key);
        Ok(())
    }

    /// End-of-stream: finalize remaining roots in insertion order.
    /// Leftover aliases hold no lines and are skipped.
    fn flush(mut self, sink: &mut dyn ArtifactSink) -> Result<()> {
        for (key, slot) in self.table.drain() {
            if slot.alias_of.is_some() {
                continue;
            }
            info!(
                sender = key.as_deref().unwrap_or("-"),
                lines = slot.lines.len(),
                trigger = "flush",
                "artifact completed"
            );
            sink.write_artifact(&slot.lines)?;
        }
        Ok(())
    }
}

impl Default for GroupingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender of the formatted line closest to `index` in the lookback window.
/// The window spans the two lines before the previous one,
/// `max(index-3, 0) ..= index-2`. It deliberately excludes `index - 1`.
/// Outer `None` means the window held no formatted line; the inner key may
/// itself be the unattributed key.
fn lookback_artist(index: usize, lines: &[ChatLine]) -> Option<SenderKey> {
    if index < 2 {
        return None;
    }
    let start = index.saturating_sub(3);
    let end = index - 2;
    lines[start..=end]
        .iter()
        .rev()
        .find(|line| line.has_format())
        .map(|line| line.sender().map(str::to_string))
}

/// Does `key` speak again (formatted or not) within the next
/// [`LOOKAHEAD`] lines?
fn speaks_again(key: &SenderKey, index: usize, lines: &[ChatLine]) -> bool {
    let start = (index + 1).min(lines.len());
    let end = (index + 1 + LOOKAHEAD).min(lines.len());
    lines[start..end]
        .iter()
        .any(|line| line.sender() == key.as_deref())
}
