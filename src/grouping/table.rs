//! Watch table of in-progress artifacts.

use crate::transcript::ChatLine;

/// Key a line's author groups under. `None` is itself a valid key: all
/// unattributed formatted lines cluster together.
pub type SenderKey = Option<String>;

/// One watch-table entry: an in-progress artifact, or an alias redirecting
/// appends to another entry.
#[derive(Debug)]
pub struct Slot {
    /// Stream index this entry was last appended to.
    pub last_seen: usize,
    /// Accumulated lines; stays empty for aliases.
    pub lines: Vec<ChatLine>,
    /// When set, this entry is a pure alias onto another entry's key.
    pub alias_of: Option<SenderKey>,
}

/// Insertion-ordered map from sender key to slot.
///
/// End-of-stream finalization walks entries in insertion order, which
/// determines output numbering, so ordering is part of the contract. The
/// table only ever holds the handful of currently-active senders, so
/// lookups stay linear.
#[derive(Debug, Default)]
pub struct WatchTable {
    entries: Vec<(SenderKey, Slot)>,
}

impl WatchTable {
    pub fn get(&self, key: &SenderKey) -> Option<&Slot> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, slot)| slot)
    }

    pub fn get_mut(&mut self, key: &SenderKey) -> Option<&mut Slot> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, slot)| slot)
    }

    /// Insert a slot, replacing in place when the key already exists.
    pub fn insert(&mut self, key: SenderKey, slot: Slot) {
        match self.get_mut(&key) {
            Some(existing) => *existing = slot,
            None => self.entries.push((key, slot)),
        }
    }

    pub fn remove(&mut self, key: &SenderKey) -> Option<Slot> {
        let position = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(position).1)
    }

    /// Remove every alias pointing at `root`.
    pub fn remove_aliases_of(&mut self, root: &SenderKey) {
        self.entries
            .retain(|(_, slot)| slot.alias_of.as_ref() != Some(root));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SenderKey, &Slot)> {
        self.entries.iter().map(|(key, slot)| (key, slot))
    }

    /// Drain all entries in insertion order.
    pub fn drain(&mut self) -> impl Iterator<Item = (SenderKey, Slot)> + '_ {
        self.entries.drain(..)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
