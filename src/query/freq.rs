use ahash::RandomState;
use std::collections::HashMap;

/// One counted word from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqEntry {
    /// Representative spelling: the first-seen original casing.
    pub word: String,
    /// Lookup key under the index's normalization policy.
    pub key: String,
    /// Occurrences in the stream.
    pub count: u32,
}

/// Frequency table keyed by normalized word, preserving insertion order.
///
/// Entry order matters: the ranking sort is stable, so fully-tied words
/// fall back to first-seen order. A plain `HashMap` would not give that,
/// hence the side vector plus key-to-slot map.
#[derive(Debug, Default)]
pub struct FreqTable {
    slots: HashMap<String, usize, RandomState>,
    entries: Vec<FreqEntry>,
}

impl FreqTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word` under `key`. The first occurrence of a
    /// key fixes the representative spelling; later casings only bump the
    /// counter.
    pub fn record(&mut self, word: &str, key: String) {
        match self.slots.get(&key) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push(FreqEntry {
                    word: word.to_string(),
                    key,
                    count: 1,
                });
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the table, yielding entries in insertion order.
    pub fn into_entries(self) -> Vec<FreqEntry> {
        self.entries
    }
}
