use crate::index::GridIndex;
use crate::query::freq::FreqTable;
use ahash::RandomState;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Maximum number of words returned by a single `find` call.
pub const RESULT_LIMIT: usize = 10;

/// Ranked word lookup against a built [`GridIndex`].
///
/// Borrows the index read-only; one index can serve any number of rankers
/// (and concurrent `find` calls) without coordination.
pub struct Ranker<'a> {
    index: &'a GridIndex,
}

impl<'a> Ranker<'a> {
    pub fn new(index: &'a GridIndex) -> Self {
        Self { index }
    }

    /// Return up to [`RESULT_LIMIT`] words from `stream` that occur in the
    /// grid, ranked by stream frequency descending, then case-insensitive
    /// alphabetical order.
    ///
    /// Entries are trimmed; empty and impossibly long words are dropped
    /// before counting. Occurrences are counted under the index's
    /// normalization, and the first-seen original casing is the spelling
    /// that comes back out. An empty result is a normal outcome, not an
    /// error.
    pub fn find<I, S>(&self, stream: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let max_len = self.index.max_len();
        let mut freq = FreqTable::new();
        for raw in stream {
            let word = raw.as_ref().trim();
            if word.is_empty() || word.chars().count() > max_len {
                continue;
            }
            let key = self.index.normalize(word).into_owned();
            freq.record(word, key);
        }
        if freq.is_empty() {
            return Vec::new();
        }

        let mut found: Vec<_> = freq
            .into_entries()
            .into_iter()
            .filter(|entry| self.index.contains_key(&entry.key))
            .collect();

        // Stable sort: fully-tied entries keep first-seen stream order.
        found.sort_by_cached_key(|entry| (Reverse(entry.count), entry.word.to_uppercase()));

        let mut seen: HashSet<String, RandomState> = HashSet::with_hasher(RandomState::new());
        let mut result = Vec::with_capacity(RESULT_LIMIT.min(found.len()));
        for entry in found {
            if seen.insert(entry.word.to_uppercase()) {
                result.push(entry.word);
                if result.len() == RESULT_LIMIT {
                    break;
                }
            }
        }
        result
    }
}

impl GridIndex {
    /// Convenience for [`Ranker::find`] against this index.
    pub fn find<I, S>(&self, stream: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ranker::new(self).find(stream)
    }
}
