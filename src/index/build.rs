use crate::index::grid::Grid;
use crate::index::types::{IndexConfig, ValidationError};
use ahash::RandomState;
use std::borrow::Cow;
use std::collections::HashSet;

/// Immutable word-search index over a rectangular character grid.
///
/// Construction enumerates every contiguous substring of every row and
/// column into a lookup set, trading memory (bounded by the 64x64 grid cap)
/// for O(1) average-case membership tests. All reads go through `&self`;
/// the index is `Send + Sync` and safe to share across query threads.
#[derive(Debug)]
pub struct GridIndex {
    lookup: HashSet<String, RandomState>,
    max_len: usize,
    case_insensitive: bool,
}

impl GridIndex {
    /// Build an index with the default case-insensitive policy.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, ValidationError> {
        Self::with_config(rows, IndexConfig::default())
    }

    /// Build an index with an explicit matching policy.
    pub fn with_config<S: AsRef<str>>(
        rows: &[S],
        config: IndexConfig,
    ) -> Result<Self, ValidationError> {
        let grid = Grid::parse(rows, &config)?;

        // Substring count before set dedup: h * w*(w+1)/2 from rows plus
        // w * h*(h+1)/2 from columns.
        let (h, w) = (grid.height(), grid.width());
        let estimate = h * (w * (w + 1)) / 2 + w * (h * (h + 1)) / 2;
        let mut lookup = HashSet::with_capacity_and_hasher(estimate, RandomState::new());

        for row in grid.rows() {
            add_substrings(row, &mut lookup);
        }
        for col in grid.columns() {
            add_substrings(&col, &mut lookup);
        }

        Ok(Self {
            lookup,
            max_len: grid.max_len(),
            case_insensitive: config.case_insensitive,
        })
    }

    /// Test whether `word` occurs as a contiguous horizontal or vertical run,
    /// after applying the same normalization used at construction.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(self.normalize(word).as_ref())
    }

    /// Upper bound on the length of any possible match.
    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Number of distinct substrings in the lookup set.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Map a candidate word to its lookup key under the index's policy.
    pub(crate) fn normalize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if self.case_insensitive {
            Cow::Owned(word.to_uppercase())
        } else {
            Cow::Borrowed(word)
        }
    }

    /// Membership test for an already-normalized key.
    #[inline]
    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.lookup.contains(key)
    }
}

/// Insert every contiguous substring (length >= 1) of `line` into the set.
/// Insertion is idempotent; duplicates across rows and columns collapse.
fn add_substrings(line: &[char], set: &mut HashSet<String, RandomState>) {
    for start in 0..line.len() {
        for end in start + 1..=line.len() {
            set.insert(line[start..end].iter().collect());
        }
    }
}
