//! # gridfind - Word-Search Grid Indexing
//!
//! gridfind locates which words from a supplied stream occur as horizontal
//! or vertical contiguous runs in a fixed character grid, returning the top
//! matches ranked by stream frequency.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Grid validation and substring lookup-set construction
//! - [`query`] - Stream filtering, frequency counting, and ranking
//! - [`output`] - Result printing for the CLI driver
//!
//! ## Quick Start
//!
//! ```
//! use gridfind::index::GridIndex;
//!
//! let index = GridIndex::new(&["ABCDC", "FGWIO", "CHILL", "PQNSD", "UVDXY"]).unwrap();
//! let found = index.find(["cold", "wind", "snow", "chill"]);
//! assert_eq!(found, vec!["chill", "cold", "wind"]);
//! ```
//!
//! ## Design
//!
//! Construction enumerates every contiguous substring of every row and
//! column (bounded by the 64x64 grid cap) into a hash set, so each query
//! word costs a single O(1) average-case membership test instead of a grid
//! scan. The index is immutable after construction and safe to share
//! across threads.

pub mod index;
pub mod output;
pub mod query;
