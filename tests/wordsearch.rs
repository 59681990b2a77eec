//! End-to-end tests over the public indexing and ranking API.

use gridfind::index::{GridIndex, IndexConfig, ValidationError};
use gridfind::query::{RESULT_LIMIT, Ranker};

const GRID: [&str; 5] = ["ABCDC", "FGWIO", "CHILL", "PQNSD", "UVDXY"];

#[test]
fn reference_puzzle() {
    let index = GridIndex::new(&GRID).unwrap();
    let found = index.find(["cold", "wind", "snow", "chill"]);
    assert_eq!(found, vec!["chill", "cold", "wind"]);
}

#[test]
fn construction_failures() {
    let empty: [&str; 0] = [];
    assert_eq!(
        GridIndex::new(&empty).unwrap_err(),
        ValidationError::EmptyGrid
    );
    assert!(matches!(
        GridIndex::new(&["AB", "C"]).unwrap_err(),
        ValidationError::RaggedGrid { .. }
    ));
    let tall: Vec<String> = (0..65).map(|_| "A".to_string()).collect();
    assert!(matches!(
        GridIndex::new(&tall).unwrap_err(),
        ValidationError::OversizedGrid { .. }
    ));
}

#[test]
fn every_cell_and_full_lines_are_lookupable() {
    let index = GridIndex::new(&GRID).unwrap();
    for row in &GRID {
        assert!(index.contains(row));
        for ch in row.chars() {
            assert!(index.contains(&ch.to_string()));
        }
    }
    for col in ["AFCPU", "BGHQV", "CWIND", "DILSX", "COLDY"] {
        assert!(index.contains(col));
    }
}

#[test]
fn repeated_words_outrank_alphabetical_order() {
    let index = GridIndex::new(&GRID).unwrap();
    let found = index.find(["wind", "wind", "chill"]);
    assert_eq!(found, vec!["wind", "chill"]);
}

#[test]
fn more_than_ten_matches_truncate() {
    // 26 single-letter candidates against a single alphabet row.
    let row: String = ('A'..='Z').collect();
    let index = GridIndex::new(&[row]).unwrap();
    let stream: Vec<String> = ('A'..='Z').map(|c| c.to_string()).collect();
    let found = index.find(&stream);
    assert_eq!(found.len(), RESULT_LIMIT);
    let expected: Vec<String> = ('A'..='J').map(|c| c.to_string()).collect();
    assert_eq!(found, expected);
}

#[test]
fn degenerate_streams_are_not_errors() {
    let index = GridIndex::new(&GRID).unwrap();
    assert!(index.find(["   ", "\t\t", ""]).is_empty());
    assert!(index.find(["ABCDCF"]).is_empty()); // longer than max_len
    let empty: [&str; 0] = [];
    assert!(index.find(empty).is_empty());
}

#[test]
fn one_index_serves_many_rankers() {
    let index = GridIndex::new(&GRID).unwrap();
    let first = Ranker::new(&index);
    let second = Ranker::new(&index);
    assert_eq!(first.find(["chill"]), second.find(["chill"]));
}

#[test]
fn concurrent_queries_share_one_index() {
    let index = GridIndex::new(&GRID).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| index.find(["cold", "wind", "snow", "chill"])))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), vec!["chill", "cold", "wind"]);
        }
    });
}

#[test]
fn case_sensitive_puzzle() {
    let config = IndexConfig {
        case_insensitive: false,
    };
    let index = GridIndex::with_config(&["Chill"], config).unwrap();
    assert_eq!(index.find(["Chill", "chill", "CHILL"]), vec!["Chill"]);
}
