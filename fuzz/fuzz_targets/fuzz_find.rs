#![no_main]

use gridfind::index::GridIndex;
use gridfind::query::RESULT_LIMIT;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary word streams against a fixed board: find must never panic,
    // never exceed the result cap, and stay idempotent.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let index = GridIndex::new(&["ABCDC", "FGWIO", "CHILL", "PQNSD", "UVDXY"]).unwrap();

    let stream: Vec<&str> = text.split('\n').collect();
    let found = index.find(&stream);
    assert!(found.len() <= RESULT_LIMIT);
    assert_eq!(found, index.find(&stream));
    for word in &found {
        assert!(index.contains(word.trim()));
    }
});
