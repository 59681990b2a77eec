#![no_main]

use gridfind::index::GridIndex;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Treat fuzz input lines as grid rows; construction must either reject
    // the shape or produce an index whose read surface holds.
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let rows: Vec<&str> = text.lines().collect();

    if let Ok(index) = GridIndex::new(&rows) {
        assert!(index.max_len() >= 1);
        assert!(!index.is_empty());
        for row in &rows {
            assert!(index.contains(row));
        }
    }
});
