pub mod freq;
pub mod ranker;

pub use freq::{FreqEntry, FreqTable};
pub use ranker::{RESULT_LIMIT, Ranker};
