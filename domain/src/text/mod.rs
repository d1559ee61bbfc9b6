pub mod diff;
pub mod matching;
pub mod normalize;
pub mod similarity;

pub use diff::{diff_tokens, DiffEntry};
pub use matching::{matching_blocks, MatchBlock};
pub use normalize::{is_diacritic, normalize};
pub use similarity::similarity;
