pub mod contestant_result;
pub mod score;

pub use contestant_result::{ContestantResult, ResultKey};
pub use score::Score;
