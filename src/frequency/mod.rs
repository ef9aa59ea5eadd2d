// Word frequency counting and ranking.

pub mod table;
pub mod traits;
