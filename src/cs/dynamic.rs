pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{min_coins_for_change, solve, Breakdown, ChangeTable, Solution};
