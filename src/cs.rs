pub mod approx;
pub mod denominations;
pub mod dynamic;

// Re-export all modules
pub use approx::*;
pub use denominations::{Denominations, DEFAULT_DENOMINATIONS};
pub use dynamic::*;
