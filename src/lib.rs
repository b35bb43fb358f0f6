pub mod cs;
pub mod error;
pub mod session;

pub use cs::{approx, dynamic};
pub use cs::{
    greedy_change, min_coins_for_change, solve, Breakdown, ChangeTable, Denominations, Solution,
    DEFAULT_DENOMINATIONS,
};
pub use error::{ChangeError, Result};
pub use session::{Session, SessionEnd};
