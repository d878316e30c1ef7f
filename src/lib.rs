pub mod change;
pub mod error;

pub use change::{
    count_change_ways, greedy_change, min_coin_change, min_coin_count, ChangeBreakdown,
};
pub use error::{Error, Result};
