//! Card usage statistics.
//!
//! `StatsTable` tracks how often each card is used and ranks the most
//! popular ones. Stats are supplied by the caller; nothing here persists.

pub mod usage;

pub use usage::{
    total_usage, type_distribution, CardStats, PopularCard, StatsTable, DEFAULT_POPULAR_LIMIT,
};
