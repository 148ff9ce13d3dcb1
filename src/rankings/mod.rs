//! Clan and player leaderboards.
//!
//! Entries come from the leaderboard service already loaded; this module
//! only ranks, buckets and filters them.

pub mod leaderboard;

pub use leaderboard::{
    players_in_clan, Clan, Leaderboard, Player, Ranked, RankedEntry, TrophyTier,
    DEFAULT_LEADERBOARD_LIMIT,
};
