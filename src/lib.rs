//! # royale-deck
//!
//! Deck building core for a Clash Royale companion app.
//!
//! ## Design Principles
//!
//! 1. **Immutable Decks**: A `Deck` is a value. Adding or removing a card
//!    returns a new deck; a rejected add leaves the original untouched.
//!
//! 2. **Catalog Is Input**: The card catalog, usage stats and leaderboard
//!    entries are supplied by the caller. Nothing here talks to a database.
//!
//! 3. **Configuration Over Constants**: Balance thresholds and prompt
//!    settings live in serde config structs with sensible defaults.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `Deck` wraps an `im::Vector`, so clones
//!   are O(1) and functional updates share structure.
//!
//! - **Integer Tenths**: Average elixir is rounded to one decimal place with
//!   integer arithmetic, so thresholds compare against exact values.
//!
//! ## Modules
//!
//! - `cards`: Card definitions, the catalog and filters, the base card set
//! - `deck`: Deck selection, balance analysis, share codes, saving
//! - `compare`: Side-by-side card comparison
//! - `stats`: Usage statistics and popular cards
//! - `rankings`: Clan and player leaderboards
//! - `chat`: Prompt assembly for the card expert chat

pub mod cards;
pub mod chat;
pub mod compare;
pub mod deck;
pub mod rankings;
pub mod stats;

// Re-export commonly used types
pub use crate::cards::{base_catalog, Card, CardFilter, CardId, CardType, Catalog, Rarity};

pub use crate::deck::{
    average_elixir, AnalyzerConfig, BalanceSuggestion, Deck, DeckAnalysis, DeckAnalyzer,
    DeckDraft, DeckRejection, DeckSubmission, DECK_SIZE,
};

pub use crate::compare::{CardComparison, Verdict};

pub use crate::stats::{CardStats, StatsTable};

pub use crate::rankings::{Clan, Leaderboard, Player, TrophyTier};

pub use crate::chat::{ChatConfig, ChatMessage, PromptBuilder};
