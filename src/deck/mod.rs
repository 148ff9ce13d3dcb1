//! Deck building: selection, balance analysis, sharing and saving.
//!
//! ## Key Types
//!
//! - `Deck`: Immutable ordered selection of up to 8 distinct cards
//! - `DeckAnalyzer`: Average elixir, balance suggestions, suggested additions
//! - `AnalyzerConfig`: Tunable thresholds for the analyzer
//! - `DeckDraft` / `DeckSubmission`: Deck metadata and the saved record
//!
//! The `share` module converts decks to and from share codes.

pub mod analyzer;
pub mod config;
pub mod draft;
pub mod selection;
pub mod share;

pub use analyzer::{
    average_elixir, BalanceRule, BalanceSuggestion, DeckAnalysis, DeckAnalyzer, SuggestionKind,
    TypeCounts,
};
pub use config::AnalyzerConfig;
pub use draft::{DeckDraft, DeckSubmission, SubmitError, DEFAULT_DECK_NAME};
pub use selection::{Deck, DeckRejection, DECK_SIZE};
pub use share::ShareCodeError;
