//! Deck analyzer configuration.

use serde::{Deserialize, Serialize};

/// Thresholds used by the balance rules and the addition suggester.
///
/// The defaults are the values players know from the deck builder; they are
/// heuristics, so every one of them can be tuned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Average elixir above which a deck is too expensive (default: 4.5).
    pub expensive_threshold: f64,

    /// Average elixir below which a deck is too cheap (default: 3.0).
    pub cheap_threshold: f64,

    /// Decks with fewer troops than this get a warning (default: 3).
    pub min_troops: usize,

    /// Highest cost suggested to an expensive deck (default: 3).
    pub cheap_card_max_cost: u8,

    /// Lowest cost suggested to a cheap deck (default: 5).
    pub expensive_card_min_cost: u8,

    /// Maximum number of suggested additions (default: 3).
    pub max_suggestions: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            expensive_threshold: 4.5,
            cheap_threshold: 3.0,
            min_troops: 3,
            cheap_card_max_cost: 3,
            expensive_card_min_cost: 5,
            max_suggestions: 3,
        }
    }
}

impl AnalyzerConfig {
    /// Load from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the cheap/expensive average elixir thresholds.
    #[must_use]
    pub fn with_elixir_range(mut self, cheap: f64, expensive: f64) -> Self {
        self.cheap_threshold = cheap;
        self.expensive_threshold = expensive;
        self
    }

    /// Set the troop count below which a deck is warned.
    #[must_use]
    pub fn with_min_troops(mut self, min_troops: usize) -> Self {
        self.min_troops = min_troops;
        self
    }

    /// Set the cost bounds for suggested cheap and expensive cards.
    #[must_use]
    pub fn with_suggestion_costs(mut self, cheap_max: u8, expensive_min: u8) -> Self {
        self.cheap_card_max_cost = cheap_max;
        self.expensive_card_min_cost = expensive_min;
        self
    }

    /// Set the maximum number of suggested additions.
    #[must_use]
    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }
}
