//! Deck balance analysis.
//!
//! Computes the derived values the deck builder shows next to a deck:
//! average elixir cost, card type counts, balance suggestions and cards
//! worth adding. Every function here is pure; results are recomputed from
//! the current deck whenever it changes.
//!
//! ## Rules
//!
//! Balance suggestions are evaluated in a fixed order and all matching
//! rules are reported:
//!
//! 1. Elixir cost: too expensive, too cheap, or well balanced (exactly one)
//! 2. Troop count: too few troops
//! 3. Spell count: no spells at all
//!
//! An empty deck gets no suggestions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::AnalyzerConfig;
use super::selection::Deck;
use crate::cards::{Card, CardType, Catalog};

/// Average elixir cost rounded half-up to one decimal place.
///
/// Returns 0 for no cards. Rounding is done in integer tenths, so the
/// result is the closest `f64` to the rounded decimal.
///
/// ```
/// use royale_deck::deck::average_elixir;
/// # use royale_deck::cards::{Card, CardId, CardType, Rarity};
/// # let cards: Vec<_> = (1..=8)
/// #     .map(|c| Card::new(CardId::new(c), format!("C{c}"), CardType::Troop, c as u8, Rarity::Common))
/// #     .collect();
///
/// assert_eq!(average_elixir(&cards), 4.5);
/// assert_eq!(average_elixir(&cards[..0]), 0.0);
/// ```
#[must_use]
pub fn average_elixir<'a>(cards: impl IntoIterator<Item = &'a Card>) -> f64 {
    let (count, total) = cards
        .into_iter()
        .fold((0u64, 0u64), |(n, sum), c| (n + 1, sum + u64::from(c.elixir_cost)));
    if count == 0 {
        return 0.0;
    }
    // round(total / count, 1) == floor((20 * total + count) / (2 * count)) / 10
    let tenths = (20 * total + count) / (2 * count);
    tenths as f64 / 10.0
}

/// Tone of a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Success,
    Warning,
}

/// The rule that produced a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BalanceRule {
    ElixirCost,
    TroopCount,
    SpellCount,
}

/// Human-readable advice about a deck's composition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSuggestion {
    pub kind: SuggestionKind,
    pub rule: BalanceRule,
    pub message: String,
}

impl BalanceSuggestion {
    fn warning(rule: BalanceRule, message: impl Into<String>) -> Self {
        Self {
            kind: SuggestionKind::Warning,
            rule,
            message: message.into(),
        }
    }

    fn success(rule: BalanceRule, message: impl Into<String>) -> Self {
        Self {
            kind: SuggestionKind::Success,
            rule,
            message: message.into(),
        }
    }

    /// Check if this suggestion is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.kind == SuggestionKind::Warning
    }
}

/// Number of cards of each type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCounts {
    pub troops: usize,
    pub spells: usize,
    pub buildings: usize,
    pub tower_troops: usize,
}

impl TypeCounts {
    /// Count cards by type.
    #[must_use]
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut counts = Self::default();
        for card in cards {
            match card.card_type {
                CardType::Troop => counts.troops += 1,
                CardType::Spell => counts.spells += 1,
                CardType::Building => counts.buildings += 1,
                CardType::TowerTroop => counts.tower_troops += 1,
            }
        }
        counts
    }

    /// Get the count for one card type.
    #[must_use]
    pub fn get(&self, card_type: CardType) -> usize {
        match card_type {
            CardType::Troop => self.troops,
            CardType::Spell => self.spells,
            CardType::Building => self.buildings,
            CardType::TowerTroop => self.tower_troops,
        }
    }
}

/// Everything the deck builder displays about a deck, in one snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckAnalysis {
    pub card_count: usize,
    pub average_elixir: f64,
    pub type_counts: TypeCounts,
    pub suggestions: SmallVec<[BalanceSuggestion; 3]>,
    pub suggested_additions: SmallVec<[Card; 3]>,
}

/// Balance rule engine.
///
/// ## Example
///
/// ```
/// use royale_deck::cards::{base_catalog, CardId};
/// use royale_deck::deck::{Deck, DeckAnalyzer, SuggestionKind};
///
/// let catalog = base_catalog();
/// let deck = [13, 22, 10]  // Knight, Musketeer, Zap
///     .into_iter()
///     .try_fold(Deck::new(), |d, id| d.add_by_id(CardId::new(id), &catalog))
///     .unwrap();
///
/// let analysis = DeckAnalyzer::default().analyze(&deck, &catalog);
/// assert_eq!(analysis.average_elixir, 3.0);
/// assert_eq!(analysis.suggestions[0].kind, SuggestionKind::Success);
/// assert!(analysis.suggested_additions.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckAnalyzer {
    config: AnalyzerConfig,
}

impl DeckAnalyzer {
    /// Create an analyzer with the given thresholds.
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Get the analyzer configuration.
    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Balance advice for `deck` given its rounded average elixir.
    #[must_use]
    pub fn balance_suggestions(&self, deck: &Deck, average: f64) -> SmallVec<[BalanceSuggestion; 3]> {
        let mut suggestions = SmallVec::new();
        if deck.is_empty() {
            return suggestions;
        }

        let elixir = if average > self.config.expensive_threshold {
            BalanceSuggestion::warning(
                BalanceRule::ElixirCost,
                "Deck is too expensive! Consider adding cards with a lower elixir cost.",
            )
        } else if average < self.config.cheap_threshold {
            BalanceSuggestion::warning(
                BalanceRule::ElixirCost,
                "Deck is too cheap! Add higher-cost cards for more power.",
            )
        } else {
            BalanceSuggestion::success(BalanceRule::ElixirCost, "Elixir cost is well balanced!")
        };
        suggestions.push(elixir);

        let counts = TypeCounts::from_cards(deck);
        if counts.troops < self.config.min_troops {
            suggestions.push(BalanceSuggestion::warning(
                BalanceRule::TroopCount,
                format!("You only have {} troops. Consider adding more.", counts.troops),
            ));
        }
        if counts.spells == 0 {
            suggestions.push(BalanceSuggestion::warning(
                BalanceRule::SpellCount,
                "Your deck has no spells! Add at least one for more versatility.",
            ));
        }

        suggestions
    }

    /// Catalog cards that would pull the average back into range.
    ///
    /// Cheap cards for an expensive deck, expensive cards for a cheap one,
    /// nothing for a balanced or complete deck. Candidates come in catalog
    /// order.
    #[must_use]
    pub fn suggested_additions<'a>(
        &self,
        deck: &Deck,
        average: f64,
        catalog: &'a Catalog,
    ) -> SmallVec<[&'a Card; 3]> {
        if deck.is_full() {
            return SmallVec::new();
        }

        let costs = if average > self.config.expensive_threshold {
            0..=self.config.cheap_card_max_cost
        } else if average < self.config.cheap_threshold {
            self.config.expensive_card_min_cost..=u8::MAX
        } else {
            return SmallVec::new();
        };

        catalog
            .iter()
            .filter(|c| costs.contains(&c.elixir_cost) && !deck.contains(c.id))
            .take(self.config.max_suggestions)
            .collect()
    }

    /// Compute every derived value for `deck`.
    #[must_use]
    pub fn analyze(&self, deck: &Deck, catalog: &Catalog) -> DeckAnalysis {
        let average = average_elixir(deck);
        let suggestions = self.balance_suggestions(deck, average);
        let suggested_additions = self
            .suggested_additions(deck, average, catalog)
            .into_iter()
            .cloned()
            .collect();

        tracing::trace!(
            cards = deck.len(),
            average,
            warnings = suggestions.iter().filter(|s| s.is_warning()).count(),
            "deck analyzed"
        );

        DeckAnalysis {
            card_count: deck.len(),
            average_elixir: average,
            type_counts: TypeCounts::from_cards(deck),
            suggestions,
            suggested_additions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Rarity};

    fn card(id: u32, card_type: CardType, cost: u8) -> Card {
        Card::new(CardId::new(id), format!("Card {id}"), card_type, cost, Rarity::Common)
    }

    fn deck_of(cards: &[Card]) -> Deck {
        Deck::from_cards(cards).unwrap()
    }

    #[test]
    fn test_average_rounds_half_up() {
        let cards = [
            card(1, CardType::Troop, 4),
            card(2, CardType::Troop, 4),
            card(3, CardType::Troop, 4),
            card(4, CardType::Troop, 5),
        ];
        // 17 / 4 = 4.25
        assert_eq!(average_elixir(&cards), 4.3);

        let thirds = [card(1, CardType::Troop, 3), card(2, CardType::Troop, 3), card(3, CardType::Troop, 4)];
        // 10 / 3 = 3.333...
        assert_eq!(average_elixir(&thirds), 3.3);
    }

    #[test]
    fn test_type_counts() {
        let cards = [
            card(1, CardType::Troop, 3),
            card(2, CardType::Spell, 2),
            card(3, CardType::Troop, 4),
            card(4, CardType::Building, 5),
        ];
        let counts = TypeCounts::from_cards(&cards);

        assert_eq!(counts.troops, 2);
        assert_eq!(counts.get(CardType::Spell), 1);
        assert_eq!(counts.get(CardType::Building), 1);
        assert_eq!(counts.tower_troops, 0);
    }

    #[test]
    fn test_troop_warning_names_count() {
        let deck = deck_of(&[card(1, CardType::Troop, 3), card(2, CardType::Spell, 3)]);
        let suggestions = DeckAnalyzer::default().balance_suggestions(&deck, 3.0);

        let troop = suggestions
            .iter()
            .find(|s| s.rule == BalanceRule::TroopCount)
            .unwrap();
        assert_eq!(troop.message, "You only have 1 troops. Consider adding more.");
    }

    #[test]
    fn test_rules_emitted_in_order() {
        let deck = deck_of(&[card(1, CardType::Building, 8)]);
        let suggestions = DeckAnalyzer::default().balance_suggestions(&deck, 8.0);

        let rules: Vec<_> = suggestions.iter().map(|s| s.rule).collect();
        assert_eq!(rules, [BalanceRule::ElixirCost, BalanceRule::TroopCount, BalanceRule::SpellCount]);
        assert!(suggestions.iter().all(BalanceSuggestion::is_warning));
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let deck = deck_of(&[card(1, CardType::Troop, 3)]);
        let analyzer = DeckAnalyzer::default();

        for average in [3.0, 4.5] {
            let suggestions = analyzer.balance_suggestions(&deck, average);
            assert_eq!(suggestions[0].kind, SuggestionKind::Success, "average {average}");
        }
    }

    #[test]
    fn test_custom_config() {
        let deck = deck_of(&[card(1, CardType::Troop, 3), card(2, CardType::Spell, 2)]);
        let analyzer = DeckAnalyzer::new(AnalyzerConfig::default().with_min_troops(1));

        let suggestions = analyzer.balance_suggestions(&deck, 2.5);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].rule, BalanceRule::ElixirCost);
    }

    #[test]
    fn test_cheap_deck_gets_expensive_cards() {
        let catalog = Catalog::from_cards([
            card(1, CardType::Troop, 1),
            card(2, CardType::Troop, 5),
            card(3, CardType::Spell, 6),
            card(4, CardType::Troop, 4),
            card(5, CardType::Troop, 8),
            card(6, CardType::Troop, 7),
        ])
        .unwrap();
        let deck = deck_of(&[catalog.get(CardId::new(1)).unwrap().clone()]);

        let ids: Vec<_> = DeckAnalyzer::default()
            .suggested_additions(&deck, 1.0, &catalog)
            .iter()
            .map(|c| c.id.raw())
            .collect();
        assert_eq!(ids, [2, 3, 5]);
    }

    #[test]
    fn test_balanced_deck_gets_no_additions() {
        let catalog = Catalog::from_cards([card(1, CardType::Troop, 2), card(2, CardType::Troop, 6)]).unwrap();
        let deck = deck_of(&[card(3, CardType::Troop, 4)]);

        assert!(DeckAnalyzer::default()
            .suggested_additions(&deck, 4.0, &catalog)
            .is_empty());
    }

    #[test]
    fn test_additions_skip_selected_cards() {
        let catalog = Catalog::from_cards([
            card(1, CardType::Troop, 2),
            card(2, CardType::Troop, 3),
            card(3, CardType::Troop, 8),
        ])
        .unwrap();
        let deck = deck_of(&[catalog.get(CardId::new(1)).unwrap().clone(), catalog.get(CardId::new(3)).unwrap().clone()]);

        let ids: Vec<_> = DeckAnalyzer::default()
            .suggested_additions(&deck, 5.0, &catalog)
            .iter()
            .map(|c| c.id.raw())
            .collect();
        assert_eq!(ids, [2]);
    }

    #[test]
    fn test_analysis_serialization() {
        let catalog = Catalog::from_cards([card(1, CardType::Spell, 2)]).unwrap();
        let deck = deck_of(&[card(2, CardType::Troop, 7)]);
        let analysis = DeckAnalyzer::default().analyze(&deck, &catalog);

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["cardCount"], 1);
        assert_eq!(json["averageElixir"], 7.0);
        assert_eq!(json["typeCounts"]["troops"], 1);
        assert_eq!(json["suggestions"][0]["kind"], "warning");
        assert_eq!(json["suggestions"][0]["rule"], "elixirCost");
        assert_eq!(json["suggestedAdditions"][0]["id"], 1);
    }
}
