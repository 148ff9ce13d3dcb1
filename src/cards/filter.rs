//! Card filters for catalog browsing and the deck builder's card picker.
//!
//! Every criterion is optional; an empty filter matches every card.

use rustc_hash::FxHashSet;

use super::definition::{Card, CardId, CardType, Rarity};

/// Conjunction of optional card criteria.
///
/// ## Example
///
/// ```
/// use royale_deck::cards::{base_catalog, CardFilter, CardType};
///
/// let catalog = base_catalog();
/// let filter = CardFilter::new().with_query("spirit").with_type(CardType::Troop);
///
/// let names: Vec<_> = catalog.filter(&filter).map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Electro Spirit", "Fire Spirit", "Ice Spirit", "Heal Spirit"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardFilter {
    /// Lowercased name fragment.
    query: Option<String>,
    card_type: Option<CardType>,
    elixir_cost: Option<u8>,
    rarity: Option<Rarity>,
    excluded: FxHashSet<CardId>,
}

impl CardFilter {
    /// Create a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match names containing `query`, ignoring case. A blank query is ignored.
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        let query = query.trim();
        self.query = (!query.is_empty()).then(|| query.to_lowercase());
        self
    }

    /// Match only cards of this type.
    #[must_use]
    pub fn with_type(mut self, card_type: CardType) -> Self {
        self.card_type = Some(card_type);
        self
    }

    /// Match only cards with exactly this elixir cost.
    #[must_use]
    pub fn with_elixir_cost(mut self, cost: u8) -> Self {
        self.elixir_cost = Some(cost);
        self
    }

    /// Match only cards of this rarity.
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    /// Reject the given card IDs (e.g. cards already in a deck).
    #[must_use]
    pub fn excluding(mut self, ids: impl IntoIterator<Item = CardId>) -> Self {
        self.excluded.extend(ids);
        self
    }

    /// Check whether a card satisfies every criterion.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        if self.excluded.contains(&card.id) {
            return false;
        }
        if self.card_type.is_some_and(|t| t != card.card_type) {
            return false;
        }
        if self.elixir_cost.is_some_and(|c| c != card.elixir_cost) {
            return false;
        }
        if self.rarity.is_some_and(|r| r != card.rarity) {
            return false;
        }
        match &self.query {
            Some(query) => card.name.to_lowercase().contains(query.as_str()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> Card {
        Card::new(CardId::new(1), "Knight", CardType::Troop, 3, Rarity::Common)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(CardFilter::new().matches(&knight()));
        assert!(CardFilter::new().with_query("   ").matches(&knight()));
    }

    #[test]
    fn test_query_ignores_case() {
        assert!(CardFilter::new().with_query("NIG").matches(&knight()));
        assert!(!CardFilter::new().with_query("giant").matches(&knight()));
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let filter = CardFilter::new()
            .with_type(CardType::Troop)
            .with_elixir_cost(3)
            .with_rarity(Rarity::Common);
        assert!(filter.matches(&knight()));

        let wrong_rarity = filter.clone().with_rarity(Rarity::Epic);
        assert!(!wrong_rarity.matches(&knight()));

        let wrong_cost = filter.with_elixir_cost(4);
        assert!(!wrong_cost.matches(&knight()));
    }

    #[test]
    fn test_excluded_ids() {
        let filter = CardFilter::new().excluding([CardId::new(1)]);
        assert!(!filter.matches(&knight()));
    }
}
