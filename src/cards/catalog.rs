//! Card catalog snapshot.
//!
//! The `Catalog` stores every card supplied by the catalog service in its
//! natural iteration order, with an index for lookup by `CardId`. Order is
//! significant: deck suggestions and filters return cards in catalog order.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{Card, CardId, CardType};
use super::filter::CardFilter;

/// Error building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate card id {0}")]
    DuplicateId(CardId),
    #[error("duplicate card name {0:?}")]
    DuplicateName(String),
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, read-only set of card definitions.
///
/// ## Example
///
/// ```
/// use royale_deck::cards::{Card, CardId, CardType, Catalog, Rarity};
///
/// let catalog = Catalog::from_cards([
///     Card::new(CardId::new(1), "Knight", CardType::Troop, 3, Rarity::Common),
///     Card::new(CardId::new(2), "Zap", CardType::Spell, 2, Rarity::Common),
/// ])
/// .unwrap();
///
/// let found = catalog.get(CardId::new(2)).unwrap();
/// assert_eq!(found.name, "Zap");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from cards in iteration order.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.insert(card)?;
        }
        tracing::debug!(cards = catalog.len(), "catalog built");
        Ok(catalog)
    }

    /// Parse a JSON array of cards, as returned by the catalog service.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        Self::from_cards(cards)
    }

    /// Append a card.
    ///
    /// Names are unique ignoring case, IDs are unique.
    pub fn insert(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.index.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        if self.get_by_name(&card.name).is_some() {
            return Err(CatalogError::DuplicateName(card.name));
        }
        self.index.insert(card.id, self.cards.len());
        self.cards.push(card);
        Ok(())
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Get a card by exact name, ignoring case.
    ///
    /// Case folding is Unicode lowercasing, the same rule `search` uses.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Card> {
        let name = name.to_lowercase();
        self.cards.iter().find(|c| c.name.to_lowercase() == name)
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of cards in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards whose name contains `query`, ignoring case.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Card> {
        self.filter_owned(CardFilter::new().with_query(query))
    }

    /// Find cards by type.
    pub fn by_type(&self, card_type: CardType) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.card_type == card_type)
    }

    /// Find cards by exact elixir cost.
    pub fn by_elixir_cost(&self, cost: u8) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.elixir_cost == cost)
    }

    /// Find cards matching a filter.
    pub fn filter<'a>(&'a self, filter: &'a CardFilter) -> impl Iterator<Item = &'a Card> {
        self.cards.iter().filter(move |c| filter.matches(c))
    }

    fn filter_owned(&self, filter: CardFilter) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| filter.matches(c))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
