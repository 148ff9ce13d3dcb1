//! The deck being built: an ordered selection of distinct cards.
//!
//! `Deck` is an immutable value. Adding or removing a card returns a new
//! deck and leaves the original untouched, so a rejected add needs no
//! rollback. Backed by `im::Vector`, clones share structure.

use im::Vector;
use serde::Serialize;
use thiserror::Error;

use crate::cards::{Card, CardFilter, CardId, Catalog};

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 8;

/// Why a card could not be added to a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DeckRejection {
    #[error("deck already has 8 cards")]
    DeckFull,
    #[error("{0} is already in the deck")]
    DuplicateCard(CardId),
    #[error("{0} is not in the catalog")]
    UnknownCard(CardId),
}

/// Ordered selection of up to `DECK_SIZE` cards with distinct IDs.
///
/// Insertion order is preserved; share codes and saved decks list cards in
/// the order they were added.
///
/// ## Example
///
/// ```
/// use royale_deck::cards::{base_catalog, CardId};
/// use royale_deck::deck::Deck;
///
/// let catalog = base_catalog();
/// let knight = catalog.get(CardId::new(13)).unwrap();
///
/// let deck = Deck::new().add_card(knight).unwrap();
/// assert_eq!(deck.len(), 1);
///
/// // Duplicates are rejected and the deck is unchanged.
/// assert!(deck.add_card(knight).is_err());
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck by adding cards in order, stopping at the first rejection.
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Result<Self, DeckRejection> {
        cards
            .into_iter()
            .try_fold(Self::new(), |deck, card| deck.add_card(card))
    }

    /// Get the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check whether the deck has all `DECK_SIZE` cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= DECK_SIZE
    }

    /// Check if a card ID is in the deck.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Iterate over the cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card IDs in insertion order.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    /// Return a new deck with `card` appended.
    ///
    /// A full deck is rejected before a duplicate is.
    pub fn add_card(&self, card: &Card) -> Result<Self, DeckRejection> {
        if self.is_full() {
            return Err(DeckRejection::DeckFull);
        }
        if self.contains(card.id) {
            return Err(DeckRejection::DuplicateCard(card.id));
        }

        let mut cards = self.cards.clone();
        cards.push_back(card.clone());
        tracing::debug!(card = %card.name, size = cards.len(), "card added to deck");
        Ok(Self { cards })
    }

    /// Look `id` up in the catalog and add it.
    pub fn add_by_id(&self, id: CardId, catalog: &Catalog) -> Result<Self, DeckRejection> {
        let card = catalog.get(id).ok_or(DeckRejection::UnknownCard(id))?;
        self.add_card(card)
    }

    /// Return a new deck without the card `id`. Absent IDs are a no-op.
    #[must_use]
    pub fn remove_card(&self, id: CardId) -> Self {
        let Some(index) = self.cards.iter().position(|c| c.id == id) else {
            return self.clone();
        };

        let mut cards = self.cards.clone();
        cards.remove(index);
        tracing::debug!(%id, size = cards.len(), "card removed from deck");
        Self { cards }
    }

    /// Catalog cards matching `filter` that are not yet in the deck.
    #[must_use]
    pub fn available_cards<'a>(&self, catalog: &'a Catalog, filter: &CardFilter) -> Vec<&'a Card> {
        catalog
            .iter()
            .filter(|c| filter.matches(c) && !self.contains(c.id))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
