//! Finalizing a deck for saving.
//!
//! A `DeckDraft` carries the metadata entered alongside a deck. Submitting
//! it checks the deck is complete and produces the `DeckSubmission` handed
//! to the persistence service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::analyzer::average_elixir;
use super::selection::{Deck, DECK_SIZE};
use crate::cards::CardId;

/// Name given to a fresh draft.
pub const DEFAULT_DECK_NAME: &str = "My Deck";

/// Why a deck cannot be submitted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a deck must have exactly {expected} cards, found {count}", expected = DECK_SIZE)]
    WrongSize { count: usize },
    #[error("deck name is blank")]
    EmptyName,
}

/// Metadata for a deck about to be saved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckDraft {
    pub name: String,
    pub description: String,
    pub is_public: bool,
}

impl Default for DeckDraft {
    fn default() -> Self {
        Self {
            name: DEFAULT_DECK_NAME.to_string(),
            description: String::new(),
            is_public: false,
        }
    }
}

impl DeckDraft {
    /// Create a private draft with no description.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the description shown with the saved deck.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Make the saved deck visible to other players.
    #[must_use]
    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }

    /// Validate `deck` and build the record for the persistence service.
    pub fn submit(&self, deck: &Deck) -> Result<DeckSubmission, SubmitError> {
        if deck.len() != DECK_SIZE {
            return Err(SubmitError::WrongSize { count: deck.len() });
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SubmitError::EmptyName);
        }
        let description = self.description.trim();

        Ok(DeckSubmission {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            card_ids: deck.card_ids(),
            average_elixir: average_elixir(deck),
            is_public: self.is_public,
        })
    }
}

/// A complete deck ready to be stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckSubmission {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Card IDs in deck order.
    pub card_ids: Vec<CardId>,
    pub average_elixir: f64,
    pub is_public: bool,
}
