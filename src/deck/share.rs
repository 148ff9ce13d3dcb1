//! Share codes: decks as hyphen-joined card IDs.
//!
//! `"13-22-10"` is a deck of cards 13, 22 and 10 in that order. The code is
//! embedded in share links as the `import` query parameter.

use thiserror::Error;

use super::selection::Deck;
use crate::cards::{CardId, Catalog};

/// Separator between card IDs in a share code.
pub const SEPARATOR: char = '-';

/// Error decoding or importing a share code.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShareCodeError {
    #[error("invalid card id {segment:?} at position {position}")]
    InvalidSegment { position: usize, segment: String },
    #[error("share code contains no cards from the catalog")]
    NoKnownCards,
}

/// Encode card IDs, in order.
///
/// ```
/// use royale_deck::cards::CardId;
/// use royale_deck::deck::share;
///
/// let code = share::encode(&[CardId::new(13), CardId::new(22), CardId::new(10)]);
/// assert_eq!(code, "13-22-10");
/// assert_eq!(share::decode(&code).unwrap()[1], CardId::new(22));
/// ```
#[must_use]
pub fn encode(ids: &[CardId]) -> String {
    let mut code = String::with_capacity(ids.len() * 3);
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            code.push(SEPARATOR);
        }
        code.push_str(&id.raw().to_string());
    }
    code
}

/// Decode a share code into card IDs, in order.
///
/// The inverse of [`encode`]. Surrounding whitespace is ignored and the
/// empty code decodes to no IDs.
pub fn decode(code: &str) -> Result<Vec<CardId>, ShareCodeError> {
    let code = code.trim();
    if code.is_empty() {
        return Ok(Vec::new());
    }

    code.split(SEPARATOR)
        .enumerate()
        .map(|(position, segment)| {
            // u32::from_str accepts a leading '+', share codes never contain one
            if !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(position, segment));
            }
            segment
                .parse::<u32>()
                .map(CardId::new)
                .map_err(|_| invalid(position, segment))
        })
        .collect()
}

fn invalid(position: usize, segment: &str) -> ShareCodeError {
    ShareCodeError::InvalidSegment {
        position,
        segment: segment.to_string(),
    }
}

/// Share link for `deck` under `base_url`.
#[must_use]
pub fn share_url(base_url: &str, deck: &Deck) -> String {
    format!(
        "{}/deck-builder?import={}",
        base_url.trim_end_matches('/'),
        encode(&deck.card_ids())
    )
}

/// Rebuild a deck from a share code.
///
/// Cards are added in code order. IDs missing from the catalog and cards
/// the deck rejects (repeats, anything past the eighth card) are skipped.
/// Fails only if the code is malformed or no card could be added.
pub fn import(code: &str, catalog: &Catalog) -> Result<Deck, ShareCodeError> {
    let ids = decode(code)?;

    let mut deck = Deck::new();
    for id in ids {
        match deck.add_by_id(id, catalog) {
            Ok(next) => deck = next,
            Err(rejection) => tracing::warn!(%id, %rejection, "skipping card in share code"),
        }
    }

    if deck.is_empty() {
        return Err(ShareCodeError::NoKnownCards);
    }
    tracing::debug!(cards = deck.len(), "deck imported from share code");
    Ok(deck)
}
