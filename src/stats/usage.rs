//! Per-card usage statistics and popularity ranking.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardType, Catalog};

/// Default number of cards in a popularity ranking.
pub const DEFAULT_POPULAR_LIMIT: usize = 10;

/// Usage statistics for one card.
///
/// Rates are whole percentages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStats {
    pub card_id: CardId,
    pub usage_count: u32,
    pub win_rate: u32,
    pub pick_rate: u32,
    pub avg_deck_position: u32,
}

impl CardStats {
    /// Create zeroed stats for a card.
    #[must_use]
    pub fn new(card_id: CardId) -> Self {
        Self {
            card_id,
            usage_count: 0,
            win_rate: 0,
            pick_rate: 0,
            avg_deck_position: 0,
        }
    }

    /// Count one more use, returning the new usage count.
    pub fn record_usage(&mut self) -> u32 {
        self.usage_count = self.usage_count.saturating_add(1);
        self.usage_count
    }
}

/// A card with its stats, as listed in a popularity ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopularCard<'a> {
    pub card: &'a Card,
    pub stats: &'a CardStats,
}

/// Stats for every card that has any.
///
/// ## Example
///
/// ```
/// use royale_deck::cards::{base_catalog, CardId};
/// use royale_deck::stats::StatsTable;
///
/// let catalog = base_catalog();
/// let mut stats = StatsTable::new();
/// stats.record_usage(CardId::new(24));
/// stats.record_usage(CardId::new(24));
/// stats.record_usage(CardId::new(13));
///
/// let popular = stats.popular(&catalog, 10);
/// assert_eq!(popular[0].card.name, "Hog Rider");
/// assert_eq!(popular[0].stats.usage_count, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StatsTable {
    stats: FxHashMap<CardId, CardStats>,
}

impl StatsTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the stats for a card.
    pub fn insert(&mut self, stats: CardStats) {
        self.stats.insert(stats.card_id, stats);
    }

    /// Get the stats for a card, if it has any.
    #[must_use]
    pub fn get(&self, card_id: CardId) -> Option<&CardStats> {
        self.stats.get(&card_id)
    }

    /// Count one use of `card_id`, creating its stats on first use.
    pub fn record_usage(&mut self, card_id: CardId) -> u32 {
        self.stats
            .entry(card_id)
            .or_insert_with(|| CardStats::new(card_id))
            .record_usage()
    }

    /// Get the number of cards with stats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Check if no card has stats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// The `limit` most used catalog cards, most used first.
    ///
    /// Ties keep catalog order. Stats for cards missing from the catalog
    /// are ignored.
    #[must_use]
    pub fn popular<'a>(&'a self, catalog: &'a Catalog, limit: usize) -> Vec<PopularCard<'a>> {
        let mut ranked: Vec<_> = catalog
            .iter()
            .filter_map(|card| self.get(card.id).map(|stats| PopularCard { card, stats }))
            .collect();
        // stable sort keeps catalog order among equal counts
        ranked.sort_by(|a, b| b.stats.usage_count.cmp(&a.stats.usage_count));
        ranked.truncate(limit);
        ranked
    }
}

impl FromIterator<CardStats> for StatsTable {
    fn from_iter<T: IntoIterator<Item = CardStats>>(iter: T) -> Self {
        let mut table = Self::new();
        for stats in iter {
            table.insert(stats);
        }
        table
    }
}

/// Sum of usage counts.
#[must_use]
pub fn total_usage(popular: &[PopularCard<'_>]) -> u64 {
    popular.iter().map(|p| u64::from(p.stats.usage_count)).sum()
}

/// How many troops, spells and buildings appear in a ranking.
///
/// Empty buckets are left out.
#[must_use]
pub fn type_distribution(popular: &[PopularCard<'_>]) -> Vec<(CardType, usize)> {
    [CardType::Troop, CardType::Spell, CardType::Building]
        .into_iter()
        .map(|t| (t, popular.iter().filter(|p| p.card.is(t)).count()))
        .filter(|&(_, n)| n > 0)
        .collect()
}
