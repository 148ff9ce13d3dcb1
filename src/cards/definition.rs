//! Card definitions - static card data.
//!
//! `Card` holds the immutable properties of a card as supplied by the
//! catalog service. For example, "Knight" is a 3-elixir Common troop with
//! 1200 hit points - these never change while a deck is being built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Error parsing a card type or rarity from its display name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("unknown card type: {0:?}")]
    UnknownType(String),
    #[error("unknown rarity: {0:?}")]
    UnknownRarity(String),
}

/// Card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Troop,
    Spell,
    Building,
    #[serde(rename = "Tower Troop")]
    TowerTroop,
}

impl CardType {
    /// All card types in display order.
    pub const ALL: [CardType; 4] = [
        CardType::Troop,
        CardType::Spell,
        CardType::Building,
        CardType::TowerTroop,
    ];

    /// Display name, as used by the catalog service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Troop => "Troop",
            CardType::Spell => "Spell",
            CardType::Building => "Building",
            CardType::TowerTroop => "Tower Troop",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardType {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseCardError::UnknownType(s.to_string()))
    }
}

/// Card rarity, from most to least common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Champion,
}

impl Rarity {
    /// All rarities in display order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Champion,
    ];

    /// Display name, as used by the catalog service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Champion => "Champion",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseCardError::UnknownRarity(s.to_string()))
    }
}

/// Static card data.
///
/// Combat attributes are optional: spells have no hit points, some
/// support troops deal no damage.
///
/// ## Example
///
/// ```
/// use royale_deck::cards::{Card, CardId, CardType, Rarity};
///
/// let knight = Card::new(CardId::new(13), "Knight", CardType::Troop, 3, Rarity::Common)
///     .with_hit_points(1200)
///     .with_damage(150);
///
/// assert_eq!(knight.elixir_cost, 3);
/// assert_eq!(knight.hit_points, Some(1200));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Unique display name.
    pub name: String,

    #[serde(rename = "type")]
    pub card_type: CardType,

    /// Elixir cost, 1-8 for every card seen so far.
    pub elixir_cost: u8,

    pub rarity: Rarity,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_points: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,

    /// Deploy time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_time: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
}

impl Card {
    /// Create a card with no description or combat attributes.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        card_type: CardType,
        elixir_cost: u8,
        rarity: Rarity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            elixir_cost,
            rarity,
            description: String::new(),
            hit_points: None,
            damage: None,
            deploy_time: None,
            speed: None,
            range: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set hit points.
    #[must_use]
    pub fn with_hit_points(mut self, hit_points: u32) -> Self {
        self.hit_points = Some(hit_points);
        self
    }

    /// Set damage per hit.
    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Set deploy time in seconds.
    #[must_use]
    pub fn with_deploy_time(mut self, seconds: u32) -> Self {
        self.deploy_time = Some(seconds);
        self
    }

    /// Set movement or cast speed.
    #[must_use]
    pub fn with_speed(mut self, speed: impl Into<String>) -> Self {
        self.speed = Some(speed.into());
        self
    }

    /// Set attack range.
    #[must_use]
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Check the card type.
    #[must_use]
    pub fn is(&self, card_type: CardType) -> bool {
        self.card_type == card_type
    }
}
