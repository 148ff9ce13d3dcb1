//! Clan and player leaderboards.

use serde::{Deserialize, Serialize};

/// Default number of entries on a leaderboard page.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

/// Anything that can be ranked by trophies and looked up by tag.
pub trait Ranked {
    fn trophies(&self) -> u32;
    fn tag(&self) -> &str;
}

/// A clan as stored by the leaderboard service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clan {
    pub id: u32,
    pub name: String,
    pub tag: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trophies: u32,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub required_trophies: u32,
    #[serde(default)]
    pub region: Option<String>,
}

impl Ranked for Clan {
    fn trophies(&self) -> u32 {
        self.trophies
    }

    fn tag(&self) -> &str {
        &self.tag
    }
}

/// A player as stored by the leaderboard service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub tag: String,
    #[serde(default)]
    pub trophies: u32,
    #[serde(default)]
    pub best_trophies: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub arena: Option<String>,
    #[serde(default)]
    pub clan_id: Option<u32>,
}

fn default_level() -> u32 {
    1
}

impl Player {
    /// Percentage of games won, to one decimal place. Zero with no games.
    ///
    /// ```
    /// # use royale_deck::rankings::Player;
    /// let player: Player = serde_json::from_str(
    ///     r##"{"id": 1, "name": "Ana", "tag": "#P1", "wins": 2, "losses": 1}"##,
    /// ).unwrap();
    /// assert_eq!(player.win_rate(), 66.7);
    /// ```
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let games = u64::from(self.wins) + u64::from(self.losses);
        if games == 0 {
            return 0.0;
        }
        (u64::from(self.wins) as f64 * 1000.0 / games as f64).round() / 10.0
    }
}

impl Ranked for Player {
    fn trophies(&self) -> u32 {
        self.trophies
    }

    fn tag(&self) -> &str {
        &self.tag
    }
}

/// Players belonging to `clan_id`, in input order.
#[must_use]
pub fn players_in_clan(players: &[Player], clan_id: u32) -> Vec<&Player> {
    players.iter().filter(|p| p.clan_id == Some(clan_id)).collect()
}

/// Trophy bracket used for leaderboard badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrophyTier {
    Rookie,
    Veteran,
    Champion,
    Elite,
}

impl TrophyTier {
    /// Bracket for a trophy count.
    #[must_use]
    pub const fn for_trophies(trophies: u32) -> Self {
        match trophies {
            5000.. => TrophyTier::Elite,
            4000.. => TrophyTier::Champion,
            3000.. => TrophyTier::Veteran,
            _ => TrophyTier::Rookie,
        }
    }
}

/// One ranked row.
#[derive(Debug)]
pub struct RankedEntry<'a, T> {
    /// 1-based position.
    pub rank: usize,
    pub tier: TrophyTier,
    pub entry: &'a T,
}

/// Entries ranked by trophies.
///
/// ## Example
///
/// ```
/// use royale_deck::rankings::{Clan, Leaderboard, TrophyTier};
///
/// let clan = |id: u32, trophies: u32| Clan {
///     id,
///     name: format!("Clan {id}"),
///     tag: format!("#C{id}"),
///     description: None,
///     trophies,
///     member_count: 10,
///     required_trophies: 0,
///     region: None,
/// };
/// let board = Leaderboard::new(vec![clan(1, 3200), clan(2, 5100)]);
///
/// let top = board.top(10);
/// assert_eq!(top[0].entry.id, 2);
/// assert_eq!(top[0].tier, TrophyTier::Elite);
/// assert_eq!(top[1].rank, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Leaderboard<T> {
    entries: Vec<T>,
}

impl<T: Ranked> Leaderboard<T> {
    /// Create a leaderboard over unsorted entries.
    #[must_use]
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }

    /// Get the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `limit` entries with the most trophies, best first.
    ///
    /// Equal trophy counts keep input order.
    #[must_use]
    pub fn top(&self, limit: usize) -> Vec<RankedEntry<'_, T>> {
        let mut sorted: Vec<&T> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.trophies().cmp(&a.trophies()));
        sorted
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, entry)| RankedEntry {
                rank: i + 1,
                tier: TrophyTier::for_trophies(entry.trophies()),
                entry,
            })
            .collect()
    }

    /// Exact tag lookup.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.tag() == tag)
    }
}

impl<T: Ranked> FromIterator<T> for Leaderboard<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
