//! Side-by-side comparison of two cards.
//!
//! Produces the rows of the comparison table and chart, plus a verdict for
//! cost, toughness and popularity. Missing values count as zero.

use serde::Serialize;

use crate::cards::Card;
use crate::stats::CardStats;

/// A compared attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparedStat {
    Elixir,
    HitPoints,
    Damage,
    Usage,
}

impl ComparedStat {
    /// All stats in table order.
    pub const ALL: [ComparedStat; 4] = [
        ComparedStat::Elixir,
        ComparedStat::HitPoints,
        ComparedStat::Damage,
        ComparedStat::Usage,
    ];

    /// Row label for the comparison table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ComparedStat::Elixir => "Elixir",
            ComparedStat::HitPoints => "Hit Points",
            ComparedStat::Damage => "Damage",
            ComparedStat::Usage => "Usage",
        }
    }

    /// Divisor bringing the stat onto a shared radar chart axis.
    #[must_use]
    pub const fn chart_divisor(self) -> f64 {
        match self {
            ComparedStat::Elixir => 1.0,
            ComparedStat::HitPoints => 100.0,
            ComparedStat::Damage | ComparedStat::Usage => 10.0,
        }
    }

    fn value(self, card: &Card, stats: Option<&CardStats>) -> u32 {
        match self {
            ComparedStat::Elixir => u32::from(card.elixir_cost),
            ComparedStat::HitPoints => card.hit_points.unwrap_or(0),
            ComparedStat::Damage => card.damage.unwrap_or(0),
            ComparedStat::Usage => stats.map_or(0, |s| s.usage_count),
        }
    }
}

/// One row of the comparison.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRow {
    pub stat: ComparedStat,
    pub left: u32,
    pub right: u32,
    pub left_scaled: f64,
    pub right_scaled: f64,
}

/// Which side of a comparison comes out ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Left,
    Right,
    Tie,
}

impl Verdict {
    fn higher_wins(left: u32, right: u32) -> Self {
        match left.cmp(&right) {
            std::cmp::Ordering::Greater => Verdict::Left,
            std::cmp::Ordering::Less => Verdict::Right,
            std::cmp::Ordering::Equal => Verdict::Tie,
        }
    }
}

/// Comparison of two cards.
///
/// ## Example
///
/// ```
/// use royale_deck::cards::{base_catalog, CardId};
/// use royale_deck::compare::{CardComparison, Verdict};
///
/// let catalog = base_catalog();
/// let knight = catalog.get(CardId::new(13)).unwrap();
/// let valkyrie = catalog.get(CardId::new(25)).unwrap();
///
/// let comparison = CardComparison::new(knight, None, valkyrie, None);
/// assert_eq!(comparison.cheaper(), Verdict::Left);
/// assert_eq!(comparison.tougher(), Verdict::Tie);
/// ```
#[derive(Clone, Debug)]
pub struct CardComparison<'a> {
    left: &'a Card,
    right: &'a Card,
    rows: [StatRow; 4],
}

impl<'a> CardComparison<'a> {
    /// Compare `left` against `right`. Missing stats count as zero usage.
    #[must_use]
    pub fn new(
        left: &'a Card,
        left_stats: Option<&CardStats>,
        right: &'a Card,
        right_stats: Option<&CardStats>,
    ) -> Self {
        let rows = ComparedStat::ALL.map(|stat| {
            let l = stat.value(left, left_stats);
            let r = stat.value(right, right_stats);
            StatRow {
                stat,
                left: l,
                right: r,
                left_scaled: f64::from(l) / stat.chart_divisor(),
                right_scaled: f64::from(r) / stat.chart_divisor(),
            }
        });
        Self { left, right, rows }
    }

    /// Get the left-hand card.
    #[must_use]
    pub fn left(&self) -> &'a Card {
        self.left
    }

    /// Get the right-hand card.
    #[must_use]
    pub fn right(&self) -> &'a Card {
        self.right
    }

    /// Rows in `ComparedStat::ALL` order.
    #[must_use]
    pub fn rows(&self) -> &[StatRow] {
        &self.rows
    }

    /// Get the row for one stat.
    #[must_use]
    pub fn row(&self, stat: ComparedStat) -> &StatRow {
        // rows are built from ALL, so the index always matches
        &self.rows[stat as usize]
    }

    /// The side with the lower elixir cost.
    #[must_use]
    pub fn cheaper(&self) -> Verdict {
        let row = self.row(ComparedStat::Elixir);
        Verdict::higher_wins(row.right, row.left)
    }

    /// The side with more hit points.
    #[must_use]
    pub fn tougher(&self) -> Verdict {
        let row = self.row(ComparedStat::HitPoints);
        Verdict::higher_wins(row.left, row.right)
    }

    /// The side used more often.
    #[must_use]
    pub fn more_used(&self) -> Verdict {
        let row = self.row(ComparedStat::Usage);
        Verdict::higher_wins(row.left, row.right)
    }

    /// One sentence per verdict: cost, hit points, usage.
    #[must_use]
    pub fn summary(&self) -> [String; 3] {
        [
            self.describe(self.cheaper(), "is cheaper", "Same cost"),
            self.describe(self.tougher(), "has more hit points", "Same hit points"),
            self.describe(self.more_used(), "is used more", "Same usage"),
        ]
    }

    fn describe(&self, verdict: Verdict, winner: &str, tie: &str) -> String {
        match verdict {
            Verdict::Left => format!("{} {winner}", self.left.name),
            Verdict::Right => format!("{} {winner}", self.right.name),
            Verdict::Tie => tie.to_string(),
        }
    }
}
