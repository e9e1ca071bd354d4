//! Scoresheet rows: the fifteen base categories and the three derived totals.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directly entered scoring category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Pair,
    TwoPairs,
    ThreeOfAKind,
    FourOfAKind,
    SmallStraight,
    LargeStraight,
    FullHouse,
    Chance,
    Yatzy,
}

impl Category {
    pub const COUNT: usize = 15;

    /// Base categories in sheet order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Ones,
        Self::Twos,
        Self::Threes,
        Self::Fours,
        Self::Fives,
        Self::Sixes,
        Self::Pair,
        Self::TwoPairs,
        Self::ThreeOfAKind,
        Self::FourOfAKind,
        Self::SmallStraight,
        Self::LargeStraight,
        Self::FullHouse,
        Self::Chance,
        Self::Yatzy,
    ];

    pub const UPPER: [Self; 6] = [
        Self::Ones,
        Self::Twos,
        Self::Threes,
        Self::Fours,
        Self::Fives,
        Self::Sixes,
    ];

    /// Position within [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier shared with translation tables and snapshots.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ones => "ones",
            Self::Twos => "twos",
            Self::Threes => "threes",
            Self::Fours => "fours",
            Self::Fives => "fives",
            Self::Sixes => "sixes",
            Self::Pair => "pair",
            Self::TwoPairs => "twoPairs",
            Self::ThreeOfAKind => "threeOfAKind",
            Self::FourOfAKind => "fourOfAKind",
            Self::SmallStraight => "smallStraight",
            Self::LargeStraight => "largeStraight",
            Self::FullHouse => "fullHouse",
            Self::Chance => "chance",
            Self::Yatzy => "yatzy",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    #[must_use]
    pub const fn is_upper(self) -> bool {
        self.index() < Self::UPPER.len()
    }

    /// Die face counted by an upper-section category.
    #[must_use]
    pub const fn face(self) -> Option<u8> {
        match self {
            Self::Ones => Some(1),
            Self::Twos => Some(2),
            Self::Threes => Some(3),
            Self::Fours => Some(4),
            Self::Fives => Some(5),
            Self::Sixes => Some(6),
            _ => None,
        }
    }

    /// Highest score five dice can produce in this category.
    #[must_use]
    pub const fn max_score(self) -> u16 {
        match self {
            Self::Ones => 5,
            Self::Twos => 10,
            Self::Threes => 15,
            Self::Fours => 20,
            Self::Fives => 25,
            Self::Sixes | Self::Chance => 30,
            Self::Pair => 12,
            Self::TwoPairs => 22,
            Self::ThreeOfAKind => 18,
            Self::FourOfAKind => 24,
            Self::SmallStraight => 15,
            Self::LargeStraight => 20,
            Self::FullHouse => 28,
            Self::Yatzy => 50,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A computed total row. Never entered directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DerivedRow {
    UpperTotal,
    Bonus,
    GameTotal,
}

impl DerivedRow {
    pub const ALL: [Self; 3] = [Self::UpperTotal, Self::Bonus, Self::GameTotal];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::UpperTotal => "upperTotal",
            Self::Bonus => "bonus",
            Self::GameTotal => "gameTotal",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|row| row.key() == key)
    }
}

/// Any row on the printed sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Base(Category),
    Derived(DerivedRow),
}

impl Row {
    /// Rows in the order the paper sheet prints them.
    pub const DISPLAY_ORDER: [Self; 18] = [
        Self::Base(Category::Ones),
        Self::Base(Category::Twos),
        Self::Base(Category::Threes),
        Self::Base(Category::Fours),
        Self::Base(Category::Fives),
        Self::Base(Category::Sixes),
        Self::Derived(DerivedRow::UpperTotal),
        Self::Derived(DerivedRow::Bonus),
        Self::Base(Category::Pair),
        Self::Base(Category::TwoPairs),
        Self::Base(Category::ThreeOfAKind),
        Self::Base(Category::FourOfAKind),
        Self::Base(Category::SmallStraight),
        Self::Base(Category::LargeStraight),
        Self::Base(Category::FullHouse),
        Self::Base(Category::Chance),
        Self::Base(Category::Yatzy),
        Self::Derived(DerivedRow::GameTotal),
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Base(category) => category.key(),
            Self::Derived(row) => row.key(),
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Category::from_key(key)
            .map(Self::Base)
            .or_else(|| DerivedRow::from_key(key).map(Self::Derived))
    }

    #[must_use]
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::Derived(_))
    }

    /// Translation lookup key, e.g. `rows.fullHouse`.
    #[must_use]
    pub fn label_key(self) -> String {
        format!("rows.{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_for_every_row() {
        for row in Row::DISPLAY_ORDER {
            assert_eq!(Row::from_key(row.key()), Some(row));
        }
        assert_eq!(Row::from_key("fiveOfAKind"), None);
    }

    #[test]
    fn category_index_matches_sheet_order() {
        for (idx, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), idx);
        }
    }

    #[test]
    fn upper_section_is_the_six_faces() {
        let faces: Vec<u8> = Category::ALL.iter().filter_map(|c| c.face()).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
        assert!(Category::Sixes.is_upper());
        assert!(!Category::Pair.is_upper());
    }

    #[test]
    fn display_order_covers_each_row_once() {
        let base = Row::DISPLAY_ORDER.iter().filter(|r| !r.is_derived()).count();
        assert_eq!(base, Category::COUNT);
        assert_eq!(Row::DISPLAY_ORDER.len() - base, DerivedRow::ALL.len());
    }

    #[test]
    fn serde_uses_translation_keys() {
        let json = serde_json::to_string(&Category::ThreeOfAKind).unwrap();
        assert_eq!(json, "\"threeOfAKind\"");
        let parsed: DerivedRow = serde_json::from_str("\"gameTotal\"").unwrap();
        assert_eq!(parsed, DerivedRow::GameTotal);
    }

    #[test]
    fn max_scores_follow_five_dice_limits() {
        assert_eq!(Category::Ones.max_score(), 5);
        assert_eq!(Category::TwoPairs.max_score(), 22);
        assert_eq!(Category::Yatzy.max_score(), 50);
        let upper_max: u16 = Category::UPPER.iter().map(|c| c.max_score()).sum();
        assert_eq!(upper_max, 105);
    }
}
