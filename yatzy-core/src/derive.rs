//! Derivation engine: totals computed from one player's base categories.
//!
//! Every function here is pure. Totals stay hidden until the card is
//! complete so a half-filled sheet never shows a misleading sum.

use serde::{Deserialize, Serialize};

use crate::category::{Category, DerivedRow};
use crate::cell::CellValue;
use crate::rules::ScoringRules;

/// One player's base category values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScoreCard {
    cells: [CellValue; Category::COUNT],
}

impl ScoreCard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; Category::COUNT],
        }
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> CellValue {
        self.cells[category.index()]
    }

    pub const fn set(&mut self, category: Category, value: CellValue) {
        self.cells[category.index()] = value;
    }

    pub fn clear(&mut self) {
        self.cells = [None; Category::COUNT];
    }

    /// Categories paired with their values, in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, CellValue)> + '_ {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled_count() == 0
    }

    /// Running upper-section sum with unset faces counted as zero.
    #[must_use]
    pub fn upper_running_total(&self) -> u32 {
        sum_of(self, &Category::UPPER)
    }

    /// Sum of every base category with unset cells counted as zero.
    #[must_use]
    pub fn base_running_total(&self) -> u32 {
        sum_of(self, &Category::ALL)
    }
}

impl FromIterator<(Category, CellValue)> for ScoreCard {
    fn from_iter<I: IntoIterator<Item = (Category, CellValue)>>(iter: I) -> Self {
        let mut card = Self::new();
        for (category, value) in iter {
            card.set(category, value);
        }
        card
    }
}

fn sum_of(card: &ScoreCard, categories: &[Category]) -> u32 {
    categories
        .iter()
        .filter_map(|category| card.get(*category))
        .map(u32::from)
        .sum()
}

/// A derived total as the table is allowed to see it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivedValue {
    #[default]
    Hidden,
    Shown(u32),
}

impl DerivedValue {
    #[must_use]
    pub const fn value(self) -> Option<u32> {
        match self {
            Self::Hidden => None,
            Self::Shown(points) => Some(points),
        }
    }

    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Upper total, bonus, and game total for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DerivedScores {
    pub upper_total: DerivedValue,
    pub bonus: DerivedValue,
    pub game_total: DerivedValue,
}

impl DerivedScores {
    pub const HIDDEN: Self = Self {
        upper_total: DerivedValue::Hidden,
        bonus: DerivedValue::Hidden,
        game_total: DerivedValue::Hidden,
    };

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.upper_total.is_hidden() && self.bonus.is_hidden() && self.game_total.is_hidden()
    }

    #[must_use]
    pub const fn get(&self, row: DerivedRow) -> DerivedValue {
        match row {
            DerivedRow::UpperTotal => self.upper_total,
            DerivedRow::Bonus => self.bonus,
            DerivedRow::GameTotal => self.game_total,
        }
    }
}

/// True once every base category holds a value, struck zeros included.
#[must_use]
pub fn is_complete(card: &ScoreCard) -> bool {
    card.filled_count() == Category::COUNT
}

/// Compute the derived totals, hidden unless the card is complete.
#[must_use]
pub fn derive(card: &ScoreCard, rules: &ScoringRules) -> DerivedScores {
    if !is_complete(card) {
        return DerivedScores::HIDDEN;
    }
    let upper_total = card.upper_running_total();
    let bonus = rules.bonus_for(upper_total);
    DerivedScores {
        upper_total: DerivedValue::Shown(upper_total),
        bonus: DerivedValue::Shown(bonus),
        game_total: DerivedValue::Shown(card.base_running_total() + bonus),
    }
}
