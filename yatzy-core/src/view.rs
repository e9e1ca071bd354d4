//! Read-only table snapshot handed to presentation layers.
use serde::{Deserialize, Serialize};

use crate::category::{DerivedRow, Row};
use crate::derive::{DerivedScores, DerivedValue};
use crate::store::{PlayerId, PlayerRecord};

/// What a single table cell should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    /// Base category never entered.
    Blank,
    Value(u32),
    /// Derived total withheld until the card is complete.
    Hidden,
}

impl CellView {
    #[must_use]
    pub const fn value(self) -> Option<u32> {
        match self {
            Self::Value(points) => Some(points),
            Self::Blank | Self::Hidden => None,
        }
    }
}

impl From<DerivedValue> for CellView {
    fn from(value: DerivedValue) -> Self {
        match value {
            DerivedValue::Hidden => Self::Hidden,
            DerivedValue::Shown(points) => Self::Value(points),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerColumn {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub row: Row,
    /// One entry per player column, in column order.
    pub cells: Vec<CellView>,
}

/// Full table: player columns and every row in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetView {
    pub columns: Vec<PlayerColumn>,
    pub rows: Vec<RowView>,
    pub finished: bool,
}

impl SheetView {
    pub(crate) fn build(players: &[PlayerRecord], finished: bool) -> Self {
        let columns = players
            .iter()
            .map(|record| PlayerColumn {
                id: record.id(),
                name: record.name().to_string(),
            })
            .collect();
        let rows = Row::DISPLAY_ORDER
            .into_iter()
            .map(|row| RowView {
                row,
                cells: players.iter().map(|record| cell_for(record, row)).collect(),
            })
            .collect();
        Self {
            columns,
            rows,
            finished,
        }
    }

    #[must_use]
    pub fn row(&self, row: Row) -> Option<&RowView> {
        self.rows.iter().find(|view| view.row == row)
    }

    #[must_use]
    pub fn cell(&self, row: Row, player: PlayerId) -> Option<CellView> {
        let column = self.columns.iter().position(|col| col.id == player)?;
        self.row(row)
            .and_then(|view| view.cells.get(column))
            .copied()
    }
}

fn cell_for(record: &PlayerRecord, row: Row) -> CellView {
    match row {
        Row::Base(category) => record
            .card()
            .get(category)
            .map_or(CellView::Blank, |points| CellView::Value(u32::from(points))),
        Row::Derived(derived) => derived_cell(record.derived(), derived),
    }
}

fn derived_cell(scores: &DerivedScores, row: DerivedRow) -> CellView {
    match row {
        DerivedRow::UpperTotal => scores.upper_total.into(),
        DerivedRow::Bonus => scores.bonus.into(),
        DerivedRow::GameTotal => scores.game_total.into(),
    }
}
