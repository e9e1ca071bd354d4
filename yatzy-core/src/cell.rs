//! Raw cell text parsing.
//!
//! Cells accept exactly three shapes of input once surrounding whitespace is
//! trimmed: nothing (clear the cell), a lone dash (strike the category for
//! zero), or a run of ASCII digits. Everything else is rejected and the cell
//! keeps whatever it held before.

use crate::error::ScoreError;

/// Stored content of a single category cell. `None` means never entered.
pub type CellValue = Option<u16>;

/// Marker a player types to strike a category.
pub const STRIKE_MARK: &str = "-";

/// Parsed form of a cell edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEntry {
    Clear,
    Score(u16),
}

impl CellEntry {
    #[must_use]
    pub const fn value(self) -> CellValue {
        match self {
            Self::Clear => None,
            Self::Score(points) => Some(points),
        }
    }
}

/// Parse free-form cell text.
///
/// # Errors
///
/// Returns [`ScoreError::InvalidInput`] for anything other than an empty
/// string, a single dash, or a digit string that fits in a `u16`.
pub fn parse_cell_input(raw: &str) -> Result<CellEntry, ScoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(CellEntry::Clear);
    }
    if trimmed == STRIKE_MARK {
        return Ok(CellEntry::Score(0));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScoreError::invalid_input(raw, "expected digits or '-'"));
    }
    trimmed
        .parse::<u16>()
        .map(CellEntry::Score)
        .map_err(|_| ScoreError::invalid_input(raw, "number too large"))
}
