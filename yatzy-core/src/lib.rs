//! Yatzy Scoresheet Core
//!
//! Platform-agnostic score store and derivation engine for a self-reported
//! Yatzy scoresheet. Players type raw category scores; this crate validates
//! them, keeps one card per player, and works out the upper total, bonus, and
//! game total once a card is complete. No UI, locale, or storage concerns.

pub mod category;
pub mod cell;
pub mod derive;
pub mod error;
pub mod hints;
pub mod rules;
pub mod snapshot;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use category::{Category, DerivedRow, Row};
pub use cell::{CellEntry, CellValue, STRIKE_MARK, parse_cell_input};
pub use derive::{DerivedScores, DerivedValue, ScoreCard, derive, is_complete};
pub use error::{LookupKind, ScoreError};
pub use hints::upper_par_hint;
pub use rules::ScoringRules;
pub use snapshot::{PlayerSnapshot, Snapshot};
pub use store::{PlayerId, PlayerRecord, ScoreStore};
pub use view::{CellView, PlayerColumn, RowView, SheetView};
