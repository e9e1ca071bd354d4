//! Score store: per-player category values plus their derived totals.
//!
//! Each mutation validates fully before writing, so a rejected edit leaves
//! the whole store exactly as it was.

use std::collections::HashSet;
use std::fmt;

use crate::category::{Category, DerivedRow, Row};
use crate::cell::{CellEntry, CellValue, parse_cell_input};
use crate::derive::{DerivedScores, ScoreCard, derive, is_complete};
use crate::error::ScoreError;
use crate::hints::upper_par_hint;
use crate::rules::ScoringRules;
use crate::snapshot::{PlayerSnapshot, Snapshot};
use crate::view::SheetView;

/// Stable handle for a seated player, assigned in seating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(usize);

impl PlayerId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A player's name, raw card, and cached derived totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    id: PlayerId,
    name: String,
    card: ScoreCard,
    derived: DerivedScores,
}

impl PlayerRecord {
    fn new(id: PlayerId, name: String, card: ScoreCard, rules: &ScoringRules) -> Self {
        Self {
            id,
            name,
            card,
            derived: derive(&card, rules),
        }
    }

    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn card(&self) -> &ScoreCard {
        &self.card
    }

    #[must_use]
    pub const fn derived(&self) -> &DerivedScores {
        &self.derived
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        is_complete(&self.card)
    }

    fn recompute(&mut self, rules: &ScoringRules) {
        self.derived = derive(&self.card, rules);
    }
}

/// Session scoresheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreStore {
    rules: ScoringRules,
    players: Vec<PlayerRecord>,
}

impl ScoreStore {
    /// Seat players with blank cards under the default rules.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidConfiguration`] when the list is empty or
    /// contains a blank or repeated name.
    pub fn initialize<I, S>(names: I) -> Result<Self, ScoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rules(names, ScoringRules::default())
    }

    /// Seat players with blank cards under explicit rules.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ScoreStore::initialize`].
    pub fn with_rules<I, S>(names: I, rules: ScoringRules) -> Result<Self, ScoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = validate_names(names)?;
        let players = names
            .into_iter()
            .enumerate()
            .map(|(idx, name)| PlayerRecord::new(PlayerId(idx), name, ScoreCard::new(), &rules))
            .collect();
        Ok(Self { rules, players })
    }

    /// Build a store straight from a snapshot.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ScoreStore::load_state`].
    pub fn from_snapshot(snapshot: &Snapshot, rules: ScoringRules) -> Result<Self, ScoreError> {
        let players = records_from_snapshot(snapshot, &rules)?;
        Ok(Self { rules, players })
    }

    #[must_use]
    pub const fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Look up a seated player.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFound`] for an id outside this session.
    pub fn player(&self, player: PlayerId) -> Result<&PlayerRecord, ScoreError> {
        self.players
            .get(player.index())
            .ok_or_else(|| ScoreError::player_not_found(player.to_string()))
    }

    fn player_mut(&mut self, player: PlayerId) -> Result<&mut PlayerRecord, ScoreError> {
        self.players
            .get_mut(player.index())
            .ok_or_else(|| ScoreError::player_not_found(player.to_string()))
    }

    /// Resolve a display name to its id.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFound`] when nobody at the table has that name.
    pub fn player_id(&self, name: &str) -> Result<PlayerId, ScoreError> {
        let name = name.trim();
        self.players
            .iter()
            .find(|record| record.name == name)
            .map(PlayerRecord::id)
            .ok_or_else(|| ScoreError::player_not_found(name))
    }

    /// Apply a raw cell edit and refresh the player's totals.
    ///
    /// Returns the value now stored in the cell.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidInput`] for malformed or out-of-range text,
    /// leaving the prior value in place, and [`ScoreError::NotFound`] for an
    /// unknown player.
    pub fn set_cell(
        &mut self,
        player: PlayerId,
        category: Category,
        raw: &str,
    ) -> Result<CellValue, ScoreError> {
        let rules = self.rules;
        let value = parse_checked(&rules, category, raw).inspect_err(|err| {
            log::debug!("ignored edit for {player} {category}: {err}");
        })?;
        let record = self.player_mut(player)?;
        record.card.set(category, value);
        record.recompute(&rules);
        Ok(value)
    }

    /// String-keyed variant of [`ScoreStore::set_cell`].
    ///
    /// Derived row keys are not editable and resolve to `NotFound`.
    ///
    /// # Errors
    ///
    /// As [`ScoreStore::set_cell`], plus [`ScoreError::NotFound`] for names
    /// or keys that do not exist.
    pub fn set_cell_by_key(
        &mut self,
        player: &str,
        key: &str,
        raw: &str,
    ) -> Result<CellValue, ScoreError> {
        let id = self.player_id(player)?;
        let category = base_category(key)?;
        self.set_cell(id, category, raw)
    }

    /// Current value of a base category.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFound`] for an unknown player.
    pub fn get_cell(&self, player: PlayerId, category: Category) -> Result<CellValue, ScoreError> {
        Ok(self.player(player)?.card.get(category))
    }

    /// Read any row by key. Base rows give the stored value; derived rows give
    /// the total, or `None` while it is hidden.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFound`] for an unknown name or row key.
    pub fn get_cell_by_key(&self, player: &str, key: &str) -> Result<Option<u32>, ScoreError> {
        let record = self.player(self.player_id(player)?)?;
        match Row::from_key(key) {
            Some(Row::Base(category)) => Ok(record.card.get(category).map(u32::from)),
            Some(Row::Derived(row)) => Ok(record.derived.get(row).value()),
            None => Err(ScoreError::category_not_found(key)),
        }
    }

    /// Derived totals as the table may show them.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFound`] for an unknown player.
    pub fn derived(&self, player: PlayerId) -> Result<DerivedScores, ScoreError> {
        Ok(self.player(player)?.derived)
    }

    /// Clear every category for one player. Struck zeros become unset too.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFound`] for an unknown player.
    pub fn reset_player(&mut self, player: PlayerId) -> Result<(), ScoreError> {
        let rules = self.rules;
        let record = self.player_mut(player)?;
        record.card.clear();
        record.recompute(&rules);
        Ok(())
    }

    /// Replace the whole sheet from a snapshot, recomputing every total.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::InvalidConfiguration`] for an empty player list or
    /// bad names, [`ScoreError::NotFound`] for unknown category keys, and
    /// [`ScoreError::InvalidInput`] for negative or out-of-range scores. The
    /// store is unchanged on error.
    pub fn load_state(&mut self, snapshot: &Snapshot) -> Result<(), ScoreError> {
        self.players = records_from_snapshot(snapshot, &self.rules)?;
        Ok(())
    }

    /// Export raw scores in seating order. Derived totals are never written.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let players = self
            .players
            .iter()
            .map(|record| PlayerSnapshot {
                name: record.name.clone(),
                scores: record
                    .card
                    .iter()
                    .map(|(category, value)| (category.key().to_string(), value.map(i64::from)))
                    .collect(),
            })
            .collect();
        Snapshot { players }
    }

    /// True when every player's card is complete.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(PlayerRecord::is_complete)
    }

    /// Par hint for an open upper-section cell.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::NotFound`] for an unknown player.
    pub fn upper_hint(
        &self,
        player: PlayerId,
        category: Category,
    ) -> Result<Option<u16>, ScoreError> {
        Ok(upper_par_hint(&self.player(player)?.card, category))
    }

    /// Table snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SheetView {
        SheetView::build(&self.players, self.is_finished())
    }
}

fn parse_checked(
    rules: &ScoringRules,
    category: Category,
    raw: &str,
) -> Result<CellValue, ScoreError> {
    match parse_cell_input(raw)? {
        CellEntry::Clear => Ok(None),
        CellEntry::Score(points) => rules.check_value(category, points).map(Some),
    }
}

fn base_category(key: &str) -> Result<Category, ScoreError> {
    Category::from_key(key).ok_or_else(|| ScoreError::category_not_found(key))
}

fn validate_names<I, S>(names: I) -> Result<Vec<String>, ScoreError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for name in names {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ScoreError::InvalidConfiguration(
                "player names must not be blank".to_string(),
            ));
        }
        if !seen.insert(name.to_string()) {
            return Err(ScoreError::InvalidConfiguration(format!(
                "duplicate player name '{name}'"
            )));
        }
        out.push(name.to_string());
    }
    if out.is_empty() {
        return Err(ScoreError::InvalidConfiguration(
            "at least one player is required".to_string(),
        ));
    }
    Ok(out)
}

fn records_from_snapshot(
    snapshot: &Snapshot,
    rules: &ScoringRules,
) -> Result<Vec<PlayerRecord>, ScoreError> {
    let names = validate_names(snapshot.players.iter().map(|player| player.name.as_str()))?;
    names
        .into_iter()
        .zip(&snapshot.players)
        .enumerate()
        .map(|(idx, (name, player))| {
            let card = card_from_scores(player, rules)?;
            Ok(PlayerRecord::new(PlayerId(idx), name, card, rules))
        })
        .collect()
}

fn card_from_scores(
    player: &PlayerSnapshot,
    rules: &ScoringRules,
) -> Result<ScoreCard, ScoreError> {
    let mut card = ScoreCard::new();
    for (key, value) in &player.scores {
        if DerivedRow::from_key(key).is_some() {
            log::debug!("dropping stored {key} for {}; totals are recomputed", player.name);
            continue;
        }
        let category = base_category(key)?;
        let value = match value {
            None => None,
            Some(points) => {
                let points = u16::try_from(*points)
                    .map_err(|_| ScoreError::invalid_input(points.to_string(), "out of range"))?;
                Some(rules.check_value(category, points)?)
            }
        };
        card.set(category, value);
    }
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::DerivedValue;
    use crate::error::LookupKind;

    fn two_player_store() -> (ScoreStore, PlayerId, PlayerId) {
        let store = ScoreStore::initialize(["Alice", "Bob"]).unwrap();
        let alice = store.player_id("Alice").unwrap();
        let bob = store.player_id("Bob").unwrap();
        (store, alice, bob)
    }

    fn fill_all(store: &mut ScoreStore, player: PlayerId, raw: &str) {
        for category in Category::ALL {
            store.set_cell(player, category, raw).unwrap();
        }
    }

    #[test]
    fn initialize_rejects_bad_player_lists() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            ScoreStore::initialize(empty),
            Err(ScoreError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ScoreStore::initialize(["Alice", " Alice "]),
            Err(ScoreError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ScoreStore::initialize(["Alice", "  "]),
            Err(ScoreError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn initialize_seats_players_in_order_with_blank_cards() {
        let store = ScoreStore::initialize(["Alice", "Bob", "Charlie"]).unwrap();
        let names: Vec<&str> = store.players().iter().map(PlayerRecord::name).collect();
        assert_eq!(names, ["Alice", "Bob", "Charlie"]);
        for (idx, record) in store.players().iter().enumerate() {
            assert_eq!(record.id().index(), idx);
            assert!(record.card().is_empty());
            assert!(record.derived().is_hidden());
        }
    }

    #[test]
    fn set_cell_follows_parsing_policy() {
        let (mut store, alice, _) = two_player_store();
        assert_eq!(store.set_cell(alice, Category::Chance, "22"), Ok(Some(22)));
        assert_eq!(store.set_cell(alice, Category::Yatzy, "-"), Ok(Some(0)));
        assert_eq!(store.get_cell(alice, Category::Yatzy), Ok(Some(0)));

        assert!(store.set_cell(alice, Category::Chance, "4a").is_err());
        assert!(store.set_cell(alice, Category::Chance, "-1").is_err());
        assert_eq!(store.get_cell(alice, Category::Chance), Ok(Some(22)));

        assert_eq!(store.set_cell(alice, Category::Chance, ""), Ok(None));
        assert_eq!(store.get_cell(alice, Category::Chance), Ok(None));
    }

    #[test]
    fn set_cell_rejects_values_above_category_max() {
        let (mut store, alice, _) = two_player_store();
        store.set_cell(alice, Category::Ones, "4").unwrap();
        let err = store.set_cell(alice, Category::Ones, "42").unwrap_err();
        assert!(err.is_rejected_input());
        assert_eq!(store.get_cell(alice, Category::Ones), Ok(Some(4)));
    }

    #[test]
    fn lenient_rules_accept_out_of_range_values() {
        let rules = ScoringRules {
            enforce_max_scores: false,
            ..ScoringRules::default()
        };
        let mut store = ScoreStore::with_rules(["Solo"], rules).unwrap();
        let solo = store.player_id("Solo").unwrap();
        assert_eq!(store.set_cell(solo, Category::Ones, "42"), Ok(Some(42)));
    }

    #[test]
    fn derived_rows_are_not_editable_by_key() {
        let (mut store, _, _) = two_player_store();
        let err = store.set_cell_by_key("Alice", "bonus", "50").unwrap_err();
        assert_eq!(
            err,
            ScoreError::NotFound {
                kind: LookupKind::Category,
                name: "bonus".to_string()
            }
        );
        assert_eq!(store.set_cell_by_key("Alice", "fullHouse", "28"), Ok(Some(28)));
        assert_eq!(store.get_cell_by_key("Alice", "fullHouse"), Ok(Some(28)));
    }

    #[test]
    fn derived_keys_read_through_the_totals() {
        let (mut store, alice, _) = two_player_store();
        assert_eq!(store.get_cell_by_key("Alice", "gameTotal"), Ok(None));
        for category in Category::ALL {
            store.set_cell(alice, category, "-").unwrap();
        }
        store.set_cell(alice, Category::Sixes, "30").unwrap();
        store.set_cell(alice, Category::Fives, "25").unwrap();
        store.set_cell(alice, Category::Fours, "12").unwrap();

        assert_eq!(store.get_cell_by_key("Alice", "upperTotal"), Ok(Some(67)));
        assert_eq!(store.get_cell_by_key("Alice", "bonus"), Ok(Some(50)));
        assert_eq!(store.get_cell_by_key("Alice", "gameTotal"), Ok(Some(117)));
        assert_eq!(
            store.get_cell_by_key("Alice", "grandTotal"),
            Err(ScoreError::NotFound {
                kind: LookupKind::Category,
                name: "grandTotal".to_string()
            })
        );
    }

    #[test]
    fn unknown_player_fails_loudly() {
        let (mut store, _, _) = two_player_store();
        assert!(matches!(
            store.get_cell_by_key("Carol", "ones"),
            Err(ScoreError::NotFound {
                kind: LookupKind::Player,
                ..
            })
        ));
        assert!(store.set_cell(PlayerId(9), Category::Ones, "1").is_err());
        assert!(store.reset_player(PlayerId(9)).is_err());
    }

    #[test]
    fn totals_appear_only_after_the_last_category() {
        let (mut store, alice, _) = two_player_store();
        for category in &Category::ALL[..Category::COUNT - 1] {
            store.set_cell(alice, *category, "-").unwrap();
            assert!(store.derived(alice).unwrap().is_hidden());
        }
        store.set_cell(alice, Category::Yatzy, "50").unwrap();
        let derived = store.derived(alice).unwrap();
        assert_eq!(derived.game_total, DerivedValue::Shown(50));

        store.set_cell(alice, Category::Ones, "").unwrap();
        assert!(store.derived(alice).unwrap().is_hidden());
    }

    #[test]
    fn reset_isolates_players() {
        let (mut store, alice, bob) = two_player_store();
        fill_all(&mut store, alice, "-");
        fill_all(&mut store, bob, "-");
        store.set_cell(bob, Category::Chance, "25").unwrap();
        let bob_before = store.player(bob).unwrap().clone();

        store.reset_player(alice).unwrap();

        assert!(store.player(alice).unwrap().card().is_empty());
        assert!(store.derived(alice).unwrap().is_hidden());
        assert_eq!(store.player(bob).unwrap(), &bob_before);
        assert_eq!(store.derived(bob).unwrap().game_total.value(), Some(25));
    }

    #[test]
    fn finished_requires_every_player() {
        let (mut store, alice, bob) = two_player_store();
        fill_all(&mut store, alice, "-");
        assert!(!store.is_finished());
        fill_all(&mut store, bob, "-");
        assert!(store.is_finished());
    }

    #[test]
    fn load_state_recomputes_and_ignores_stored_totals() {
        let (mut store, _, _) = two_player_store();
        let mut carol = PlayerSnapshot::new("Carol").with_score("gameTotal", Some(999));
        for category in Category::ALL {
            carol = carol.with_score(category.key(), Some(0));
        }
        carol = carol
            .with_score("sixes", Some(30))
            .with_score("fives", Some(25))
            .with_score("fours", Some(12));
        let snapshot = Snapshot {
            players: vec![carol, PlayerSnapshot::new("Dave").with_score("bonus", Some(50))],
        };

        store.load_state(&snapshot).unwrap();

        let carol = store.player_id("Carol").unwrap();
        let dave = store.player_id("Dave").unwrap();
        let derived = store.derived(carol).unwrap();
        assert_eq!(derived.upper_total.value(), Some(67));
        assert_eq!(derived.bonus.value(), Some(50));
        assert_eq!(derived.game_total.value(), Some(117));
        assert!(store.derived(dave).unwrap().is_hidden());
        assert!(store.player_id("Alice").is_err());
    }

    #[test]
    fn load_state_failure_leaves_store_untouched() {
        let (mut store, alice, _) = two_player_store();
        store.set_cell(alice, Category::Pair, "8").unwrap();
        let before = store.clone();

        let bad_key = Snapshot {
            players: vec![PlayerSnapshot::new("X").with_score("fiveOfAKind", Some(1))],
        };
        assert!(matches!(
            store.load_state(&bad_key),
            Err(ScoreError::NotFound { .. })
        ));
        let negative = Snapshot {
            players: vec![PlayerSnapshot::new("X").with_score("ones", Some(-1))],
        };
        assert!(store.load_state(&negative).unwrap_err().is_rejected_input());
        assert!(matches!(
            store.load_state(&Snapshot::default()),
            Err(ScoreError::InvalidConfiguration(_))
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn snapshot_exports_raw_scores_only() {
        let (mut store, alice, _) = two_player_store();
        store.set_cell(alice, Category::Twos, "8").unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.players.len(), 2);
        let alice_snap = snapshot.player("Alice").unwrap();
        assert_eq!(alice_snap.scores.len(), Category::COUNT);
        assert_eq!(alice_snap.scores.get("twos"), Some(&Some(8)));
        assert_eq!(alice_snap.scores.get("ones"), Some(&None));
        assert!(!alice_snap.scores.contains_key("gameTotal"));

        let restored = ScoreStore::from_snapshot(&snapshot, ScoringRules::default()).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn upper_hint_tracks_open_cells() {
        let (mut store, alice, _) = two_player_store();
        assert_eq!(store.upper_hint(alice, Category::Threes), Ok(Some(9)));
        store.set_cell(alice, Category::Threes, "12").unwrap();
        assert_eq!(store.upper_hint(alice, Category::Threes), Ok(None));
        assert_eq!(store.upper_hint(alice, Category::Ones), Ok(Some(2)));
    }
}
