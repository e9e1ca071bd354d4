use crate::app::phase::{Phase, phase_for};
use crate::app::state::AppState;
use crate::components::score_table::CellEdit;
use yatzy_core::{PlayerId, ScoreError, ScoreStore};
use yew::prelude::*;

/// Apply a typed cell edit, returning the updated sheet when it was accepted.
pub fn apply_edit(store: &ScoreStore, edit: &CellEdit) -> Option<ScoreStore> {
    let mut next = store.clone();
    match next.set_cell(edit.player, edit.category, &edit.raw) {
        Ok(_) => Some(next),
        Err(err) if err.is_rejected_input() => None,
        Err(err) => {
            log::error!("edit for {} {} failed: {err}", edit.player, edit.category);
            None
        }
    }
}

/// Localized message for a roster the store refused to seat.
pub fn start_error_text(err: &ScoreError) -> String {
    log::debug!("roster rejected: {err}");
    crate::i18n::t("ui.invalidRoster")
}

/// Clear one player's card.
pub fn apply_reset(store: &ScoreStore, player: PlayerId) -> Option<ScoreStore> {
    let mut next = store.clone();
    next.reset_player(player)
        .inspect_err(|err| log::error!("reset for {player} failed: {err}"))
        .ok()?;
    Some(next)
}

pub fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}

pub fn build_start_game(state: &AppState) -> Callback<Vec<String>> {
    let store = state.store.clone();
    let phase = state.phase.clone();
    let setup_error = state.setup_error.clone();
    Callback::from(move |names: Vec<String>| match ScoreStore::initialize(names) {
        Ok(started) => {
            log::info!("seated {} players", started.players().len());
            phase.set(phase_for(Some(&started)));
            store.set(Some(started));
            setup_error.set(None);
        }
        Err(err @ ScoreError::InvalidConfiguration(_)) => {
            setup_error.set(Some(start_error_text(&err)));
        }
        Err(err) => log::error!("could not start game: {err}"),
    })
}

pub fn build_cell_edit(state: &AppState) -> Callback<CellEdit> {
    let store = state.store.clone();
    Callback::from(move |edit: CellEdit| {
        if let Some(next) = (*store).as_ref().and_then(|current| apply_edit(current, &edit)) {
            store.set(Some(next));
        }
    })
}

pub fn build_reset_player(state: &AppState) -> Callback<PlayerId> {
    let store = state.store.clone();
    Callback::from(move |player: PlayerId| {
        if let Some(next) = (*store).as_ref().and_then(|current| apply_reset(current, player)) {
            store.set(Some(next));
        }
    })
}

pub fn build_new_game(state: &AppState) -> Callback<()> {
    let store = state.store.clone();
    let phase = state.phase.clone();
    Callback::from(move |()| {
        store.set(None);
        phase.set(Phase::Setup);
    })
}
