use yatzy_core::ScoreStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Scoring,
}

/// Screen to show for the current session.
#[must_use]
pub const fn phase_for(store: Option<&ScoreStore>) -> Phase {
    match store {
        Some(_) => Phase::Scoring,
        None => Phase::Setup,
    }
}
