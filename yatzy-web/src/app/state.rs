use crate::app::phase::Phase;
use yatzy_core::ScoreStore;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    pub store: UseStateHandle<Option<ScoreStore>>,
    pub setup_error: UseStateHandle<Option<String>>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        phase: use_state(|| Phase::Setup),
        store: use_state(|| None::<ScoreStore>),
        setup_error: use_state(|| None::<String>),
        current_language: use_state(crate::i18n::current_lang),
    }
}
