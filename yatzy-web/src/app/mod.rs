use crate::components::header::Header;
use crate::components::player_setup::PlayerSetup;
use crate::components::score_table::ScoreTable;
use crate::i18n::t;
use yew::prelude::*;

pub mod handlers;
pub mod phase;
pub mod state;

pub use phase::Phase;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();

    let on_lang_change = handlers::build_lang_change(&app_state);
    let on_start = handlers::build_start_game(&app_state);
    let on_edit = handlers::build_cell_edit(&app_state);
    let on_reset = handlers::build_reset_player(&app_state);
    let on_new_game = {
        let cb = handlers::build_new_game(&app_state);
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let body = match (*app_state.phase, (*app_state.store).clone()) {
        (Phase::Scoring, Some(store)) => {
            let finished = store.is_finished();
            html! {
                <>
                    if finished {
                        <p class="game-finished" role="status">{ t("ui.finished") }</p>
                    }
                    <ScoreTable {store} {on_edit} {on_reset} />
                    <button id="new-game-btn" onclick={on_new_game}>{ t("ui.newGame") }</button>
                </>
            }
        }
        _ => html! {
            <>
                <PlayerSetup {on_start} />
                if let Some(message) = (*app_state.setup_error).clone() {
                    <p class="setup-error" role="alert">{ message }</p>
                }
            </>
        },
    };

    html! {
        <>
            <Header {on_lang_change} current_lang={(*app_state.current_language).clone()} />
            <main id="main">{ body }</main>
        </>
    }
}
