use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_start: Callback<Vec<String>>,
}

/// Result of trying to add a typed name to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    Blank,
    Duplicate(String),
}

/// Trim `draft` and check it against the names already seated.
#[must_use]
pub fn try_add(names: &[String], draft: &str) -> AddOutcome {
    let name = draft.trim();
    if name.is_empty() {
        AddOutcome::Blank
    } else if names.iter().any(|existing| existing == name) {
        AddOutcome::Duplicate(name.to_string())
    } else {
        AddOutcome::Added(name.to_string())
    }
}

fn duplicate_message(name: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("name", name);
    tr("ui.duplicateName", Some(&args))
}

/// Roster screen shown before scoring starts.
#[function_component(PlayerSetup)]
pub fn player_setup(p: &Props) -> Html {
    let names = use_state(Vec::<String>::new);
    let draft = use_state(String::new);
    let error = use_state(|| None::<String>);

    let add = {
        let names = names.clone();
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |()| match try_add(&names, &draft) {
            AddOutcome::Added(name) => {
                let mut next = (*names).clone();
                next.push(name);
                names.set(next);
                draft.set(String::new());
                error.set(None);
            }
            AddOutcome::Blank => draft.set(String::new()),
            AddOutcome::Duplicate(name) => error.set(Some(duplicate_message(&name))),
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };
    let on_keydown = {
        let add = add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                add.emit(());
            }
        })
    };
    let on_add_click = {
        let add = add.clone();
        Callback::from(move |_: MouseEvent| add.emit(()))
    };
    let on_start_click = {
        let names = names.clone();
        let cb = p.on_start.clone();
        Callback::from(move |_: MouseEvent| {
            if !names.is_empty() {
                cb.emit((*names).clone());
            }
        })
    };

    html! {
        <section class="player-setup" aria-labelledby="players-heading">
            <h2 id="players-heading">{ t("ui.players") }</h2>
            <ol class="player-list">
                { for names.iter().map(|name| html! { <li>{ name.clone() }</li> }) }
            </ol>
            <div class="player-entry">
                <input
                    id="player-name"
                    type="text"
                    value={(*draft).clone()}
                    placeholder={t("ui.playerNamePlaceholder")}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button id="add-player-btn" onclick={on_add_click}>{ t("ui.add") }</button>
            </div>
            if let Some(message) = (*error).clone() {
                <p class="setup-error" role="alert">{ message }</p>
            }
            <button id="start-game-btn" disabled={names.is_empty()} onclick={on_start_click}>
                { t("ui.startGame") }
            </button>
        </section>
    }
}
