use crate::i18n::{fmt_number, t};
use yatzy_core::{
    Category, CellEntry, CellView, PlayerId, Row, RowView, STRIKE_MARK, ScoreStore, ScoringRules,
    parse_cell_input,
};
use yew::prelude::*;

/// Raw text typed into a base cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub player: PlayerId,
    pub category: Category,
    pub raw: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub store: ScoreStore,
    pub on_edit: Callback<CellEdit>,
    pub on_reset: Callback<PlayerId>,
}

const NAVIGATION_KEYS: [&str; 8] = [
    "Backspace",
    "Delete",
    "ArrowLeft",
    "ArrowRight",
    "Home",
    "End",
    "Tab",
    "Enter",
];

/// Whether a key press may reach a score input.
#[must_use]
pub fn allowed_key(key: &str) -> bool {
    key == STRIKE_MARK
        || NAVIGATION_KEYS.contains(&key)
        || (key.len() == 1 && key.bytes().all(|b| b.is_ascii_digit()))
}

/// Text shown inside a base-category input. Struck cells show the strike mark.
#[must_use]
pub fn input_text(cell: CellView) -> String {
    match cell {
        CellView::Value(0) => STRIKE_MARK.to_string(),
        CellView::Value(points) => points.to_string(),
        CellView::Blank | CellView::Hidden => String::new(),
    }
}

/// Text to put back into a cell whose edit the sheet would reject, or `None`
/// when `raw` is accepted.
#[must_use]
pub fn restore_text(
    rules: &ScoringRules,
    category: Category,
    raw: &str,
    current: CellView,
) -> Option<String> {
    let accepted = match parse_cell_input(raw) {
        Ok(CellEntry::Clear) => true,
        Ok(CellEntry::Score(points)) => rules.check_value(category, points).is_ok(),
        Err(_) => false,
    };
    (!accepted).then(|| input_text(current))
}

/// Text shown for a derived total.
#[must_use]
pub fn derived_text(cell: CellView) -> String {
    cell.value().map(fmt_number).unwrap_or_default()
}

fn cell_id(row: Row, player: PlayerId) -> String {
    format!("cell-{}-{}", row.key(), player.index())
}

fn base_input(
    store: &ScoreStore,
    category: Category,
    player: PlayerId,
    cell: CellView,
    on_edit: &Callback<CellEdit>,
) -> Html {
    let oninput = {
        let cb = on_edit.clone();
        let rules = *store.rules();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let raw = input.value();
            // The sheet keeps its value on rejection; the DOM must follow.
            if let Some(text) = restore_text(&rules, category, &raw, cell) {
                input.set_value(&text);
                return;
            }
            cb.emit(CellEdit {
                player,
                category,
                raw,
            });
        })
    };
    let onkeydown = Callback::from(|e: KeyboardEvent| {
        if !(e.ctrl_key() || e.meta_key() || allowed_key(&e.key())) {
            e.prevent_default();
        }
    });
    let placeholder = store
        .upper_hint(player, category)
        .ok()
        .flatten()
        .map(|hint| hint.to_string());
    let max = category.max_score().to_string();

    html! {
        <input
            id={cell_id(Row::Base(category), player)}
            class="score-input"
            type="text"
            inputmode="numeric"
            max={max.clone()}
            title={max}
            value={input_text(cell)}
            placeholder={placeholder}
            oninput={oninput}
            onkeydown={onkeydown}
        />
    }
}

fn render_row(
    store: &ScoreStore,
    row: &RowView,
    players: &[PlayerId],
    on_edit: &Callback<CellEdit>,
) -> Html {
    let class = if row.row.is_derived() {
        "derived-row"
    } else {
        "base-row"
    };
    html! {
        <tr class={class}>
            <th scope="row">{ t(&row.row.label_key()) }</th>
            { for row.cells.iter().zip(players).map(|(cell, player)| match row.row {
                Row::Base(category) => html! {
                    <td>{ base_input(store, category, *player, *cell, on_edit) }</td>
                },
                Row::Derived(_) => html! {
                    <td id={cell_id(row.row, *player)} class="derived-cell">{ derived_text(*cell) }</td>
                },
            }) }
        </tr>
    }
}

/// Player columns by scoring rows.
#[function_component(ScoreTable)]
pub fn score_table(p: &Props) -> Html {
    let view = p.store.view();
    let players: Vec<PlayerId> = view.columns.iter().map(|column| column.id).collect();

    html! {
        <table class={classes!("score-table", view.finished.then_some("finished"))}>
            <thead>
                <tr>
                    <th scope="col"></th>
                    { for view.columns.iter().map(|column| {
                        let on_reset = {
                            let cb = p.on_reset.clone();
                            let id = column.id;
                            Callback::from(move |_: MouseEvent| cb.emit(id))
                        };
                        html! {
                            <th scope="col">
                                <span class="player-name">{ column.name.clone() }</span>
                                <button class="reset-btn" onclick={on_reset}>{ t("ui.reset") }</button>
                            </th>
                        }
                    }) }
                </tr>
            </thead>
            <tbody>
                { for view.rows.iter().map(|row| render_row(&p.store, row, &players, &p.on_edit)) }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yatzy_core::DerivedRow;
    use yew::LocalServerRenderer;

    #[test]
    fn key_filter_allows_digits_strike_and_navigation() {
        for key in ["0", "7", "-", "Backspace", "Tab", "ArrowLeft", "Enter"] {
            assert!(allowed_key(key), "{key}");
        }
        for key in ["a", "e", "+", ".", " ", "12", "F5"] {
            assert!(!allowed_key(key), "{key}");
        }
    }

    #[test]
    fn cell_texts_follow_visibility() {
        assert_eq!(input_text(CellView::Blank), "");
        assert_eq!(input_text(CellView::Value(0)), "-");
        assert_eq!(input_text(CellView::Value(18)), "18");
        assert_eq!(derived_text(CellView::Hidden), "");
        assert_eq!(derived_text(CellView::Value(174)), "174");
    }

    #[test]
    fn rejected_text_is_replaced_by_the_stored_value() {
        let rules = ScoringRules::default_config();
        assert_eq!(
            restore_text(&rules, Category::Sixes, "31", CellView::Value(3)),
            Some("3".to_string())
        );
        assert_eq!(
            restore_text(&rules, Category::Sixes, "3-", CellView::Value(3)),
            Some("3".to_string())
        );
        assert_eq!(
            restore_text(&rules, Category::Yatzy, "5x", CellView::Value(0)),
            Some("-".to_string())
        );
        assert_eq!(
            restore_text(&rules, Category::Chance, "99", CellView::Blank),
            Some(String::new())
        );
    }

    #[test]
    fn accepted_text_stays_in_the_input() {
        let rules = ScoringRules::default_config();
        for raw in ["", "  ", "-", "30", " 18 "] {
            assert_eq!(
                restore_text(&rules, Category::Sixes, raw, CellView::Value(3)),
                None,
                "{raw:?}"
            );
        }
        let lenient = ScoringRules {
            enforce_max_scores: false,
            ..ScoringRules::default_config()
        };
        assert_eq!(
            restore_text(&lenient, Category::Sixes, "31", CellView::Blank),
            None
        );
    }

    #[test]
    fn table_renders_inputs_and_hides_incomplete_totals() {
        crate::i18n::set_lang("en");
        let mut store = ScoreStore::initialize(["Alice"]).unwrap();
        let alice = store.player_id("Alice").unwrap();
        store.set_cell(alice, Category::Yatzy, "-").unwrap();
        let props = Props {
            store,
            on_edit: Callback::noop(),
            on_reset: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ScoreTable>::with_props(props).render());
        assert!(html.contains("Alice"));
        assert!(html.contains("cell-yatzy-0"));
        assert!(html.contains("Full House"));
        assert!(html.contains(&cell_id(Row::Derived(DerivedRow::GameTotal), alice)));
        assert!(!html.contains("finished"));
    }
}
