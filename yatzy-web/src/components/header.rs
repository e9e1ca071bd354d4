use crate::i18n::{locales, t};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_lang_change: Callback<String>,
    pub current_lang: String,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <header role="banner">
            <h1 class="sheet-title">{ t("ui.title") }</h1>
            <nav aria-label={t("ui.language")} class="header-right">
                <label for="lang-select" class="sr-only">{ t("ui.language") }</label>
                <select id="lang-select" onchange={on_change} aria-label={t("ui.language")}>
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={meta.code == p.current_lang}>
                            { format!("{} {}", meta.flag, meta.name) }
                        </option>
                    }) }
                </select>
            </nav>
        </header>
    }
}
