//! i18n coverage tests to ensure all required keys are present

use serde_json::Value;
use std::collections::BTreeSet;
use yatzy_core::Row;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> Value {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"))
}

fn find_nested_key(json: &Value, key: &str) -> bool {
    key.split('.')
        .try_fold(json, |current, part| current.get(part))
        .is_some_and(Value::is_string)
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn locales_have_matching_keys() {
    let base_json = load_locale("en");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locale_codes() {
        let json = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        for key in &base_keys {
            assert!(
                keys.contains(key),
                "Missing key '{key}' in locale '{locale}'"
            );
        }
    }
}

#[test]
fn every_row_has_a_label() {
    for locale in locale_codes() {
        let json = load_locale(&locale);
        for row in Row::DISPLAY_ORDER {
            let key = row.label_key();
            assert!(find_nested_key(&json, &key), "Missing '{key}' in '{locale}'");
        }
    }
}

#[test]
fn locale_files_match_selector() {
    let mut listed: Vec<String> = crate::i18n::locales()
        .iter()
        .map(|meta| meta.code.to_string())
        .collect();
    listed.sort();
    assert_eq!(locale_codes(), listed);
}

#[test]
fn interpolated_strings_keep_placeholders() {
    for locale in locale_codes() {
        let json = load_locale(&locale);
        let text = json
            .pointer("/ui/duplicateName")
            .and_then(Value::as_str)
            .unwrap_or_default();
        assert!(text.contains("{name}"), "duplicateName in '{locale}' lost {{name}}");
    }
}
