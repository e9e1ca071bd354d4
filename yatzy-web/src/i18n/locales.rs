use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
        flag: "🇬🇧",
    },
    LocaleMeta {
        code: "sv",
        name: "Svenska",
        flag: "🇸🇪",
    },
    LocaleMeta {
        code: "sq",
        name: "Shqip",
        flag: "🇦🇱",
    },
    LocaleMeta {
        code: "fi",
        name: "Suomi",
        flag: "🇫🇮",
    },
    LocaleMeta {
        code: "it",
        name: "Italiano",
        flag: "🇮🇹",
    },
    LocaleMeta {
        code: "ja",
        name: "日本語",
        flag: "🇯🇵",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("sv", include_str!("../../i18n/sv.json")),
    ("sq", include_str!("../../i18n/sq.json")),
    ("fi", include_str!("../../i18n/fi.json")),
    ("it", include_str!("../../i18n/it.json")),
    ("ja", include_str!("../../i18n/ja.json")),
];

/// Supported locales with their native names and flags.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|meta| meta.code == lang)
}

/// Parsed translation table for `lang`, or `None` for unknown codes.
pub fn load_translations(lang: &str) -> Option<Value> {
    let data = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;
    match serde_json::from_str(data) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("translation table for {lang} is malformed: {err}");
            None
        }
    }
}
