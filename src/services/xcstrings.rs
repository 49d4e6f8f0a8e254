use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{GenerateError, Result};

const EN_REGIONAL_FALLBACKS: [&str; 4] = ["en-US", "en-GB", "en-CA", "en-AU"];
const FINAL_FALLBACKS: [&str; 2] = ["en-US", "en"];

/// The `strings` table of an Xcode string catalog (`.xcstrings`).
///
/// Keys are the source-language strings. Nested entries are kept as raw
/// JSON; any shape mismatch below the top level reads as "not translated".
#[derive(Debug, Clone, Default)]
pub struct LocalizationTable {
    strings: Map<String, Value>,
}

impl LocalizationTable {
    pub fn load(path: &Path) -> Result<Self> {
        let data = super::text::read_text(path)?;
        let root: Value = serde_json::from_str(&data).map_err(|e| GenerateError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_value(root).ok_or_else(|| GenerateError::InvalidXcStrings {
            path: path.to_path_buf(),
        })
    }

    /// `None` when the document has no object-valued `strings` field.
    pub fn from_value(root: Value) -> Option<Self> {
        match root {
            Value::Object(mut obj) => match obj.remove("strings") {
                Some(Value::Object(strings)) => Some(LocalizationTable { strings }),
                _ => None,
            },
            _ => None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.strings.len()
    }

    /// Best translation of `key` for `locale`, walking [`fallback_chain`].
    pub fn lookup(&self, key: &str, locale: &str) -> Option<String> {
        let localizations = self
            .strings
            .get(key)
            .and_then(Value::as_object)?
            .get("localizations")
            .and_then(Value::as_object)?;

        fallback_chain(locale)
            .into_iter()
            .find_map(|candidate| string_unit_value(localizations, &candidate))
    }

    /// [`lookup`](Self::lookup) with an empty string for "not found".
    pub fn resolve(&self, key: &str, locale: &str) -> String {
        self.lookup(key, locale).unwrap_or_default()
    }
}

fn string_unit_value(localizations: &Map<String, Value>, locale: &str) -> Option<String> {
    let value = localizations
        .get(locale)
        .and_then(Value::as_object)?
        .get("stringUnit")
        .and_then(Value::as_object)?
        .get("value")
        .and_then(Value::as_str)?
        .trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Locales tried for `locale`, in order, without duplicates.
///
/// exact -> base language -> (for `en`) regional English -> en-US -> en
pub fn fallback_chain(locale: &str) -> Vec<String> {
    let mut candidates: Vec<&str> = vec![locale];

    if let Some((base, _)) = locale.split_once('-') {
        candidates.push(base);
    }
    if locale == "en" {
        candidates.extend(EN_REGIONAL_FALLBACKS);
    }
    candidates.extend(FINAL_FALLBACKS);

    let mut out: Vec<String> = Vec::with_capacity(candidates.len());
    for c in candidates {
        if !out.iter().any(|seen| seen == c) {
            out.push(c.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn unit(value: &str) -> Value {
        json!({ "stringUnit": { "state": "translated", "value": value } })
    }

    fn table(strings: Value) -> LocalizationTable {
        LocalizationTable::from_value(json!({ "sourceLanguage": "en", "strings": strings }))
            .unwrap()
    }

    #[test]
    fn chain_for_regional_locale() {
        assert_eq!(fallback_chain("es-ES"), vec!["es-ES", "es", "en-US", "en"]);
        assert_eq!(
            fallback_chain("zh-Hans"),
            vec!["zh-Hans", "zh", "en-US", "en"]
        );
    }

    #[test]
    fn chain_for_generic_english() {
        assert_eq!(
            fallback_chain("en"),
            vec!["en", "en-US", "en-GB", "en-CA", "en-AU"]
        );
        assert_eq!(fallback_chain("en-GB"), vec!["en-GB", "en", "en-US"]);
        assert_eq!(fallback_chain("en-US"), vec!["en-US", "en"]);
    }

    #[test]
    fn chain_splits_only_on_first_separator() {
        assert_eq!(
            fallback_chain("sr-Latn-RS"),
            vec!["sr-Latn-RS", "sr", "en-US", "en"]
        );
    }

    #[test]
    fn exact_match_beats_base_language() {
        let t = table(json!({
            "Home": { "localizations": { "es": unit("Casa"), "es-ES": unit("Inicio") } }
        }));
        assert_eq!(t.lookup("Home", "es-ES").as_deref(), Some("Inicio"));
        assert_eq!(t.lookup("Home", "es-419").as_deref(), Some("Casa"));
    }

    #[test]
    fn falls_back_to_en_us() {
        let t = table(json!({
            "Home": { "localizations": { "en-US": unit("Home US") } }
        }));
        assert_eq!(t.lookup("Home", "es-ES").as_deref(), Some("Home US"));
        assert_eq!(t.resolve("Home", "ja"), "Home US");
    }

    #[test]
    fn blank_values_are_skipped_and_results_trimmed() {
        let t = table(json!({
            "Home": { "localizations": { "fr": unit("   "), "en": unit("  Home  ") } }
        }));
        assert_eq!(t.lookup("Home", "fr").as_deref(), Some("Home"));
    }

    #[test]
    fn malformed_entries_read_as_absent() {
        let t = table(json!({
            "a": "not an object",
            "b": { "localizations": [] },
            "c": { "localizations": { "de": "text" } },
            "d": { "localizations": { "de": { "stringUnit": [] } } },
            "e": { "localizations": { "de": { "stringUnit": { "value": 3 } } } },
            "f": {}
        }));
        for key in ["a", "b", "c", "d", "e", "f", "missing"] {
            assert_eq!(t.lookup(key, "de"), None, "{key}");
            assert_eq!(t.resolve(key, "de"), "");
        }
    }

    #[test]
    fn strings_must_be_an_object() {
        assert!(LocalizationTable::from_value(json!({ "strings": [] })).is_none());
        assert!(LocalizationTable::from_value(json!({ "version": "1.0" })).is_none());
        assert!(LocalizationTable::from_value(json!([1, 2])).is_none());
        assert!(LocalizationTable::from_value(json!({ "strings": {} })).is_some());
    }

    #[test]
    fn load_reports_invalid_documents() {
        let dir = tempdir().unwrap();

        let bad_json = dir.path().join("bad.xcstrings");
        std::fs::write(&bad_json, "{ nope").unwrap();
        assert!(matches!(
            LocalizationTable::load(&bad_json),
            Err(GenerateError::Json { .. })
        ));

        let bad_shape = dir.path().join("shape.xcstrings");
        std::fs::write(&bad_shape, r#"{ "strings": "x" }"#).unwrap();
        assert!(matches!(
            LocalizationTable::load(&bad_shape),
            Err(GenerateError::InvalidXcStrings { .. })
        ));

        let good = dir.path().join("Localizable.xcstrings");
        std::fs::write(
            &good,
            r#"{ "sourceLanguage": "en", "strings": { "Home": { "localizations": { "ja": { "stringUnit": { "value": "ホーム" } } } } } }"#,
        )
        .unwrap();
        let t = LocalizationTable::load(&good).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.resolve("Home", "ja"), "ホーム");
    }

    proptest! {
        #[test]
        fn chain_is_duplicate_free_and_ends_in_english(locale in "[a-z]{2,3}(-[A-Za-z0-9]{2,4}){0,2}") {
            let chain = fallback_chain(&locale);
            prop_assert_eq!(chain[0].as_str(), locale.as_str());
            let mut sorted = chain.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), chain.len());
            prop_assert!(chain.iter().any(|c| c == "en-US"));
            prop_assert!(chain.iter().any(|c| c == "en"));
        }
    }
}
