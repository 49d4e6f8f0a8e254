use serde::ser::{Serialize, Serializer};

use super::labels::LabelSet;

/// Top-level document written to `translations.json`.
#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub default_locale: String,
    pub available_locales: Vec<String>,
    pub rtl_locales: Vec<String>,
    pub app_store_url: String,
    pub updated_at: String,
    pub labels: LocaleLabels,
}

/// Label sets keyed by website locale, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleLabels(Vec<(String, LabelSet)>);

impl LocaleLabels {
    pub fn with_capacity(n: usize) -> Self {
        LocaleLabels(Vec::with_capacity(n))
    }

    /// Appends; callers insert each locale once, in output order.
    pub fn push(&mut self, locale: impl Into<String>, labels: LabelSet) {
        self.0.push((locale.into(), labels));
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for LocaleLabels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}
