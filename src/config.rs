use std::path::{Path, PathBuf};

pub const DEFAULT_APP_NAME: &str = "MANDARA STEPS";
pub const DEFAULT_SUBTITLE: &str = "Goal planner & focus timer";
pub const DEFAULT_SUPPORT_LABEL: &str = "Support";

/// Static locale tables baked into the generator.
///
/// Website locales are the keys the site reads; store locales are the
/// fastlane metadata directory names. Every website locale must have a
/// store-locale entry, otherwise generation aborts.
#[derive(Debug, Clone, Copy)]
pub struct LocaleConfig {
    pub default_locale: &'static str,
    pub website_locales: &'static [&'static str],
    pub store_locales: &'static [(&'static str, &'static str)],
    pub rtl_locales: &'static [&'static str],
    pub support_labels: &'static [(&'static str, &'static str)],
    pub app_store_url: &'static str,
    pub updated_at: &'static str,
}

impl LocaleConfig {
    pub const BUILTIN: LocaleConfig = LocaleConfig {
        default_locale: "en-US",
        website_locales: &[
            "en", "en-US", "en-GB", "en-CA", "en-AU", "ja", "de", "fr", "es-ES", "es-419", "pt-BR",
            "ko", "zh-Hans", "zh-Hant", "it", "nl", "id", "vi", "th", "tr", "ar", "he", "hi", "pl",
            "ro", "cs", "hu", "el", "uk", "ru", "ms",
        ],
        store_locales: &[
            ("en", "en-US"),
            ("en-US", "en-US"),
            ("en-GB", "en-GB"),
            ("en-CA", "en-CA"),
            ("en-AU", "en-AU"),
            ("ja", "ja"),
            ("de", "de-DE"),
            ("fr", "fr-FR"),
            ("es-ES", "es-ES"),
            ("es-419", "es-MX"),
            ("pt-BR", "pt-BR"),
            ("ko", "ko"),
            ("zh-Hans", "zh-Hans"),
            ("zh-Hant", "zh-Hant"),
            ("it", "it"),
            ("nl", "nl-NL"),
            ("id", "id"),
            ("vi", "vi"),
            ("th", "th"),
            ("tr", "tr"),
            ("ar", "ar-SA"),
            ("he", "he"),
            ("hi", "hi"),
            ("pl", "pl"),
            ("ro", "ro"),
            ("cs", "cs"),
            ("hu", "hu"),
            ("el", "el"),
            ("uk", "uk"),
            ("ru", "ru"),
            ("ms", "ms"),
        ],
        rtl_locales: &["he", "ar"],
        support_labels: &[
            ("en", "Support"),
            ("en-US", "Support"),
            ("en-GB", "Support"),
            ("en-CA", "Support"),
            ("en-AU", "Support"),
            ("ja", "サポート"),
            ("de", "Support"),
            ("fr", "Assistance"),
            ("es-ES", "Soporte"),
            ("es-419", "Soporte"),
            ("pt-BR", "Suporte"),
            ("ko", "지원"),
            ("zh-Hans", "支持"),
            ("zh-Hant", "支援"),
            ("it", "Supporto"),
            ("nl", "Ondersteuning"),
            ("id", "Dukungan"),
            ("vi", "Hỗ trợ"),
            ("th", "การช่วยเหลือ"),
            ("tr", "Destek"),
            ("ar", "الدعم"),
            ("he", "תמיכה"),
            ("hi", "सहायता"),
            ("pl", "Wsparcie"),
            ("ro", "Suport"),
            ("cs", "Podpora"),
            ("hu", "Támogatás"),
            ("el", "Υποστήριξη"),
            ("uk", "Підтримка"),
            ("ru", "Поддержка"),
            ("ms", "Sokongan"),
        ],
        app_store_url: "https://apps.apple.com/app/id6758521973",
        updated_at: "2026-02-25",
    };

    pub fn store_locale(&self, locale: &str) -> Option<&'static str> {
        lookup(self.store_locales, locale)
    }

    pub fn support_label(&self, locale: &str) -> &'static str {
        lookup(self.support_labels, locale).unwrap_or(DEFAULT_SUPPORT_LABEL)
    }

    pub fn sorted_rtl_locales(&self) -> Vec<String> {
        let mut out: Vec<String> = self.rtl_locales.iter().map(|s| s.to_string()).collect();
        out.sort();
        out.dedup();
        out
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        LocaleConfig::BUILTIN
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Where inputs are read from and where the payload is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPaths {
    pub xcstrings: PathBuf,
    pub metadata_root: PathBuf,
    pub output: PathBuf,
}

impl GeneratorPaths {
    /// Standard layout: the app checkout holds the string catalog and the
    /// fastlane metadata, the site checkout receives `assets/i18n`.
    pub fn from_roots(site_root: &Path, app_root: &Path) -> Self {
        GeneratorPaths {
            xcstrings: app_root
                .join("MandariseApp")
                .join("Mandarise")
                .join("Localizable.xcstrings"),
            metadata_root: app_root.join("fastlane").join("metadata"),
            output: site_root.join("assets").join("i18n").join("translations.json"),
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(o) = output {
            self.output = o;
        }
        self
    }
}

/// The app checkout defaults to the directory that contains the site checkout.
pub fn default_app_root(site_root: &Path) -> PathBuf {
    site_root
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| site_root.to_path_buf())
}
