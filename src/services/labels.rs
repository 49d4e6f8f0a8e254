use std::path::Path;

use crate::config::{LocaleConfig, DEFAULT_APP_NAME, DEFAULT_SUBTITLE};
use crate::error::{GenerateError, Result};
use crate::model::description::ParsedDescription;
use crate::model::labels::LabelSet;
use crate::parsers;
use crate::services::text::read_text_or;
use crate::services::xcstrings::LocalizationTable;

// Source-language keys in the app's string catalog.
const KEY_WELCOME: &str = "Welcome to Mandarise";
const KEY_HERO_SUBTITLE: &str = "Set a goal and break it down with a mandala plan.";
const KEY_PRIVACY_POLICY: &str = "Privacy Policy";
const KEY_HOME: &str = "Home";
const KEY_TRUST_BODY: &str = "Local-first. No accounts. No ads in v1.0.";
const KEY_TRUST_DETAIL: &str = "Mandarise is local-first. Your goals, sessions, logs, and \
selected photos stay on device. We do not collect accounts, location, or ad identifiers in v1.0.";
const KEY_FEATURES_HEADING: &str = "What matters most today?";
const KEY_CREATE_GOAL: &str = "Create Goal";
const KEY_GOAL_BODY: &str = "Tap a card to set a goal";
const KEY_FOCUS_BODY: &str = "Set a focus for today.";
const KEY_LOGS: &str = "Logs";
const KEY_LOGS_BODY: &str = "No logs yet. Complete a focus session to get started.";
const KEY_PRIVACY: &str = "Privacy";

const FEATURES_HEADING: &str = "What You Can Do";
const FOCUS_TITLE: &str = "Focus / Timer";
const CTA_APP_STORE: &str = "App Store";
const PUBLISHER_HEADING: &str = "Mandala Interactive Works (MIW)";

// Positions of feature copy inside the description bullet list.
const BULLET_GOAL_TITLE: usize = 0;
const BULLET_FOCUS_TITLE: usize = 1;
const BULLET_LOGS_TITLE: usize = 2;
const BULLET_FOCUS_BODY: usize = 4;

/// Store metadata for one locale, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreMetadata {
    pub name: String,
    pub subtitle: String,
    pub description: ParsedDescription,
}

impl StoreMetadata {
    pub fn load(locale_dir: &Path) -> Result<Self> {
        let name = read_label_or(&locale_dir.join("name.txt"), DEFAULT_APP_NAME)?;
        let subtitle = read_label_or(&locale_dir.join("subtitle.txt"), DEFAULT_SUBTITLE)?;
        let description = read_text_or(&locale_dir.join("description.txt"), "")?;

        Ok(StoreMetadata {
            name,
            subtitle,
            description: parsers::description::parse(&description),
        })
    }
}

// An empty name or subtitle file counts as missing.
fn read_label_or(path: &Path, default: &str) -> Result<String> {
    let text = read_text_or(path, default)?;
    Ok(if text.is_empty() { default.to_string() } else { text })
}

pub struct LabelAssembler<'a> {
    pub config: &'a LocaleConfig,
    pub table: &'a LocalizationTable,
    pub metadata_root: &'a Path,
}

impl<'a> LabelAssembler<'a> {
    /// Reads the store metadata for `locale` and builds its label set.
    pub fn assemble(&self, locale: &str) -> Result<LabelSet> {
        let store_locale = self.config.store_locale(locale).ok_or_else(|| {
            GenerateError::MissingStoreLocale {
                locale: locale.to_string(),
            }
        })?;

        let metadata = StoreMetadata::load(&self.metadata_root.join(store_locale))?;

        tracing::debug!(
            locale,
            store_locale,
            bullets = metadata.description.bullets.len(),
            "assembling labels"
        );

        Ok(self.build(locale, &metadata))
    }

    pub fn build(&self, locale: &str, metadata: &StoreMetadata) -> LabelSet {
        let lookup = |key: &str| self.table.lookup(key, locale);
        let desc = &metadata.description;
        let name = metadata.name.as_str();
        let subtitle = metadata.subtitle.as_str();
        let support = self.config.support_label(locale);

        let hero_title = lookup(KEY_WELCOME).unwrap_or_else(|| format!("Welcome to {name}"));
        let hero_subtitle = lookup(KEY_HERO_SUBTITLE)
            .or_else(|| non_empty(&desc.headline))
            .unwrap_or_else(|| KEY_HERO_SUBTITLE.to_string());
        let nav_privacy = or_literal(lookup(KEY_PRIVACY_POLICY), KEY_PRIVACY_POLICY);
        let nav_home = or_literal(lookup(KEY_HOME), KEY_HOME);

        let trust_body = lookup(KEY_TRUST_BODY)
            .or_else(|| non_empty(&desc.trust_line))
            .unwrap_or_else(|| KEY_TRUST_BODY.to_string());
        let trust_detail = lookup(KEY_TRUST_DETAIL).unwrap_or_else(|| trust_body.clone());

        let page_description = format!("{hero_subtitle} {trust_body}").trim().to_string();

        let feature_goal_title = bullet_or(desc, BULLET_GOAL_TITLE, || {
            or_literal(lookup(KEY_CREATE_GOAL), KEY_CREATE_GOAL)
        });
        let feature_focus_title = bullet_or(desc, BULLET_FOCUS_TITLE, || FOCUS_TITLE.to_string());
        let feature_logs_title =
            bullet_or(desc, BULLET_LOGS_TITLE, || or_literal(lookup(KEY_LOGS), KEY_LOGS));
        let feature_focus_body = bullet_or(desc, BULLET_FOCUS_BODY, || {
            or_literal(lookup(KEY_FOCUS_BODY), KEY_FOCUS_BODY)
        });

        let mission = non_empty(&desc.mission_line).unwrap_or_else(|| hero_subtitle.clone());

        LabelSet {
            app_name: name.to_string(),
            app_tagline: subtitle.to_string(),
            page_title: format!("{name} | {subtitle}"),
            page_description,
            support_page_title: format!("{support} | {name}"),
            support_page_description: format!("{support} · {name}"),
            privacy_page_title: format!("{nav_privacy} | {name}"),
            privacy_page_description: trust_body.clone(),
            hero_title,
            hero_subtitle,
            cta_app_store: CTA_APP_STORE.to_string(),
            nav_support: support.to_string(),
            nav_privacy: nav_privacy.clone(),
            nav_home,
            features_heading: or_literal(lookup(KEY_FEATURES_HEADING), FEATURES_HEADING),
            feature_goal_title,
            feature_goal_body: or_literal(lookup(KEY_GOAL_BODY), KEY_GOAL_BODY),
            feature_focus_title,
            feature_focus_body,
            feature_logs_title,
            feature_logs_body: or_literal(lookup(KEY_LOGS_BODY), KEY_LOGS_BODY),
            trust_title: or_literal(lookup(KEY_PRIVACY), KEY_PRIVACY),
            trust_body,
            trust_detail,
            publisher_heading: PUBLISHER_HEADING.to_string(),
            publisher_mission: mission.clone(),
            support_title: support.to_string(),
            support_hint: mission,
            privacy_title: nav_privacy,
            language_name: locale.to_string(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn or_literal(value: Option<String>, literal: &str) -> String {
    value.unwrap_or_else(|| literal.to_string())
}

fn bullet_or(
    desc: &ParsedDescription,
    index: usize,
    fallback: impl FnOnce() -> String,
) -> String {
    desc.bullet_at(index)
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .unwrap_or_else(fallback)
}
