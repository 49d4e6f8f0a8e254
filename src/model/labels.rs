use serde::Serialize;

/// Every display string the site needs for one locale.
///
/// Field order is the serialization order of the generated JSON.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelSet {
    pub app_name: String,
    pub app_tagline: String,
    pub page_title: String,
    pub page_description: String,
    pub support_page_title: String,
    pub support_page_description: String,
    pub privacy_page_title: String,
    pub privacy_page_description: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub cta_app_store: String,
    pub nav_support: String,
    pub nav_privacy: String,
    pub nav_home: String,
    pub features_heading: String,
    pub feature_goal_title: String,
    pub feature_goal_body: String,
    pub feature_focus_title: String,
    pub feature_focus_body: String,
    pub feature_logs_title: String,
    pub feature_logs_body: String,
    pub trust_title: String,
    pub trust_body: String,
    pub trust_detail: String,
    pub publisher_heading: String,
    pub publisher_mission: String,
    pub support_title: String,
    pub support_hint: String,
    pub privacy_title: String,
    pub language_name: String,
}

pub const LABEL_KEYS: [&str; 30] = [
    "appName",
    "appTagline",
    "pageTitle",
    "pageDescription",
    "supportPageTitle",
    "supportPageDescription",
    "privacyPageTitle",
    "privacyPageDescription",
    "heroTitle",
    "heroSubtitle",
    "ctaAppStore",
    "navSupport",
    "navPrivacy",
    "navHome",
    "featuresHeading",
    "featureGoalTitle",
    "featureGoalBody",
    "featureFocusTitle",
    "featureFocusBody",
    "featureLogsTitle",
    "featureLogsBody",
    "trustTitle",
    "trustBody",
    "trustDetail",
    "publisherHeading",
    "publisherMission",
    "supportTitle",
    "supportHint",
    "privacyTitle",
    "languageName",
];
