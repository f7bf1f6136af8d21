use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::account::{Analytics, AssessmentEntry};

// ============================================================
// Config Types (get_config)
// ============================================================

/// Parameters for get_config tool
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// The absolute path to the project root directory
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub messages_root: String,
    pub default_locale: String,
    pub supported_locales: Vec<String>,
    pub data_dir: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            messages_root: c.messages_root,
            default_locale: c.default_locale,
            supported_locales: c.supported_locales,
            data_dir: c.data_dir,
        }
    }
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Parameters for get_locales tool
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLocalesParams {
    /// The absolute path to the project root directory
    pub project_root_path: String,
}

/// Result of get_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub messages_dir: String,
    pub default_locale: String,
    pub locales: Vec<LocaleInfo>,
    /// Message files that could not be parsed
    pub warnings: Vec<String>,
}

/// Information about a single locale
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale: String,
    pub file_path: String,
    pub key_count: usize,
    /// Whether the locale is listed in `supportedLocales`
    pub supported: bool,
}

// ============================================================
// Translate Types (translate)
// ============================================================

/// Parameters for translate tool
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    /// The absolute path to the project root directory
    pub project_root_path: String,
    /// Dotted translation key, e.g. "injection.watch"
    pub key: String,
    /// Language to resolve in. Defaults to the saved language.
    #[serde(default)]
    pub lang: Option<String>,
    /// Values for `{{name}}` placeholders
    #[serde(default)]
    pub params: HashMap<String, String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    pub key: String,
    /// Language the key was resolved in
    pub lang: String,
    pub value: String,
    /// False when neither the language nor the fallback define the key
    pub found: bool,
}

// ============================================================
// Analytics Types (get_analytics)
// ============================================================

/// Parameters for get_analytics tool
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAnalyticsParams {
    /// The absolute path to the project root directory
    pub project_root_path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResult {
    pub has_record: bool,
    /// Absent when there is no record or no history yet
    pub analytics: Option<Analytics>,
}

// ============================================================
// Checkup Types (record_checkup)
// ============================================================

/// Parameters for record_checkup tool
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordCheckupParams {
    /// The absolute path to the project root directory
    pub project_root_path: String,
    /// Experience name, e.g. "airplane" or "ocean"
    pub category: String,
    /// Slider answers from 0 to 100, one per checkup question
    pub answers: Vec<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCheckupResult {
    pub entry: AssessmentEntry,
    /// False when the record could not be written to disk
    pub persisted: bool,
}
