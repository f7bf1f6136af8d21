use std::{
    fs,
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".oasisrc.json";

static LOCALE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default = "default_default_locale")]
    pub default_locale: String,
    #[serde(default = "default_supported_locales")]
    pub supported_locales: Vec<String>,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_default_locale() -> String {
    "en".to_string()
}

fn default_supported_locales() -> Vec<String> {
    ["en", "ko"].map(String::from).to_vec()
}

fn default_data_dir() -> String {
    "./.oasis".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            default_locale: default_default_locale(),
            supported_locales: default_supported_locales(),
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Locale codes must look like `en`, `ko` or `pt-BR`, and the default
    /// locale must be one of the supported ones.
    pub fn validate(&self) -> Result<()> {
        if self.supported_locales.is_empty() {
            bail!("'supportedLocales' must list at least one locale");
        }

        for code in &self.supported_locales {
            if !is_locale_code(code) {
                bail!("Invalid locale code in 'supportedLocales': \"{}\"", code);
            }
        }

        if !is_locale_code(&self.default_locale) {
            bail!(
                "Invalid locale code in 'defaultLocale': \"{}\"",
                self.default_locale
            );
        }

        if !self.supported_locales.contains(&self.default_locale) {
            bail!(
                "'defaultLocale' \"{}\" is not listed in 'supportedLocales' ({})",
                self.default_locale,
                self.supported_locales.join(", ")
            );
        }

        Ok(())
    }
}

pub fn is_locale_code(code: &str) -> bool {
    LOCALE_CODE_REGEX.is_match(code)
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

/// Resolve a configured path against the project root.
///
/// Absolute paths are kept. When the root is the current directory the path
/// is returned as written so messages stay short.
pub fn resolve_path(root: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root.components().all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root.join(rel)
    }
}
