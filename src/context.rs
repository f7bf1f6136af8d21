//! Project context shared by the CLI commands and the MCP tools.
//!
//! Loads `.oasisrc.json` from the project root, applies overrides
//! (override > config file > defaults) and resolves the message and data
//! directories against the root.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::account::{FileStore, Session};
use crate::config::{Config, load_config, resolve_path};
use crate::i18n::{ActiveLocale, DirectorySource, Resolver, ScanMessagesResult, scan_message_files};

/// Values that replace what the config file says.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub default_locale: Option<String>,
    pub messages_root: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
    /// True if the config came from a file rather than defaults.
    pub from_file: bool,
    pub messages_dir: PathBuf,
    pub data_dir: PathBuf,
    pub verbose: bool,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>, overrides: &Overrides, verbose: bool) -> Result<Self> {
        let root = root.into();
        let config_result = load_config(&root)?;

        if verbose && !config_result.from_file {
            eprintln!("Note: No .oasisrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(ref default_locale) = overrides.default_locale {
            config.default_locale = default_locale.clone();
        }
        if let Some(ref messages_root) = overrides.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }
        if let Some(ref data_dir) = overrides.data_dir {
            config.data_dir = data_dir.to_string_lossy().to_string();
        }
        if overrides.default_locale.is_some() {
            config.validate()?;
        }

        let messages_dir = resolve_path(&root, &config.messages_root);
        let data_dir = resolve_path(&root, &config.data_dir);

        Ok(Self {
            root,
            config,
            from_file: config_result.from_file,
            messages_dir,
            data_dir,
            verbose,
        })
    }

    pub fn messages_dir(&self) -> &Path {
        &self.messages_dir
    }

    /// Read every locale file under the messages directory.
    pub fn scan_messages(&self) -> Result<ScanMessagesResult> {
        scan_message_files(&self.messages_dir)
    }

    /// Language state on the default locale, before detection.
    pub fn locale(&self) -> ActiveLocale {
        ActiveLocale::new(
            self.config.default_locale.clone(),
            self.config.supported_locales.iter().cloned(),
        )
    }

    /// Resolver reading locales from the messages directory, starting on
    /// `stored` (or the system language, or the default).
    pub fn resolver(&self, stored: Option<&str>, system: Option<&str>) -> Resolver {
        let locale = self.locale().detect(stored, system);
        Resolver::with_source(locale, DirectorySource::new(&self.messages_dir))
    }

    /// Open the patient session persisted under the data directory.
    pub fn session(&self) -> Session {
        Session::open(FileStore::new(&self.data_dir).into())
    }
}

/// The system language as reported by the environment, e.g. `ko_KR.UTF-8`.
pub fn system_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}
