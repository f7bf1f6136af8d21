use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;

use super::{TranslationNode, TranslationTable};

/// Where locale trees come from.
///
/// The resolver asks its source for a locale whenever it switches to it, so
/// a directory source picks up edits to message files without a restart.
pub trait TranslationSource {
    fn load(&self, locale: &str) -> Result<TranslationNode>;
}

/// Message files laid out as `<root>/<locale>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn locale_path(&self, locale: &str) -> PathBuf {
        self.root.join(format!("{}.json", locale))
    }
}

impl TranslationSource for DirectorySource {
    fn load(&self, locale: &str) -> Result<TranslationNode> {
        parse_message_file(&self.locale_path(locale))
    }
}

/// Locale trees supplied in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    locales: HashMap<String, TranslationNode>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>, root: TranslationNode) -> Self {
        self.locales.insert(locale.into(), root);
        self
    }

    /// Parse every locale of a combined `{ "<locale>": { ... } }` document.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            bail!("Translations must be a JSON object keyed by locale.");
        };
        let mut source = Self::new();
        for (locale, tree) in map {
            let root = TranslationNode::from_json(tree)
                .ok_or_else(|| anyhow!("Locale '{}' has no translations.", locale))?;
            source.locales.insert(locale.clone(), root);
        }
        Ok(source)
    }
}

impl TranslationSource for StaticSource {
    fn load(&self, locale: &str) -> Result<TranslationNode> {
        self.locales
            .get(locale)
            .cloned()
            .ok_or_else(|| anyhow!("No translations for locale '{}'.", locale))
    }
}

/// Read and convert one message file.
pub fn parse_message_file(path: &Path) -> Result<TranslationNode> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    parse_message_content(&content, path)
}

fn parse_message_content(content: &str, path: &Path) -> Result<TranslationNode> {
    let json: Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    if !json.is_object() {
        bail!("Message file {:?} must contain a JSON object.", path);
    }

    TranslationNode::from_json(&json)
        .ok_or_else(|| anyhow!("Message file {:?} has no translations.", path))
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "/path/to/messages/ko.json" -> Some("ko")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// A message file that could not be loaded.
#[derive(Debug, Clone)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

/// A loaded message file with its raw text, kept for line lookups.
#[derive(Debug, Clone)]
pub struct MessageFile {
    pub locale: String,
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub table: TranslationTable,
    pub files: Vec<MessageFile>,
    pub warnings: Vec<MessageScanWarning>,
}

/// Load every `*.json` file under `message_dir` into a table.
///
/// Unreadable or malformed files are collected as warnings so one bad
/// locale does not hide the others.
pub fn scan_message_files(message_dir: impl AsRef<Path>) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();
    let mut result = ScanMessagesResult::default();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .oasisrc.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(message_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    paths.sort();

    for path in paths {
        let Some(locale) = extract_locale(&path) else {
            continue;
        };
        let loaded = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read JSON file: {:?}", path))
            .and_then(|content| {
                parse_message_content(&content, &path).map(|root| (content, root))
            });
        match loaded {
            Ok((content, root)) => {
                result.table.replace_locale(locale.clone(), root);
                result.files.push(MessageFile {
                    locale,
                    path,
                    content,
                });
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), "skipping message file: {:#}", e);
                result.warnings.push(MessageScanWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(result)
}
