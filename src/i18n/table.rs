use std::collections::HashMap;

use super::TranslationNode;

/// Translation trees for every loaded locale.
///
/// The table is built once and then only changes by replacing a whole
/// locale at a time, so a lookup never observes a half-loaded locale.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    locales: HashMap<String, TranslationNode>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(locale, tree)` pairs.
    pub fn from_locales<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = (S, TranslationNode)>,
        S: Into<String>,
    {
        Self {
            locales: locales
                .into_iter()
                .map(|(locale, root)| (locale.into(), root))
                .collect(),
        }
    }

    /// Replace the tree for `locale`, returning the previous one.
    pub fn replace_locale(
        &mut self,
        locale: impl Into<String>,
        root: TranslationNode,
    ) -> Option<TranslationNode> {
        self.locales.insert(locale.into(), root)
    }

    pub fn locale(&self, locale: &str) -> Option<&TranslationNode> {
        self.locales.get(locale)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Loaded locale codes, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Look up `key` in a single locale, without any fallback.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.locales.get(locale)?.get(key)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
