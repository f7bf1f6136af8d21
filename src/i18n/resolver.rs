use std::fmt;

use super::{
    ActiveLocale, Params, SwitchOutcome, TranslationSource, TranslationTable, interpolate,
};

type LanguageListener = Box<dyn Fn(&str) + Send + Sync>;

/// Resolves dotted translation keys for the active language.
///
/// The resolver owns the loaded table and the active locale; there is no
/// process-wide state, so several resolvers with different fixtures can
/// coexist. Resolution never fails: a key missing from the active language
/// falls back to the default language, and a key missing from both comes
/// back unchanged so the gap is visible wherever the text is shown.
pub struct Resolver {
    table: TranslationTable,
    locale: ActiveLocale,
    source: Option<Box<dyn TranslationSource + Send + Sync>>,
    listeners: Vec<LanguageListener>,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("table", &self.table)
            .field("locale", &self.locale)
            .field("has_source", &self.source.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Resolver {
    pub fn new(table: TranslationTable, locale: ActiveLocale) -> Self {
        Self {
            table,
            locale,
            source: None,
            listeners: Vec::new(),
        }
    }

    /// Build a resolver that loads locales on demand from `source`.
    ///
    /// The default locale and the starting locale are loaded up front. A
    /// starting locale that fails to load is replaced by the default.
    pub fn with_source(
        locale: ActiveLocale,
        source: impl TranslationSource + Send + Sync + 'static,
    ) -> Self {
        let mut resolver = Self::new(TranslationTable::new(), locale);
        resolver.source = Some(Box::new(source));

        let default = resolver.locale.default_locale().to_string();
        resolver.load_locale(&default);
        let current = resolver.locale.current().to_string();
        if current != default && !resolver.load_locale(&current) {
            resolver.locale.reset_to_default();
        }
        resolver
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn locale(&self) -> &ActiveLocale {
        &self.locale
    }

    pub fn current_language(&self) -> &str {
        self.locale.current()
    }

    pub fn is_supported(&self, lang: &str) -> bool {
        self.locale.is_supported(lang)
    }

    /// Register a callback run after every successful language change.
    pub fn on_language_change(&mut self, listener: impl Fn(&str) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Resolve `key` without parameters.
    pub fn t(&self, key: &str) -> String {
        self.resolve(key, &Params::new())
    }

    /// Resolve `key` for the active language and fill in `{{name}}` params.
    pub fn resolve(&self, key: &str, params: &Params) -> String {
        self.try_resolve(key, params).unwrap_or_else(|| key.to_string())
    }

    /// Like [`Resolver::resolve`], but `None` when neither the active nor the
    /// default language defines `key`.
    pub fn try_resolve(&self, key: &str, params: &Params) -> Option<String> {
        self.lookup(key).map(|value| interpolate(value, params).into_owned())
    }

    /// Find the raw template for `key`, applying the default-language fallback.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let current = self.locale.current();
        if let Some(value) = self.table.lookup(current, key) {
            return Some(value);
        }
        tracing::warn!(key, lang = current, "translation key not found");

        if self.locale.is_default() {
            return None;
        }
        let default = self.locale.default_locale();
        let fallback = self.table.lookup(default, key);
        if fallback.is_none() {
            tracing::warn!(key, lang = default, "translation key not found in fallback");
        }
        fallback
    }

    /// Switch the active language.
    ///
    /// Unsupported codes are rejected without side effects and switching to
    /// the active language returns early. When a source is attached the
    /// target locale is reloaded from it; if that fails the resolver settles
    /// on the default language instead.
    pub fn switch_language(&mut self, lang: &str) -> SwitchOutcome {
        if !self.locale.is_supported(lang) {
            tracing::warn!(lang, "language not supported");
            return SwitchOutcome::Unsupported;
        }
        if self.locale.current() == lang {
            return SwitchOutcome::AlreadyActive;
        }

        let outcome = if self.source.is_none() || self.load_locale(lang) {
            if !self.table.contains_locale(lang) {
                tracing::warn!(lang, "no translations loaded, lookups will use the fallback");
            }
            self.locale.switch(lang)
        } else {
            let default = self.locale.default_locale().to_string();
            tracing::warn!(lang, fallback = %default, "falling back to default language");
            if !self.table.contains_locale(&default) {
                self.load_locale(&default);
            }
            self.locale.switch(&default)
        };

        if let SwitchOutcome::Switched(ref new_lang) = outcome {
            tracing::debug!(lang = %new_lang, "language changed");
            for listener in &self.listeners {
                listener(new_lang);
            }
        }
        outcome
    }

    /// Switch to the next supported language.
    pub fn toggle_language(&mut self) -> SwitchOutcome {
        let next = self.locale.next().to_string();
        self.switch_language(&next)
    }

    /// Replace one locale's translations, e.g. after its file changed.
    pub fn replace_locale(&mut self, lang: &str, root: super::TranslationNode) {
        self.table.replace_locale(lang, root);
    }

    fn load_locale(&mut self, lang: &str) -> bool {
        let Some(source) = &self.source else {
            return false;
        };
        match source.load(lang) {
            Ok(root) => {
                self.table.replace_locale(lang, root);
                true
            }
            Err(e) => {
                tracing::warn!(lang, "failed to load translations: {:#}", e);
                false
            }
        }
    }
}
