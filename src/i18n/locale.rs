/// Outcome of a language switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The active language changed to the given code.
    Switched(String),
    /// The requested language was already active.
    AlreadyActive,
    /// The code is not in the supported set; nothing changed.
    Unsupported,
}

impl SwitchOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, SwitchOutcome::Switched(_))
    }
}

/// The active language together with the fallback language and the set of
/// languages that may be activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLocale {
    current: String,
    default: String,
    supported: Vec<String>,
}

impl ActiveLocale {
    /// Start on the default language.
    ///
    /// The default is always part of the supported set.
    pub fn new(default: impl Into<String>, supported: impl IntoIterator<Item = String>) -> Self {
        let default = default.into();
        let mut supported: Vec<String> = supported.into_iter().collect();
        if !supported.contains(&default) {
            supported.insert(0, default.clone());
        }
        Self {
            current: default.clone(),
            default,
            supported,
        }
    }

    /// Pick the starting language: a supported stored choice wins, then the
    /// system language (only its first two characters are considered, so
    /// `ko_KR.UTF-8` selects `ko`), then the default.
    pub fn detect(mut self, stored: Option<&str>, system: Option<&str>) -> Self {
        if let Some(stored) = stored.map(str::trim)
            && self.is_supported(stored)
        {
            self.current = stored.to_string();
            return self;
        }
        if let Some(prefix) = system.and_then(|s| s.get(..2))
            && self.is_supported(prefix)
        {
            self.current = prefix.to_string();
        }
        self
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn default_locale(&self) -> &str {
        &self.default
    }

    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    pub fn is_supported(&self, lang: &str) -> bool {
        self.supported.iter().any(|s| s == lang)
    }

    pub fn is_default(&self) -> bool {
        self.current == self.default
    }

    /// Make `lang` the active language.
    pub fn switch(&mut self, lang: &str) -> SwitchOutcome {
        if !self.is_supported(lang) {
            return SwitchOutcome::Unsupported;
        }
        if self.current == lang {
            return SwitchOutcome::AlreadyActive;
        }
        self.current = lang.to_string();
        SwitchOutcome::Switched(self.current.clone())
    }

    /// The supported language after the active one, wrapping around.
    pub fn next(&self) -> &str {
        let index = self
            .supported
            .iter()
            .position(|s| *s == self.current)
            .unwrap_or(0);
        &self.supported[(index + 1) % self.supported.len()]
    }

    pub(crate) fn reset_to_default(&mut self) {
        self.current = self.default.clone();
    }
}
