//! Issue types for locale parity checks.
//!
//! Each issue is self-contained with everything the reporter needs to show
//! it: the message file it points at, the key, and which locales disagree.

use enum_dispatch::enum_dispatch;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingTranslation,
    OrphanTranslation,
    MissingLocale,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::OrphanTranslation => write!(f, "orphan-translation"),
            Rule::MissingLocale => write!(f, "missing-locale"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

/// Position of a key inside a message file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the locale file (e.g., "./messages/en.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key defined by the default locale but absent from other locales.
///
/// Lookups for this key in those locales fall back to the default text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationIssue {
    pub location: MessageLocation,
    pub key: String,
    /// The default-language value.
    pub value: String,
    pub default_locale: String,
    /// Locales where this key is missing, sorted.
    pub missing_in: Vec<String>,
}

impl MissingTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslation
    }
}

/// Key defined by a non-default locale but not by the default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanTranslationIssue {
    pub location: MessageLocation,
    pub key: String,
    pub value: String,
    pub locale: String,
    pub default_locale: String,
}

impl OrphanTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OrphanTranslation
    }
}

/// A supported locale, or the default locale, with no message file.
///
/// `location` points at the file the locale is expected in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLocaleIssue {
    pub location: MessageLocation,
    pub locale: String,
    pub default_locale: String,
}

impl MissingLocaleIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingLocale
    }
}

/// A message file that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue enum and Report trait
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingTranslation(MissingTranslationIssue),
    OrphanTranslation(OrphanTranslationIssue),
    MissingLocale(MissingLocaleIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

/// Common interface for reporting issues.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Location for this issue.
    fn location(&self) -> MessageLocation;

    /// Primary message to display (key name or error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for MissingTranslationIssue {
    fn location(&self) -> MessageLocation {
        self.location.clone()
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "missing in: {} (\"{}\" will be shown from {})",
            self.missing_in.join(", "),
            self.value,
            self.default_locale
        ))
    }
}

impl Report for OrphanTranslationIssue {
    fn location(&self) -> MessageLocation {
        self.location.clone()
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "only in {}, not defined by {}",
            self.locale, self.default_locale
        ))
    }
}

impl Report for MissingLocaleIssue {
    fn location(&self) -> MessageLocation {
        self.location.clone()
    }

    fn message(&self) -> String {
        self.locale.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.locale == self.default_locale {
            Some("default locale has no message file, lookups show the raw key".to_string())
        } else {
            Some(format!(
                "supported locale has no message file, every key falls back to {}",
                self.default_locale
            ))
        }
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> MessageLocation {
        MessageLocation::new(self.file_path.clone(), 1)
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
