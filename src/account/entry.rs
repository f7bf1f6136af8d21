use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest value an answer or score may take.
pub const MAX_SCORE: u8 = 100;

/// Clamp a raw slider or computed value into `0..=100`.
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
}

/// Mean of `answers`, rounded to the nearest integer. Empty answers score 0.
pub fn mean_score(answers: &[u8]) -> u8 {
    if answers.is_empty() {
        return 0;
    }
    let total: u32 = answers.iter().map(|&a| u32::from(a)).sum();
    clamp_score(f64::from(total) / answers.len() as f64)
}

/// How strongly a score indicates phobia symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    Significant,
}

impl Severity {
    /// Bucket a score. Each boundary belongs to the lower bucket.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=25 => Severity::Minimal,
            26..=50 => Severity::Mild,
            51..=75 => Severity::Moderate,
            _ => Severity::Significant,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Significant => "Significant",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether an entry came from the intake diagnostic or the short checkup
/// shown when an experience ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Diagnostic,
    Checkup,
}

/// One recorded assessment. Entries are immutable once created.
///
/// Loading clamps answers and score and derives severity again, so a loaded
/// entry obeys the same bounds as one built with [`AssessmentEntry::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredEntry")]
pub struct AssessmentEntry {
    pub id: String,
    /// Experience the entry belongs to (`airplane`, `injection`, ...).
    #[serde(rename = "type")]
    pub category: String,
    pub kind: EntryKind,
    pub date: DateTime<Utc>,
    pub answers: Vec<u8>,
    pub score: u8,
    pub severity: Severity,
}

impl AssessmentEntry {
    /// Build an entry, clamping `score` and deriving its severity.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        kind: EntryKind,
        date: DateTime<Utc>,
        answers: Vec<u8>,
        score: u8,
    ) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            id: id.into(),
            category: category.into(),
            kind,
            date,
            answers: answers.into_iter().map(|a| a.min(MAX_SCORE)).collect(),
            score,
            severity: Severity::from_score(score),
        }
    }

    pub fn is_checkup(&self) -> bool {
        self.kind == EntryKind::Checkup
    }
}

/// An entry as found in a saved record or remote document.
///
/// Scores are read as plain numbers and the stored severity is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    id: String,
    #[serde(rename = "type")]
    category: String,
    kind: EntryKind,
    date: DateTime<Utc>,
    #[serde(default)]
    answers: Vec<f64>,
    score: f64,
}

impl From<StoredEntry> for AssessmentEntry {
    fn from(stored: StoredEntry) -> Self {
        AssessmentEntry::new(
            stored.id,
            stored.category,
            stored.kind,
            stored.date,
            stored.answers.into_iter().map(clamp_score).collect(),
            clamp_score(stored.score),
        )
    }
}
