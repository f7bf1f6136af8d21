use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AssessmentEntry, Credential, EntryKind};

/// Display name used when a record is created without one.
pub const DEFAULT_NAME: &str = "Patient";

/// The patient profile and its assessment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    /// Identifier issued by a remote account service, when one is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<Credential>,
    pub created: DateTime<Utc>,
    /// Append-only, in recording order.
    #[serde(default)]
    pub history: Vec<AssessmentEntry>,
}

impl UserRecord {
    pub fn new(name: &str, created: DateTime<Utc>) -> Self {
        let name = name.trim();
        Self {
            id: base36(created.timestamp_millis().max(0) as u64),
            uid: None,
            name: if name.is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                name.to_string()
            },
            email: None,
            credential: None,
            created,
            history: Vec::new(),
        }
    }

    /// Whether check-in requires a password.
    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Check a password against the record. Records without a credential
    /// accept anything.
    pub fn validate_credential(&self, raw: &str) -> bool {
        self.credential
            .as_ref()
            .is_none_or(|credential| credential.validate(raw))
    }

    /// Append a new entry and return it.
    ///
    /// Entry ids are the recording time in base 36, bumped past the previous
    /// entry so they keep sorting in recording order even within one
    /// millisecond or after a clock step backwards.
    pub fn append(
        &mut self,
        category: &str,
        kind: EntryKind,
        answers: Vec<u8>,
        score: u8,
        now: DateTime<Utc>,
    ) -> &AssessmentEntry {
        let millis = now.timestamp_millis().max(0) as u64;
        let last = self
            .history
            .last()
            .and_then(|entry| u64::from_str_radix(&entry.id, 36).ok());
        let id = match last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };

        self.history.push(AssessmentEntry::new(
            base36(id),
            category,
            kind,
            now,
            answers,
            score,
        ));
        &self.history[self.history.len() - 1]
    }

    /// Entries for one category, or every entry when `category` is `None`.
    pub fn history(&self, category: Option<&str>) -> Vec<&AssessmentEntry> {
        self.history
            .iter()
            .filter(|entry| category.is_none_or(|c| entry.category == c))
            .collect()
    }

    pub fn has_diagnostic(&self, category: &str) -> bool {
        self.history.iter().any(|entry| entry.category == category)
    }
}

fn base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
