use serde::{Deserialize, Serialize};

use super::{Params, Resolver};

/// Where a resolved string is written on the tagged element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTarget {
    /// Plain text content.
    Text,
    /// Markup content; the value is inserted without escaping.
    Markup,
    /// An input's placeholder attribute.
    Placeholder,
    /// A tooltip title attribute.
    Title,
}

/// A piece of rendered content that carries a translation key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedText {
    pub key: String,
    pub target: TextTarget,
    #[serde(default)]
    pub params: Params,
}

impl TaggedText {
    pub fn new(key: impl Into<String>, target: TextTarget) -> Self {
        Self {
            key: key.into(),
            target,
            params: Params::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// A resolved string ready to be written to its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedText {
    pub key: String,
    pub target: TextTarget,
    pub value: String,
}

/// Resolve every tagged item of a freshly inserted subtree.
///
/// Callers that add content run this on the new items only; nothing here
/// rescans content that was already translated.
pub fn apply_translations(resolver: &Resolver, subtree: &[TaggedText]) -> Vec<AppliedText> {
    subtree
        .iter()
        .map(|item| AppliedText {
            key: item.key.clone(),
            target: item.target,
            value: resolver.resolve(&item.key, &item.params),
        })
        .collect()
}
