use std::collections::BTreeMap;

use serde_json::Value;

/// A node in a locale's translation tree.
///
/// Message files nest objects to group keys (`injection.watch`), so every
/// locale is a tree whose leaves are the translated strings:
///
/// ```json
/// { "injection": { "watch": "Watch...", "inhale": "Inhale" } }
/// ```
///
/// Resolution walks `Branch` nodes segment by segment and only succeeds when
/// the final segment lands on a `Leaf`. A key that stops at a `Branch` is a
/// lookup failure, never a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationNode {
    /// A translated string. An empty string is a valid translation.
    Leaf(String),
    /// A group of child nodes keyed by path segment.
    Branch(BTreeMap<String, TranslationNode>),
}

impl Default for TranslationNode {
    fn default() -> Self {
        TranslationNode::Branch(BTreeMap::new())
    }
}

impl TranslationNode {
    /// Convert a parsed JSON message document into a translation tree.
    ///
    /// - objects become branches, strings become leaves
    /// - numbers and booleans keep their JSON text as a leaf
    /// - string-only arrays are joined into one leaf (`"a, b"`)
    /// - any other array is expanded by index (`items.0.question`)
    /// - `null` produces nothing
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => {
                let children = map
                    .iter()
                    .filter_map(|(key, val)| Self::from_json(val).map(|node| (key.clone(), node)))
                    .collect();
                Some(TranslationNode::Branch(children))
            }
            Value::String(s) => Some(TranslationNode::Leaf(s.clone())),
            Value::Number(n) => Some(TranslationNode::Leaf(n.to_string())),
            Value::Bool(b) => Some(TranslationNode::Leaf(b.to_string())),
            Value::Array(arr) => {
                let is_string_array =
                    !arr.is_empty() && arr.iter().all(|v| matches!(v, Value::String(_)));
                if is_string_array {
                    let values: Vec<&str> = arr.iter().filter_map(|v| v.as_str()).collect();
                    return Some(TranslationNode::Leaf(values.join(", ")));
                }
                let children = arr
                    .iter()
                    .enumerate()
                    .filter_map(|(index, val)| {
                        Self::from_json(val).map(|node| (index.to_string(), node))
                    })
                    .collect();
                Some(TranslationNode::Branch(children))
            }
            Value::Null => None,
        }
    }

    /// Walk `segments` from this node.
    ///
    /// Returns `None` when a segment is absent or the walk runs into a leaf
    /// while segments remain.
    pub fn descend<'a, I>(&self, segments: I) -> Option<&TranslationNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut current = self;
        for segment in segments {
            match current {
                TranslationNode::Branch(children) => current = children.get(segment)?,
                TranslationNode::Leaf(_) => return None,
            }
        }
        Some(current)
    }

    /// Look up a dotted key and return the leaf string it names.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.descend(key.split('.'))?.as_leaf()
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            TranslationNode::Leaf(value) => Some(value.as_str()),
            TranslationNode::Branch(_) => None,
        }
    }

    /// Flatten the tree into `(dotted key, value)` pairs in key order.
    pub fn flatten(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        self.flatten_into(String::new(), &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, prefix: String, out: &mut Vec<(String, &'a str)>) {
        match self {
            TranslationNode::Leaf(value) => out.push((prefix, value.as_str())),
            TranslationNode::Branch(children) => {
                for (key, child) in children {
                    let new_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    child.flatten_into(new_prefix, out);
                }
            }
        }
    }

    /// Number of leaves under this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            TranslationNode::Leaf(_) => 1,
            TranslationNode::Branch(children) => children.values().map(Self::leaf_count).sum(),
        }
    }
}
