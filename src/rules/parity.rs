//! Locale parity rule.
//!
//! Every locale should define the same keys as the default locale. Keys
//! missing from a locale silently fall back to the default text at runtime,
//! and keys that only exist outside the default locale can never be reached
//! by a fallback lookup. A supported locale without a message file is an
//! error too, since every lookup in it falls back.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::i18n::{ScanMessagesResult, extract_locale};
use crate::issues::{
    Issue, MessageLocation, MissingLocaleIssue, MissingTranslationIssue, OrphanTranslationIssue,
    ParseErrorIssue, Report,
};

/// Compare every scanned locale against `default_locale`.
///
/// The default locale and each of `supported_locales` must have a message
/// file in `messages_dir`; a file that failed to parse is reported once, as a
/// parse error. The raw text of each file lets issues point at the line that
/// defines a key. Issues are ordered by file, then line.
pub fn check_locale_parity(
    messages_dir: &Path,
    default_locale: &str,
    supported_locales: &[String],
    scan: &ScanMessagesResult,
) -> Vec<Issue> {
    let ScanMessagesResult {
        table,
        files,
        warnings,
    } = scan;

    let mut issues: Vec<Issue> = warnings
        .iter()
        .map(|w| {
            Issue::from(ParseErrorIssue {
                file_path: w.file_path.clone(),
                error: w.error.clone(),
            })
        })
        .collect();

    let unreadable: BTreeSet<String> = warnings
        .iter()
        .filter_map(|w| extract_locale(&w.file_path))
        .collect();
    let expected: BTreeSet<&str> = std::iter::once(default_locale)
        .chain(supported_locales.iter().map(String::as_str))
        .collect();
    for locale in expected {
        if table.locale(locale).is_none() && !unreadable.contains(locale) {
            let path = messages_dir.join(format!("{}.json", locale));
            issues.push(Issue::from(MissingLocaleIssue {
                location: MessageLocation::new(path.to_string_lossy().to_string(), 1),
                locale: locale.to_string(),
                default_locale: default_locale.to_string(),
            }));
        }
    }

    let Some(default_root) = table.locale(default_locale) else {
        issues.sort_by(|a, b| a.location().cmp(&b.location()));
        return issues;
    };

    let file_for = |locale: &str| files.iter().find(|f| f.locale == locale);
    let locate = |locale: &str, key: &str| match file_for(locale) {
        Some(file) => MessageLocation::new(
            file.path.to_string_lossy().to_string(),
            find_key_line(&file.content, key, &build_line_index(&file.content)),
        ),
        None => MessageLocation::new(format!("<{}>", locale), 1),
    };

    let others: BTreeMap<&str, BTreeSet<String>> = table
        .locales()
        .into_iter()
        .filter(|locale| *locale != default_locale)
        .filter_map(|locale| {
            let keys = table.locale(locale)?.flatten().into_iter().map(|(k, _)| k);
            Some((locale, keys.collect()))
        })
        .collect();

    let default_entries = default_root.flatten();
    let default_keys: BTreeSet<&str> =
        default_entries.iter().map(|(k, _)| k.as_str()).collect();

    for (key, value) in &default_entries {
        let missing_in: Vec<String> = others
            .iter()
            .filter(|(_, keys)| !keys.contains(key))
            .map(|(locale, _)| locale.to_string())
            .collect();
        if !missing_in.is_empty() {
            issues.push(Issue::from(MissingTranslationIssue {
                location: locate(default_locale, key.as_str()),
                key: key.clone(),
                value: value.to_string(),
                default_locale: default_locale.to_string(),
                missing_in,
            }));
        }
    }

    for (&locale, keys) in &others {
        let Some(root) = table.locale(locale) else {
            continue;
        };
        for key in keys.iter().filter(|k| !default_keys.contains(k.as_str())) {
            issues.push(Issue::from(OrphanTranslationIssue {
                location: locate(locale, key.as_str()),
                key: key.clone(),
                value: root.get(key).unwrap_or_default().to_string(),
                locale: locale.to_string(),
                default_locale: default_locale.to_string(),
            }));
        }
    }

    issues.sort_by(|a, b| a.location().cmp(&b.location()));
    issues
}

/// Build an index of line start byte offsets for O(log n) line lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line containing byte `offset`.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line where a dotted key is defined.
///
/// Each segment is searched after the previous one, so `knife.scissors`
/// finds the `"scissors"` inside `"knife"` rather than one in another
/// group. Only matches followed by `:` count as keys. Falls back to line 1.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}
