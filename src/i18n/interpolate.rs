use std::{borrow::Cow, collections::HashMap, sync::LazyLock};

use regex::{Captures, Regex};

/// Named values substituted into `{{name}}` placeholders.
pub type Params = HashMap<String, String>;

// Placeholder names never contain braces, which keeps `{{a}}{{b}}` two matches.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").unwrap());

/// Replace every `{{name}}` whose name is present in `params`.
///
/// Placeholders without a matching param stay verbatim and params that the
/// template never mentions are ignored. Substituted values are not scanned
/// again, so a value containing `{{x}}` is inserted literally.
pub fn interpolate<'a>(template: &'a str, params: &Params) -> Cow<'a, str> {
    if params.is_empty() {
        return Cow::Borrowed(template);
    }
    PLACEHOLDER_REGEX.replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
        Some(value) => value.clone(),
        None => caps[0].to_string(),
    })
}

/// Parse `name=value` pairs as given on the command line.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}
