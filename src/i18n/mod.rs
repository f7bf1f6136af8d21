//! Translation resolution.
//!
//! Locales are nested JSON documents turned into [`TranslationNode`] trees.
//! A [`Resolver`] holds the loaded [`TranslationTable`] and the
//! [`ActiveLocale`], and turns dotted keys like `injection.watch` into text
//! for the active language with fallback to the default language.
//!
//! ## Module Structure
//!
//! - `node`: translation tree representation
//! - `table`: per-locale trees with whole-locale replacement
//! - `source`: loading locales from message files or memory
//! - `locale`: active/default language state and detection
//! - `interpolate`: `{{name}}` parameter substitution
//! - `resolver`: key resolution with fallback and language switching
//! - `render`: resolving tagged content in bulk

mod interpolate;
mod locale;
mod node;
mod render;
mod resolver;
mod source;
mod table;

pub use interpolate::{Params, interpolate, parse_param};
pub use locale::{ActiveLocale, SwitchOutcome};
pub use node::TranslationNode;
pub use render::{AppliedText, TaggedText, TextTarget, apply_translations};
pub use resolver::Resolver;
pub use source::{
    DirectorySource, MessageFile, MessageScanWarning, ScanMessagesResult, StaticSource,
    TranslationSource, extract_locale, parse_message_file, scan_message_files,
};
pub use table::TranslationTable;
