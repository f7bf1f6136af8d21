//! Detection rules for message files.

pub mod parity;

pub use parity::check_locale_parity;
