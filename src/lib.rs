//! Oasis - translations and patient analytics for the Oasis exposure
//! experiences
//!
//! Oasis resolves dotted translation keys with default-locale fallback and
//! `{{param}}` substitution, keeps the patient's language and assessment
//! history on the device, and summarizes that history into progress
//! analytics.
//!
//! ## Module Structure
//!
//! - `account`: patient record, assessments, analytics and stores
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `context`: Project paths and services shared by CLI and MCP
//! - `i18n`: Translation tables, language state and the resolver
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Locale parity checks

pub mod account;
pub mod cli;
pub mod config;
pub mod context;
pub mod i18n;
pub mod issues;
pub mod mcp;
pub mod rules;
