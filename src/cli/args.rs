//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: write a default `.oasisrc.json`
//! - `translate`, `lang`, `check`: translation lookup, language choice and
//!   locale parity
//! - `register`, `check-in`, `check-out`, `reset`: the patient record
//! - `record`, `history`, `analytics`, `questions`: assessments and progress
//! - `serve`: start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::context::Overrides;
use crate::i18n::parse_param;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Common arguments of the selected command, if it takes any.
    pub fn common(&self) -> Option<&CommonArgs> {
        match self.command.as_ref()? {
            Command::Translate(cmd) => Some(&cmd.common),
            Command::Lang(cmd) => Some(&cmd.common),
            Command::Check(cmd) => Some(&cmd.common),
            Command::Register(cmd) => Some(&cmd.common),
            Command::CheckIn(cmd) => Some(&cmd.common),
            Command::CheckOut(cmd) | Command::Reset(cmd) => Some(&cmd.common),
            Command::Record(cmd) => Some(&cmd.common),
            Command::History(cmd) => Some(&cmd.common),
            Command::Analytics(cmd) => Some(&cmd.common),
            Command::Init | Command::Questions(_) | Command::Serve => None,
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }
}

/// Common arguments shared by all project commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root used to find .oasisrc.json (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Default locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Directory holding the patient record (overrides config file)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            default_locale: self.default_locale.clone(),
            messages_root: self.messages_root.clone(),
            data_dir: self.data_dir.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Dotted translation key, e.g. `injection.watch`
    pub key: String,

    /// Language to resolve in (default: the saved language)
    #[arg(long)]
    pub lang: Option<String>,

    /// Placeholder value as name=value; repeatable
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LangCommand {
    /// Language to switch to; prints the active language when omitted
    pub code: Option<String>,

    /// Switch to the next supported language
    #[arg(long, conflicts_with = "code")]
    pub toggle: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RegisterCommand {
    /// Name shown on the dashboard
    #[arg(long)]
    pub name: String,

    /// Optional check-in password (at least 6 characters)
    #[arg(long)]
    pub password: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckInCommand {
    /// Password chosen at registration, if any
    #[arg(long)]
    pub password: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SessionCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RecordCommand {
    /// Experience the assessment belongs to, e.g. `airplane`
    pub category: String,

    /// Answers from 0 to 100; out-of-range values are clamped
    #[arg(required = true, allow_negative_numbers = true)]
    pub answers: Vec<f64>,

    /// Record a post-experience checkup instead of a diagnostic
    #[arg(long)]
    pub checkup: bool,

    /// Diagnostic score (default: mean of the answers)
    #[arg(long, conflicts_with = "checkup", allow_negative_numbers = true)]
    pub score: Option<f64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct HistoryCommand {
    /// Only show entries for this experience
    pub category: Option<String>,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AnalyticsCommand {
    /// Print analytics as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct QuestionsCommand {
    /// Experience name, e.g. `thunder` or `ocean`
    pub category: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .oasisrc.json configuration file
    Init,
    /// Resolve a translation key with fallback and {{param}} substitution
    Translate(TranslateCommand),
    /// Show or change the saved language
    Lang(LangCommand),
    /// Check that every locale defines the same keys as the default locale
    Check(CheckCommand),
    /// Create the patient record on this device
    Register(RegisterCommand),
    /// Check in to the existing patient record
    CheckIn(CheckInCommand),
    /// End the session, keeping the record
    CheckOut(SessionCommand),
    /// Delete the patient record
    Reset(SessionCommand),
    /// Record a diagnostic or checkup result
    Record(RecordCommand),
    /// List recorded assessments
    History(HistoryCommand),
    /// Show progress analytics
    Analytics(AnalyticsCommand),
    /// Print the checkup questions for an experience
    Questions(QuestionsCommand),
    /// Start the MCP server on stdio
    Serve,
}
