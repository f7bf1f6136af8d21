//! Report formatting and printing utilities.
//!
//! Parity issues are shown cargo-style; patient history and analytics as
//! aligned plain-text tables. Everything writes through `*_to` functions so
//! output can be captured in tests.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::account::{Analytics, AssessmentEntry, EntryKind, Severity as Level, Trend, checkup};
use crate::issues::{Issue, MessageLocation, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

// ============================================================
// Parity issues
// ============================================================

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by_key(|issue| issue.location());

    let max_line_width = sorted
        .iter()
        .map(|i| i.location().line.to_string().len())
        .max()
        .unwrap_or(1);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(locale_files: usize, keys: usize) {
    print_success_to(locale_files, keys, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(locale_files: usize, keys: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} locale {} ({} {}) - no issues found",
            locale_files,
            if locale_files == 1 { "file" } else { "files" },
            keys,
            if keys == 1 { "key" } else { "keys" }
        )
        .green()
    );
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let MessageLocation { file_path, line } = issue.location();

    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), file_path, line);

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

// ============================================================
// Messages
// ============================================================

pub fn print_ok(message: &str) {
    print_ok_to(message, &mut io::stdout().lock());
}

pub fn print_ok_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
}

/// Print a user-facing failure (wrong password, unknown language) to stderr.
pub fn print_failure(message: &str) {
    print_failure_to(message, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message);
}

// ============================================================
// History and analytics
// ============================================================

fn category_name(category: &str) -> &str {
    checkup::display_name(category).unwrap_or(category)
}

/// Pad `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(used)))
}

fn colored_level(level: Level) -> String {
    let label = level.label();
    match level {
        Level::Minimal | Level::Mild => label.green().to_string(),
        Level::Moderate => label.yellow().to_string(),
        Level::Significant => label.red().to_string(),
    }
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Diagnostic => "diagnostic",
        EntryKind::Checkup => "checkup",
    }
}

pub fn print_history(entries: &[&AssessmentEntry]) {
    print_history_to(entries, &mut io::stdout().lock());
}

pub fn print_history_to<W: Write>(entries: &[&AssessmentEntry], writer: &mut W) {
    if entries.is_empty() {
        let _ = writeln!(writer, "{}", "No assessments recorded yet".dimmed());
        return;
    }

    let name_width = entries
        .iter()
        .map(|e| UnicodeWidthStr::width(category_name(&e.category)))
        .max()
        .unwrap_or(0);

    for entry in entries {
        let _ = writeln!(
            writer,
            "{}  {}  {:<10}  {:>3}  {}",
            entry.date.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            pad(category_name(&entry.category), name_width),
            kind_label(entry.kind),
            entry.score,
            colored_level(entry.severity)
        );
    }
}

pub fn print_recorded(entry: &AssessmentEntry, persisted: bool) {
    print_recorded_to(entry, persisted, &mut io::stdout().lock());
}

pub fn print_recorded_to<W: Write>(entry: &AssessmentEntry, persisted: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {} for {}: score {} ({})",
        SUCCESS_MARK.green(),
        "Recorded".green(),
        kind_label(entry.kind),
        category_name(&entry.category),
        entry.score,
        colored_level(entry.severity)
    );
    if !persisted {
        let _ = writeln!(
            writer,
            "{} the record could not be saved and will be lost when this command exits",
            "warning:".bold().yellow()
        );
    }
}

fn trend_arrow(trend: Trend) -> String {
    match trend {
        Trend::Improving => "\u{2193}".green().to_string(),
        Trend::Increasing => "\u{2191}".red().to_string(),
        Trend::Stable => "\u{2192}".dimmed().to_string(),
    }
}

pub fn print_analytics(name: &str, analytics: Option<&Analytics>) {
    print_analytics_to(name, analytics, &mut io::stdout().lock());
}

/// Dashboard view: one line per experience, then recent activity.
pub fn print_analytics_to<W: Write>(name: &str, analytics: Option<&Analytics>, writer: &mut W) {
    let Some(analytics) = analytics else {
        let _ = writeln!(writer, "{}", name.bold());
        let _ = writeln!(
            writer,
            "{}",
            "No sessions yet. Complete an experience to start tracking progress.".dimmed()
        );
        return;
    };

    let _ = writeln!(
        writer,
        "{}  {} since {}, {} {}",
        name.bold(),
        "patient".dimmed(),
        analytics.join_date.format("%Y-%m-%d"),
        analytics.total_sessions,
        if analytics.total_sessions == 1 {
            "session"
        } else {
            "sessions"
        }
    );
    let _ = writeln!(writer);

    let name_width = analytics
        .by_phobia
        .iter()
        .map(|p| UnicodeWidthStr::width(category_name(&p.category)))
        .max()
        .unwrap_or(0);

    for phobia in &analytics.by_phobia {
        let _ = writeln!(
            writer,
            "  {}  {:>2} {:<8}  {} {:>3}% {:<10}  latest {:>3}  avg {:>3}",
            pad(category_name(&phobia.category), name_width),
            phobia.sessions,
            if phobia.sessions == 1 {
                "session"
            } else {
                "sessions"
            },
            trend_arrow(phobia.trend),
            phobia.improvement.abs(),
            phobia.trend.as_str(),
            phobia.latest_score,
            phobia.avg_score
        );
    }

    if !analytics.recent_activity.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "{}", "Recent activity".bold());
        for entry in &analytics.recent_activity {
            let _ = writeln!(
                writer,
                "  {}  {}",
                entry.date.format("%b %d").to_string().dimmed(),
                category_name(&entry.category)
            );
        }
    }
}

pub fn print_questions(category: &str, questions: &[&str]) {
    print_questions_to(category, questions, &mut io::stdout().lock());
}

pub fn print_questions_to<W: Write>(category: &str, questions: &[&str], writer: &mut W) {
    let _ = writeln!(writer, "{}", category_name(category).bold());
    for (i, question) in questions.iter().enumerate() {
        let _ = writeln!(writer, "  {}. {}", i + 1, question);
    }
}
