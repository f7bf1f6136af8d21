use anyhow::{Context, Result};

use super::super::args::{AnalyticsCommand, HistoryCommand, QuestionsCommand, RecordCommand};
use super::super::exit_status::ExitStatus;
use super::super::report::{
    print_analytics, print_failure, print_history, print_questions, print_recorded,
};
use super::load_context;
use crate::account::{DEFAULT_NAME, checkup, clamp_score, mean_score};

/// Record a diagnostic or a checkup.
///
/// Checkups only exist for the known experiences; a diagnostic may use any
/// category name.
pub fn record(cmd: RecordCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let mut session = ctx.session();
    let answers: Vec<u8> = cmd.answers.iter().copied().map(clamp_score).collect();

    let recorded = if cmd.checkup {
        let Some(category) = checkup::experience_from_route(&cmd.category) else {
            print_failure(&format!(
                "Unknown experience \"{}\" (expected one of: {})",
                cmd.category,
                checkup::CATEGORIES.join(", ")
            ));
            return Ok(ExitStatus::Failure);
        };
        session.record_checkup(category, answers)
    } else {
        let score = cmd.score.map_or_else(|| mean_score(&answers), clamp_score);
        session.record_diagnostic(cmd.category.trim(), answers, score)
    };

    print_recorded(&recorded.entry, recorded.persisted);
    Ok(if recorded.persisted {
        ExitStatus::Success
    } else {
        ExitStatus::Error
    })
}

pub fn history(cmd: HistoryCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let session = ctx.session();
    let entries = session.history(cmd.category.as_deref());

    if cmd.json {
        let json = serde_json::to_string_pretty(&entries)
            .context("Failed to serialize assessment history")?;
        println!("{}", json);
    } else {
        print_history(&entries);
    }
    Ok(ExitStatus::Success)
}

pub fn analytics(cmd: AnalyticsCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let session = ctx.session();
    let analytics = session.analytics();

    if cmd.json {
        let json = serde_json::to_string_pretty(&analytics)
            .context("Failed to serialize analytics")?;
        println!("{}", json);
    } else {
        let name = session.user().map_or(DEFAULT_NAME, |user| user.name.as_str());
        print_analytics(name, analytics.as_ref());
    }
    Ok(ExitStatus::Success)
}

pub fn questions(cmd: QuestionsCommand) -> Result<ExitStatus> {
    let category = checkup::canonical_category(&cmd.category);
    print_questions(category, checkup::questions(category));
    Ok(ExitStatus::Success)
}
