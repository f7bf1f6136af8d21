use anyhow::Result;

use super::super::args::CheckCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_success, report};
use super::load_context;
use crate::issues::Severity;
use crate::rules::check_locale_parity;

/// Compare every locale file against the default locale, and every
/// supported locale against the files present.
///
/// Exits with `Failure` when any error is reported; orphan keys alone are
/// warnings.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let scan = ctx.scan_messages()?;

    if ctx.verbose {
        eprintln!(
            "Note: checking {} locale file(s) in {} against {}",
            scan.files.len(),
            ctx.messages_dir().display(),
            ctx.config.default_locale
        );
    }

    let issues = check_locale_parity(
        ctx.messages_dir(),
        &ctx.config.default_locale,
        &ctx.config.supported_locales,
        &scan,
    );

    if issues.is_empty() {
        let keys = scan
            .table
            .locale(&ctx.config.default_locale)
            .map_or(0, |root| root.leaf_count());
        print_success(scan.files.len(), keys);
        return Ok(ExitStatus::Success);
    }

    report(&issues);
    let has_errors = issues.iter().any(|i| i.severity() == Severity::Error);
    Ok(ExitStatus::from_findings(has_errors))
}
