use anyhow::Result;

use super::super::args::TranslateCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_failure;
use super::load_context;
use crate::context::system_language;
use crate::i18n::{Params, SwitchOutcome};

/// Print the resolved value of a key.
///
/// A key that neither the language nor the default defines prints the key
/// itself and exits with `Failure`.
pub fn translate(cmd: TranslateCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let stored = ctx.session().language();
    let system = system_language();
    let mut resolver = ctx.resolver(stored.as_deref(), system.as_deref());

    if let Some(ref lang) = cmd.lang
        && resolver.switch_language(lang) == SwitchOutcome::Unsupported
    {
        print_failure(&format!(
            "Unsupported language \"{}\" (supported: {})",
            lang,
            ctx.config.supported_locales.join(", ")
        ));
        return Ok(ExitStatus::Failure);
    }

    let params: Params = cmd.params.into_iter().collect();
    let resolved = resolver.try_resolve(&cmd.key, &params);
    let found = resolved.is_some();
    println!("{}", resolved.unwrap_or(cmd.key));

    Ok(ExitStatus::from_findings(!found))
}
