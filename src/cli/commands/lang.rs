use anyhow::Result;

use super::super::args::LangCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_failure, print_ok};
use super::load_context;
use crate::context::system_language;
use crate::i18n::SwitchOutcome;

/// Show the active language, or switch and persist a new one.
pub fn lang(cmd: LangCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let mut session = ctx.session();
    let stored = session.language();
    let system = system_language();
    let mut resolver = ctx.resolver(stored.as_deref(), system.as_deref());

    let outcome = match (&cmd.code, cmd.toggle) {
        (Some(code), _) => resolver.switch_language(code),
        (None, true) => resolver.toggle_language(),
        (None, false) => {
            println!("{}", resolver.current_language());
            return Ok(ExitStatus::Success);
        }
    };

    if outcome == SwitchOutcome::Unsupported {
        print_failure(&format!(
            "Unsupported language \"{}\" (supported: {})",
            cmd.code.as_deref().unwrap_or_default(),
            ctx.config.supported_locales.join(", ")
        ));
        return Ok(ExitStatus::Failure);
    }

    let current = resolver.current_language().to_string();
    if let Some(ref requested) = cmd.code
        && *requested != current
    {
        print_failure(&format!(
            "Could not load \"{}\" translations, using {}",
            requested, current
        ));
    }
    if outcome.changed() {
        print_ok(&format!("Language set to {}", current));
    } else {
        println!("{}", current);
    }

    if stored.as_deref() != Some(current.as_str()) && !session.save_language(&current) {
        return Ok(ExitStatus::Error);
    }

    Ok(ExitStatus::Success)
}
