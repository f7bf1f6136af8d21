use std::process::ExitCode;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{account, assess, check::check, init::init, lang::lang, translate::translate},
    exit_status::ExitStatus,
};

/// Main entry point for the oasis CLI.
///
/// Dispatches to the command handler and maps its status to an exit code.
/// `serve` is handled by the binary before this is called.
pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Some(Command::Init) => init()?,
        Some(Command::Translate(cmd)) => translate(cmd)?,
        Some(Command::Lang(cmd)) => lang(cmd)?,
        Some(Command::Check(cmd)) => check(cmd)?,
        Some(Command::Register(cmd)) => account::register(cmd)?,
        Some(Command::CheckIn(cmd)) => account::check_in(cmd)?,
        Some(Command::CheckOut(cmd)) => account::check_out(cmd)?,
        Some(Command::Reset(cmd)) => account::reset(cmd)?,
        Some(Command::Record(cmd)) => assess::record(cmd)?,
        Some(Command::History(cmd)) => assess::history(cmd)?,
        Some(Command::Analytics(cmd)) => assess::analytics(cmd)?,
        Some(Command::Questions(cmd)) => assess::questions(cmd)?,
        Some(Command::Serve) => {
            anyhow::bail!("Serve command should be handled before run_cli()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    };

    Ok(status.into())
}
