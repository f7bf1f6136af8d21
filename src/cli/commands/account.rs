use anyhow::Result;

use super::super::args::{CheckInCommand, RegisterCommand, SessionCommand};
use super::super::exit_status::ExitStatus;
use super::super::report::{print_failure, print_ok};
use super::load_context;
use crate::account::AccountError;

pub fn register(cmd: RegisterCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let mut session = ctx.session();

    let name = match session.register(&cmd.name, cmd.password.as_deref()) {
        Ok(user) => user.name.clone(),
        Err(e) => return Ok(account_failure(&e)),
    };
    print_ok(&format!("Registered {}", name));
    if !session.is_saved() {
        print_failure(
            "The patient record could not be saved and will be lost when this command exits",
        );
        return Ok(ExitStatus::Error);
    }
    Ok(ExitStatus::Success)
}

pub fn check_in(cmd: CheckInCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let mut session = ctx.session();

    let name = match session.check_in(cmd.password.as_deref()) {
        Ok(user) => user.name.clone(),
        Err(e) => return Ok(account_failure(&e)),
    };
    print_ok(&format!("Checked in as {}", name));
    Ok(ExitStatus::Success)
}

/// End the session. Fails only when there is no record to check out of.
pub fn check_out(cmd: SessionCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let mut session = ctx.session();

    if session.user().is_none() {
        return Ok(account_failure(&AccountError::NoRecord));
    }
    session.check_out();
    print_ok("Checked out");
    Ok(ExitStatus::Success)
}

/// Delete the record. Deleting nothing still succeeds.
pub fn reset(cmd: SessionCommand) -> Result<ExitStatus> {
    let ctx = load_context(&cmd.common)?;
    let mut session = ctx.session();

    let had_record = session.user().is_some();
    if let Err(e) = session.reset() {
        print_failure(&e.to_string());
        return Ok(ExitStatus::Error);
    }
    if had_record {
        print_ok("Patient record deleted");
    } else {
        print_ok("No patient record to delete");
    }
    Ok(ExitStatus::Success)
}

fn account_failure(error: &AccountError) -> ExitStatus {
    print_failure(&error.to_string());
    ExitStatus::Failure
}
