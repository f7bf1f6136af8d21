use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): the command did what was asked
/// - `Failure` (1): the command ran but the answer is negative (parity
///   errors, a missing key, a rejected password)
/// - `Error` (2): internal error (unreadable config, I/O failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// `Failure` when the command found something to report.
    pub fn from_findings(found: bool) -> Self {
        if found {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
