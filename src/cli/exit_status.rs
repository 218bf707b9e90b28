use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): No errors found, or fixes finished
/// - `Failure` (1): Validation found errors
/// - `Error` (2): The tool itself failed (bad config file, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
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
