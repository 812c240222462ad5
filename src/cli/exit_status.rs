use std::process::ExitCode;

/// Process exit status of a parlance command.
///
/// - `Success` (0): finished; warnings alone still succeed
/// - `Failure` (1): `check` found error-severity issues, or `init` found an existing config
/// - `Error` (2): the command could not run (bad config, missing messages root,
///   unknown key, formatter missing during render)
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
