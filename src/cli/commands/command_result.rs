use crate::issues::Issue;

use super::super::exit_status::ExitStatus;

/// Result of running `parlance check`.
pub struct CommandResult {
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check, sorted.
    pub issues: Vec<Issue>,
    /// Number of dictionary files that failed to load.
    pub parse_error_count: usize,
    /// Number of templates that were checked.
    pub templates_checked: usize,
    /// Number of dictionary files that were loaded.
    pub locale_files_checked: usize,
}

impl CommandResult {
    /// `Failure` when any issue is an error; warnings alone pass.
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
