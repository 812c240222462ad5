use super::CommandResult;
use crate::issues::{Issue, Severity};

pub fn finish(
    mut issues: Vec<Issue>,
    templates_checked: usize,
    locale_files_checked: usize,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let warning_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Warning)
        .count();

    CommandResult {
        error_count,
        warning_count,
        issues,
        parse_error_count,
        templates_checked,
        locale_files_checked,
    }
}
