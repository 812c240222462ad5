use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CommandResult, helper::finish};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        arguments::{check_mixed_args_issues, check_skipped_index_issues},
        formatters::check_unknown_formatters_issues,
        mismatch::check_argument_mismatch_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    MixedArgs,
    SkippedIndex,
    UnknownFormatter,
    ArgumentMismatch,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::MixedArgs,
            CheckRule::SkippedIndex,
            CheckRule::UnknownFormatter,
            CheckRule::ArgumentMismatch,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    Ok(run_checks(&ctx, &cmd.checks))
}

/// Run `checks` (all rules when empty) against a loaded context.
///
/// Dictionary parse errors are always reported.
pub fn run_checks(ctx: &CheckContext, checks: &[CheckRule]) -> CommandResult {
    let checks = if checks.is_empty() {
        CheckRule::all()
    } else {
        checks.to_vec()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::MixedArgs => {
                let issues = check_mixed_args_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::MixedArgs));
            }
            CheckRule::SkippedIndex => {
                let issues = check_skipped_index_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::SkippedIndex));
            }
            CheckRule::UnknownFormatter => {
                let issues = check_unknown_formatters_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::UnknownFormatter));
            }
            CheckRule::ArgumentMismatch => {
                let issues = check_argument_mismatch_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::ArgumentMismatch));
            }
        }
    }

    let parse_errors = ctx.message_parse_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    let templates_checked = ctx.templates().values().map(Vec::len).sum();
    finish(all_issues, templates_checked, ctx.file_count())
}
