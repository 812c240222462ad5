//! Argument structure rules.
//!
//! Turns the extractor's structural diagnostics into issues:
//! - `mixed-args`: keyed and positional arguments in one template
//! - `skipped-index`: gaps in positional indices

use rayon::prelude::*;

use crate::{
    core::{AllTemplates, CheckContext, Diagnostic, DiagnosticKind, ParsedTemplate},
    issues::{MixedArgsIssue, SkippedIndexIssue},
};

pub fn check_mixed_args_issues(ctx: &CheckContext) -> Vec<MixedArgsIssue> {
    check_mixed_args(ctx.templates())
}

pub fn check_skipped_index_issues(ctx: &CheckContext) -> Vec<SkippedIndexIssue> {
    check_skipped_index(ctx.templates())
}

/// One issue per `MixedArguments` diagnostic, across all locales.
pub fn check_mixed_args(templates: &AllTemplates) -> Vec<MixedArgsIssue> {
    let mut issues: Vec<MixedArgsIssue> = templates
        .par_iter()
        .flat_map_iter(|(locale, list)| {
            diagnostics_of(list, DiagnosticKind::MixedArguments).map(|(template, diagnostic)| {
                MixedArgsIssue {
                    context: template.context.clone(),
                    locale: locale.clone(),
                    diagnostic,
                }
            })
        })
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.diagnostic.message.cmp(&b.diagnostic.message))
    });
    issues
}

/// One issue per `SkippedIndex` diagnostic, across all locales.
pub fn check_skipped_index(templates: &AllTemplates) -> Vec<SkippedIndexIssue> {
    let mut issues: Vec<SkippedIndexIssue> = templates
        .par_iter()
        .flat_map_iter(|(locale, list)| {
            diagnostics_of(list, DiagnosticKind::SkippedIndex).map(|(template, diagnostic)| {
                SkippedIndexIssue {
                    context: template.context.clone(),
                    locale: locale.clone(),
                    diagnostic,
                }
            })
        })
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.diagnostic.message.cmp(&b.diagnostic.message))
    });
    issues
}

fn diagnostics_of(
    templates: &[ParsedTemplate],
    kind: DiagnosticKind,
) -> impl Iterator<Item = (&ParsedTemplate, Diagnostic)> {
    templates.iter().flat_map(move |template| {
        template
            .extraction
            .diagnostics
            .iter()
            .filter(move |d| d.kind == kind)
            .map(move |d| (template, d.clone()))
    })
}
