//! Unknown formatter detection rule.
//!
//! Detects templates that name a formatter which is neither built in nor
//! declared in the config's `formatters` list. Rendering such a template fails
//! with `FormatterNotFound`, so this is reported as an error.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    core::{AllTemplates, CheckContext, translate::BUILTIN_FORMATTERS},
    issues::UnknownFormatterIssue,
};

/// Only runs when the config declares at least one formatter; a project that
/// declares none has not opted in to formatter checking.
pub fn check_unknown_formatters_issues(ctx: &CheckContext) -> Vec<UnknownFormatterIssue> {
    if ctx.config.formatters.is_empty() {
        return Vec::new();
    }
    check_unknown_formatters(ctx.templates(), &ctx.config.formatters)
}

/// Check every template against the built-in and `declared` formatters.
///
/// One issue per (template, formatter name), in order of first use.
pub fn check_unknown_formatters(
    templates: &AllTemplates,
    declared: &[String],
) -> Vec<UnknownFormatterIssue> {
    let known: HashSet<&str> = BUILTIN_FORMATTERS
        .iter()
        .copied()
        .chain(declared.iter().map(String::as_str))
        .collect();

    let mut issues: Vec<UnknownFormatterIssue> = templates
        .par_iter()
        .flat_map_iter(|(locale, list)| {
            let known = &known;
            list.iter().flat_map(move |template| {
                template
                    .extraction
                    .formatter_names()
                    .into_iter()
                    .filter(|name| !known.contains(name))
                    .map(|name| UnknownFormatterIssue {
                        context: template.context.clone(),
                        locale: locale.clone(),
                        formatter: name.to_string(),
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    issues.sort_by(|a, b| a.context.location.cmp(&b.context.location));
    issues
}
