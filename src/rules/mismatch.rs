//! Argument mismatch detection rule.
//!
//! The primary locale's template defines the argument model of a key. A
//! replica template that uses an argument the primary template does not
//! declare cannot be rendered with the arguments callers pass.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    core::{AllTemplates, ArgIdentity, CheckContext, Extraction},
    issues::ArgumentMismatchIssue,
};

pub fn check_argument_mismatch_issues(ctx: &CheckContext) -> Vec<ArgumentMismatchIssue> {
    check_argument_mismatch(&ctx.config.primary_locale, ctx.templates())
}

/// Check every non-primary template against the primary template of its key.
///
/// Keys missing from the primary locale are skipped.
pub fn check_argument_mismatch(
    primary_locale: &str,
    templates: &AllTemplates,
) -> Vec<ArgumentMismatchIssue> {
    let Some(primary) = templates.get(primary_locale) else {
        return Vec::new();
    };
    let primary: HashMap<&str, &Extraction> = primary
        .iter()
        .map(|t| (t.key(), &t.extraction))
        .collect();

    let mut issues: Vec<ArgumentMismatchIssue> = templates
        .par_iter()
        .filter(|(locale, _)| locale.as_str() != primary_locale)
        .flat_map_iter(|(locale, list)| {
            let primary = &primary;
            list.iter().flat_map(move |template| {
                let Some(expected) = primary.get(template.key()) else {
                    return Vec::new();
                };
                let declared: Vec<ArgIdentity> = expected
                    .arguments
                    .iter()
                    .map(|a| a.identity.clone())
                    .collect();

                template
                    .extraction
                    .arguments
                    .iter()
                    .filter(|a| !declared.contains(&a.identity))
                    .map(|a| ArgumentMismatchIssue {
                        context: template.context.clone(),
                        locale: locale.clone(),
                        primary_locale: primary_locale.to_string(),
                        argument: a.identity.clone(),
                        expected: declared.clone(),
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.argument.cmp(&b.argument))
    });
    issues
}
