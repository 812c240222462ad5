//! Rule implementations for parlance.
//!
//! Each rule is a pure function over the parsed templates that returns a
//! specific issue type, plus a `*_issues(ctx)` wrapper that pulls its inputs
//! from the [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `arguments`: Mixed keyed/positional arguments and skipped indices
//! - `formatters`: Formatters that are neither built in nor declared
//! - `mismatch`: Replica templates using arguments the primary does not declare

pub mod arguments;
pub mod formatters;
pub mod mismatch;

#[cfg(test)]
pub(crate) fn test_templates(
    locales: &[(&str, &[(&str, &str)])],
) -> crate::core::AllTemplates {
    use crate::core::{MessageContext, MessageLocation, ParsedTemplate};

    locales
        .iter()
        .map(|(locale, entries)| {
            let file = format!("{}.json", locale);
            let templates = entries
                .iter()
                .enumerate()
                .map(|(i, (key, value))| {
                    let location = MessageLocation::with_line(file.clone(), i + 2);
                    ParsedTemplate::new(MessageContext::new(location, *key, *value))
                })
                .collect();
            (locale.to_string(), templates)
        })
        .collect()
}
