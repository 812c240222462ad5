//! Runtime translator.
//!
//! Evaluates a parsed template against arguments, a [`PluralResolver`] and a
//! [`FormatterRegistry`]. Rendering is deterministic: same parts, args, resolver
//! and formatters always give the same string.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown formatter | Name missing from registry | `Err(FormatterNotFound)` |
//! | Missing argument | Identity absent from args | Renders as empty |
//! | Non-numeric plural value | e.g. `"many"` | Selects the `other` form |

pub mod formatter;
pub mod plural;
pub mod value;

use std::fmt;

use serde_json::Value;

use crate::core::{
    cache::ParseCache,
    data::{Argument, Part, PluralBlock, PluralCategory},
};

pub use formatter::{BUILTIN_FORMATTERS, Formatter, FormatterRegistry, Formatters, builtin_formatters};
pub use plural::PluralResolver;
pub use value::{Args, as_number, display_value};

/// Errors from rendering a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A template references a formatter the registry does not know.
    FormatterNotFound { name: String },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormatterNotFound { name } => {
                write!(f, "formatter '{}' is not registered", name)
            }
        }
    }
}

impl std::error::Error for TranslateError {}

/// Render `parts` with `args`.
pub fn translate<P, F>(
    parts: &[Part],
    plural: &P,
    formatters: &F,
    args: &Args,
) -> Result<String, TranslateError>
where
    P: PluralResolver + ?Sized,
    F: FormatterRegistry + ?Sized,
{
    let mut output = String::new();
    render_into(&mut output, parts, plural, formatters, args)?;
    Ok(output)
}

fn render_into<P, F>(
    output: &mut String,
    parts: &[Part],
    plural: &P,
    formatters: &F,
    args: &Args,
) -> Result<(), TranslateError>
where
    P: PluralResolver + ?Sized,
    F: FormatterRegistry + ?Sized,
{
    for part in parts {
        match part {
            Part::Text(text) => output.push_str(text),
            Part::Argument(argument) => {
                let value = format_argument(argument, formatters, args)?;
                output.push_str(&display_value(&value));
            }
            Part::Plural(block) => {
                let form = select_form(block, plural, args);
                render_into(output, form, plural, formatters, args)?;
            }
        }
    }
    Ok(())
}

fn format_argument<F>(argument: &Argument, formatters: &F, args: &Args) -> Result<Value, TranslateError>
where
    F: FormatterRegistry + ?Sized,
{
    let mut value = args.get(&argument.identity).cloned().unwrap_or(Value::Null);
    for name in &argument.formatters {
        let formatter =
            formatters
                .resolve(name)
                .ok_or_else(|| TranslateError::FormatterNotFound { name: name.clone() })?;
        value = formatter.format(value);
    }
    Ok(value)
}

/// Form for the block's bound value.
///
/// `true`/`false` pick `one`/`other` directly, and the number `0` picks the
/// `zero` form when the block has one, before the resolver is asked. Numeric
/// strings always go through the resolver.
fn select_form<'a, P>(block: &'a PluralBlock, plural: &P, args: &Args) -> &'a [Part]
where
    P: PluralResolver + ?Sized,
{
    let category = match args.get(&block.key) {
        Some(Value::Bool(true)) => PluralCategory::One,
        Some(Value::Bool(false)) | None => PluralCategory::Other,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) && block.forms.zero.is_some() => {
            PluralCategory::Zero
        }
        Some(value) => match as_number(value) {
            Some(n) => plural.category_for(n),
            None => PluralCategory::Other,
        },
    };
    block.forms.select(category)
}

/// Renders raw templates through an owned parse cache.
pub struct Translator<P, F> {
    cache: ParseCache,
    plural: P,
    formatters: F,
}

impl<P, F> Translator<P, F>
where
    P: PluralResolver,
    F: FormatterRegistry,
{
    pub fn new(plural: P, formatters: F) -> Self {
        Self {
            cache: ParseCache::new(),
            plural,
            formatters,
        }
    }

    pub fn translate(&self, raw: &str, args: &Args) -> Result<String, TranslateError> {
        let parts = self.cache.get_parts(raw);
        translate(&parts, &self.plural, &self.formatters, args)
    }

    pub fn cache(&self) -> &ParseCache {
        &self.cache
    }
}
