//! `parlance render`: render one template with the built-in collaborators.

use anyhow::{Result, anyhow, bail};
use serde_json::{Map, Value};

use super::super::{args::RenderCommand, exit_status::ExitStatus};
use crate::{
    core::{
        Args, CheckContext, Translator,
        translate::{Formatters, builtin_formatters},
    },
    locale::LocalePluralRules,
};

pub fn render(cmd: RenderCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let rendered = render_template(&ctx, &cmd)?;
    println!("{}", rendered);
    Ok(ExitStatus::Success)
}

/// Render the template `cmd.key` of the selected locale.
pub fn render_template(ctx: &CheckContext, cmd: &RenderCommand) -> Result<String> {
    let locale = cmd
        .locale
        .as_deref()
        .unwrap_or(&ctx.config.primary_locale);
    let Some(dictionary) = ctx.dictionary(locale) else {
        bail!(
            "Locale '{}' not found (available: {})",
            locale,
            ctx.locales().join(", ")
        );
    };
    let Some(message) = dictionary.get(&cmd.key) else {
        bail!("Key '{}' not found in locale '{}'", cmd.key, locale);
    };

    let args = build_args(&cmd.values, &cmd.args)?;
    let translator = Translator::new(
        LocalePluralRules::for_locale(locale),
        preview_formatters(&ctx.config.formatters),
    );

    translator
        .translate(&message.value, &args)
        .map_err(|e| anyhow!("Failed to render '{}': {}", cmd.key, e))
}

/// Built-in formatters plus the declared ones, which pass values through
/// unchanged since their implementations live in the application.
fn preview_formatters(declared: &[String]) -> Formatters {
    let mut formatters = builtin_formatters();
    for name in declared {
        if !formatters.contains(name) {
            formatters.insert(name.as_str(), |value: Value| value);
        }
    }
    formatters
}

/// Positional `values` or keyed `name=value` pairs; never both.
fn build_args(values: &[String], pairs: &[String]) -> Result<Args> {
    if !values.is_empty() && !pairs.is_empty() {
        bail!("Positional values and --arg cannot be combined");
    }

    if pairs.is_empty() {
        return Ok(Args::Positional(values.iter().map(|v| parse_value(v)).collect()));
    }

    let mut map = Map::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("Invalid --arg '{}', expected NAME=VALUE", pair);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Invalid --arg '{}', argument name is empty", pair);
        }
        map.insert(name.to_string(), parse_value(value));
    }
    Ok(Args::Keyed(map))
}

/// A JSON literal when `raw` is one (`3`, `true`, `"x"`), otherwise the string itself.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
