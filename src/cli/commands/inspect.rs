//! `parlance inspect`: print the argument model of templates.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde::Serialize;

use super::super::{args::InspectCommand, exit_status::ExitStatus};
use crate::core::{ArgumentDescriptor, CheckContext, Diagnostic, ParsedTemplate};

/// JSON shape of one inspected template.
#[derive(Debug, Serialize)]
struct InspectEntry<'a> {
    key: &'a str,
    locale: &'a str,
    template: &'a str,
    arguments: &'a [ArgumentDescriptor],
    diagnostics: &'a [Diagnostic],
}

impl<'a> InspectEntry<'a> {
    fn new(locale: &'a str, template: &'a ParsedTemplate) -> Self {
        Self {
            key: template.key(),
            locale,
            template: &template.context.value,
            arguments: &template.extraction.arguments,
            diagnostics: &template.extraction.diagnostics,
        }
    }
}

pub fn inspect(cmd: InspectCommand) -> Result<ExitStatus> {
    let ctx = CheckContext::new(&cmd.common)?;
    let mut out = io::stdout().lock();
    inspect_to(&ctx, &cmd, &mut out)?;
    Ok(ExitStatus::Success)
}

/// Write the inspect output for `cmd` to `writer`.
pub fn inspect_to<W: Write>(ctx: &CheckContext, cmd: &InspectCommand, writer: &mut W) -> Result<()> {
    let locale = cmd
        .locale
        .as_deref()
        .unwrap_or(&ctx.config.primary_locale);
    if ctx.dictionary(locale).is_none() {
        bail!(
            "Locale '{}' not found (available: {})",
            locale,
            ctx.locales().join(", ")
        );
    }

    match &cmd.key {
        Some(key) => {
            let Some(template) = ctx.template(locale, key) else {
                bail!("Key '{}' not found in locale '{}'", key, locale);
            };
            if cmd.json {
                let json = serde_json::to_string_pretty(&InspectEntry::new(locale, &template))
                    .context("Failed to serialize argument model")?;
                writeln!(writer, "{}", json)?;
            } else {
                write_template(&template, writer)?;
            }
        }
        None => {
            let templates = ctx.locale_templates(locale);
            if cmd.json {
                let entries: Vec<InspectEntry> = templates
                    .iter()
                    .map(|t| InspectEntry::new(locale, t))
                    .collect();
                let json = serde_json::to_string_pretty(&entries)
                    .context("Failed to serialize argument model")?;
                writeln!(writer, "{}", json)?;
            } else {
                for (i, template) in templates.iter().enumerate() {
                    if i > 0 {
                        writeln!(writer)?;
                    }
                    write_template(template, writer)?;
                }
            }
        }
    }

    Ok(())
}

fn write_template<W: Write>(template: &ParsedTemplate, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{} = \"{}\"",
        template.key().bold(),
        template.context.value
    )?;
    writeln!(
        writer,
        "  {} {}:{}",
        "-->".blue(),
        template.context.file_path(),
        template.context.line()
    )?;

    if template.extraction.arguments.is_empty() {
        writeln!(writer, "  {}", "(no arguments)".dimmed())?;
    }
    for argument in &template.extraction.arguments {
        let attributes = describe(argument);
        if attributes.is_empty() {
            writeln!(writer, "  {{{}}}", argument.identity)?;
        } else {
            writeln!(
                writer,
                "  {{{}}}  {}",
                argument.identity,
                attributes.join(", ").dimmed()
            )?;
        }
    }

    for diagnostic in &template.extraction.diagnostics {
        writeln!(
            writer,
            "  {}: {}",
            diagnostic.severity.to_string().bold().yellow(),
            diagnostic.message
        )?;
    }
    Ok(())
}

fn describe(argument: &ArgumentDescriptor) -> Vec<String> {
    let mut attributes = Vec::new();
    if let Some(type_tag) = &argument.type_tag {
        attributes.push(format!("type: {}", type_tag));
    }
    if !argument.formatters.is_empty() {
        attributes.push(format!("formatters: {}", argument.formatters.join(" | ")));
    }
    if argument.optional {
        attributes.push("optional".to_string());
    }
    if argument.pluralized {
        attributes.push("plural".to_string());
    }
    attributes
}
