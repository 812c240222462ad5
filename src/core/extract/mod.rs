//! Argument model extraction.
//!
//! Walks a parsed template and reconciles every argument occurrence into one
//! [`ArgumentDescriptor`] per identity, then checks the template's argument
//! structure:
//!
//! 1. keyed and positional arguments must not be mixed
//! 2. positional indices must be `0..=max` without gaps
//!
//! Structural problems become [`Diagnostic`]s; extraction itself never fails.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::core::data::{
    ArgIdentity, Argument, ArgumentDescriptor, Diagnostic, DiagnosticKind, Part,
};


pub const MIXED_ARGUMENTS_MESSAGE: &str = "you can't mix keyed and index-based args";
pub const SKIPPED_INDEX_MESSAGE: &str = "make sure to not skip an index";

/// Argument model and diagnostics for one template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Positional arguments by index, then keyed arguments in first-seen order.
    pub arguments: Vec<ArgumentDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    pub fn get(&self, identity: &ArgIdentity) -> Option<&ArgumentDescriptor> {
        self.arguments.iter().find(|a| &a.identity == identity)
    }

    /// All formatter names referenced by the template, deduplicated, in order.
    pub fn formatter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.arguments.iter().flat_map(|a| &a.formatters) {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }
}

/// Extract the argument model of `parts`.
///
/// `template` identifies the template in diagnostics (usually its dictionary key).
pub fn extract(parts: &[Part], template: &str) -> Extraction {
    let mut table = DescriptorTable::default();
    table.visit(parts);

    let diagnostics = check_structure(&table.descriptors, template);
    Extraction {
        arguments: table.into_sorted(),
        diagnostics,
    }
}

#[derive(Default)]
struct DescriptorTable {
    descriptors: Vec<ArgumentDescriptor>,
    index: HashMap<ArgIdentity, usize>,
}

impl DescriptorTable {
    fn visit(&mut self, parts: &[Part]) {
        for part in parts {
            match part {
                Part::Text(_) => {}
                Part::Argument(argument) => self.merge_argument(argument),
                Part::Plural(block) => {
                    self.entry(&block.key).pluralized = true;
                    for (_, form) in block.forms.iter() {
                        self.visit(form);
                    }
                }
            }
        }
    }

    fn entry(&mut self, identity: &ArgIdentity) -> &mut ArgumentDescriptor {
        let next = self.descriptors.len();
        let slot = *self.index.entry(identity.clone()).or_insert(next);
        if slot == next {
            self.descriptors
                .push(ArgumentDescriptor::new(identity.clone(), next));
        }
        &mut self.descriptors[slot]
    }

    /// Later metadata wins; an occurrence without metadata keeps what is known.
    fn merge_argument(&mut self, argument: &Argument) {
        let descriptor = self.entry(&argument.identity);
        if argument.type_tag.is_some() {
            descriptor.type_tag = argument.type_tag.clone();
        }
        if !argument.formatters.is_empty() {
            descriptor.formatters = argument.formatters.clone();
        }
        descriptor.optional |= argument.optional;
    }

    fn into_sorted(self) -> Vec<ArgumentDescriptor> {
        let (mut positional, keyed): (Vec<_>, Vec<_>) = self
            .descriptors
            .into_iter()
            .partition(|d| d.identity.is_positional());
        positional.sort_by(|a, b| a.identity.cmp(&b.identity));
        positional.extend(keyed);
        positional
    }
}

fn check_structure(descriptors: &[ArgumentDescriptor], template: &str) -> Vec<Diagnostic> {
    let indices: BTreeSet<usize> = descriptors
        .iter()
        .filter_map(|d| match d.identity {
            ArgIdentity::Positional(index) => Some(index),
            ArgIdentity::Keyed(_) => None,
        })
        .collect();
    let first_keyed = descriptors.iter().find(|d| d.identity.is_keyed());

    let mut diagnostics = Vec::new();

    if let Some(keyed) = first_keyed
        && !indices.is_empty()
    {
        let expected = (0..).find(|i| !indices.contains(i)).unwrap_or_default();
        diagnostics.push(Diagnostic::warning(
            DiagnosticKind::MixedArguments,
            template,
            unexpected_argument(expected, &keyed.identity),
        ));
        diagnostics.push(Diagnostic::warning(
            DiagnosticKind::MixedArguments,
            template,
            MIXED_ARGUMENTS_MESSAGE,
        ));
    }

    if let Some((expected, found)) = first_gap(&indices) {
        diagnostics.push(Diagnostic::warning(
            DiagnosticKind::SkippedIndex,
            template,
            unexpected_argument(expected, &ArgIdentity::Positional(found)),
        ));
        diagnostics.push(Diagnostic::warning(
            DiagnosticKind::SkippedIndex,
            template,
            SKIPPED_INDEX_MESSAGE,
        ));
    }

    diagnostics
}

/// Smallest missing index below the maximum, with the next index actually used.
fn first_gap(indices: &BTreeSet<usize>) -> Option<(usize, usize)> {
    let mut expected = 0;
    for &index in indices {
        if index != expected {
            return Some((expected, index));
        }
        expected += 1;
    }
    None
}

fn unexpected_argument(expected: usize, found: &ArgIdentity) -> String {
    format!("argument {{{}}} expected, but {{{}}} found", expected, found)
}
