use std::fmt;

use serde::Serialize;

use super::ArgIdentity;

/// One argument of a template, reconciled across all its occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentDescriptor {
    pub identity: ArgIdentity,
    /// Declared type tag, `None` when no occurrence declares one.
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    pub formatters: Vec<String>,
    /// Order of first appearance in the template (0-based).
    pub first_seen: usize,
    pub optional: bool,
    /// True when the argument drives at least one plural block.
    pub pluralized: bool,
}

impl ArgumentDescriptor {
    pub fn new(identity: ArgIdentity, first_seen: usize) -> Self {
        Self {
            identity,
            type_tag: None,
            formatters: Vec::new(),
            first_seen,
            optional: false,
            pluralized: false,
        }
    }
}

/// Severity level of a diagnostic or issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Structural problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Keyed and positional arguments in the same template.
    MixedArguments,
    /// Positional indices with a gap.
    SkippedIndex,
}

/// A non-fatal finding about a template's argument structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Identity of the owning template (usually its dictionary key).
    pub template: String,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(
        kind: DiagnosticKind,
        template: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            template: template.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translation '{}' => {}", self.template, self.message)
    }
}
