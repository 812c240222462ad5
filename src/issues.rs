//! Issue types for dictionary checks.
//!
//! Issues are the reporter's view of core diagnostics plus the dictionary-level
//! checks. Each issue carries everything the reporter needs to display it.

use enum_dispatch::enum_dispatch;

use crate::core::{ArgIdentity, Diagnostic, MessageContext};

pub use crate::core::Severity;

// ============================================================
// Rule
// ============================================================

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MixedArgs,
    SkippedIndex,
    UnknownFormatter,
    ArgumentMismatch,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MixedArgs => write!(f, "mixed-args"),
            Rule::SkippedIndex => write!(f, "skipped-index"),
            Rule::UnknownFormatter => write!(f, "unknown-formatter"),
            Rule::ArgumentMismatch => write!(f, "argument-mismatch"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Templates (MessageContext)
// ============================================================

/// Template mixes keyed and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedArgsIssue {
    pub context: MessageContext,
    pub locale: String,
    pub diagnostic: Diagnostic,
}

impl MixedArgsIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MixedArgs
    }
}

/// Template skips a positional index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedIndexIssue {
    pub context: MessageContext,
    pub locale: String,
    pub diagnostic: Diagnostic,
}

impl SkippedIndexIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::SkippedIndex
    }
}

/// Template references a formatter that is neither built in nor declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormatterIssue {
    pub context: MessageContext,
    pub locale: String,
    /// The unknown formatter name.
    pub formatter: String,
}

impl UnknownFormatterIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnknownFormatter
    }
}

/// Replica template uses an argument the primary template does not declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentMismatchIssue {
    pub context: MessageContext,
    /// Locale of the offending template.
    pub locale: String,
    /// The primary locale code (e.g., "en").
    pub primary_locale: String,
    pub argument: ArgIdentity,
    /// Arguments the primary template declares.
    pub expected: Vec<ArgIdentity>,
}

impl ArgumentMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ArgumentMismatch
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// Dictionary file could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while checking dictionaries.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MixedArgs(MixedArgsIssue),
    SkippedIndex(SkippedIndexIssue),
    UnknownFormatter(UnknownFormatterIssue),
    ArgumentMismatch(ArgumentMismatchIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MixedArgs(_) => MixedArgsIssue::severity(),
            Issue::SkippedIndex(_) => SkippedIndexIssue::severity(),
            Issue::UnknownFormatter(_) => UnknownFormatterIssue::severity(),
            Issue::ArgumentMismatch(_) => ArgumentMismatchIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MixedArgs(_) => MixedArgsIssue::rule(),
            Issue::SkippedIndex(_) => SkippedIndexIssue::rule(),
            Issue::UnknownFormatter(_) => UnknownFormatterIssue::rule(),
            Issue::ArgumentMismatch(_) => ArgumentMismatchIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Template in a dictionary file.
    Message(&'a MessageContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by every issue type; `enum_dispatch` forwards it through [`Issue`].
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

fn template_note(locale: &str, context: &MessageContext) -> String {
    format!("in {} (\"{}\")", locale, context.value)
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MixedArgsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.diagnostic.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(template_note(&self.locale, &self.context))
    }
}

impl Report for SkippedIndexIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.diagnostic.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(template_note(&self.locale, &self.context))
    }
}

impl Report for UnknownFormatterIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "translation '{}' => formatter '{}' is not registered",
            self.context.key, self.formatter
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("add it to 'formatters' in .parlancerc.json")
    }

    fn details(&self) -> Option<String> {
        Some(template_note(&self.locale, &self.context))
    }
}

impl Report for ArgumentMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        format!(
            "translation '{}' => argument {{{}}} is not declared in '{}'",
            self.context.key, self.argument, self.primary_locale
        )
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let expected: Vec<String> = self
            .expected
            .iter()
            .map(|identity| format!("{{{}}}", identity))
            .collect();
        let expected = if expected.is_empty() {
            "none".to_string()
        } else {
            expected.join(", ")
        };
        Some(format!(
            "{}, expected: {}",
            template_note(&self.locale, &self.context),
            expected
        ))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // file path, line, col, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
