//! Core data types shared by the parser, extractor, translator and rules.
//!
//! ## Module Structure
//!
//! - `part`: Parsed template representation (Part, Argument, PluralBlock)
//! - `argument`: Extractor output (ArgumentDescriptor, Diagnostic, Severity)
//! - `message`: Dictionary types (Dictionary, MessageContext, MessageLocation)

pub mod argument;
pub mod message;
pub mod part;

pub use argument::{ArgumentDescriptor, Diagnostic, DiagnosticKind, Severity};
pub use message::{AllDictionaries, Dictionary, MessageContext, MessageLocation};
pub use part::{ArgIdentity, Argument, Part, PluralBlock, PluralCategory, PluralForms};
