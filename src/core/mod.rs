//! Template engine core.
//!
//! raw template -> [`parsers::template::parse`] -> parts (memoized by
//! [`cache::ParseCache`]) -> [`extract::extract`] and [`translate::translate`].
//! The extractor and translator are independent consumers of the same parts.
//!
//! ## Module Structure
//!
//! - `data`: Part model, argument descriptors, diagnostics, dictionary types
//! - `parsers`: Template parser and JSON dictionary loader
//! - `cache`: Parse cache keyed by raw template
//! - `extract`: Argument model extraction with structural diagnostics
//! - `translate`: Runtime rendering with plural resolution and formatters
//! - `context`: Loaded project (config + dictionaries) for the rules

pub mod cache;
pub mod context;
pub mod data;
pub mod extract;
pub mod parsers;
pub mod translate;

pub use cache::ParseCache;
pub use context::{AllTemplates, CheckContext, ParsedTemplate};
pub use data::{
    AllDictionaries, ArgIdentity, Argument, ArgumentDescriptor, Diagnostic, DiagnosticKind,
    Dictionary, MessageContext, MessageLocation, Part, PluralBlock, PluralCategory, PluralForms,
    Severity,
};
pub use extract::{Extraction, extract};
pub use parsers::template::parse;
pub use translate::{Args, TranslateError, Translator, translate};
