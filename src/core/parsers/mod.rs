//! Parsers for templates and dictionary files.
//!
//! - `template`: Template string parser (`"{0} apple{{s}}"` -> parts)
//! - `json`: JSON dictionary loader (scans the messages root per locale)

pub mod json;
pub mod template;
