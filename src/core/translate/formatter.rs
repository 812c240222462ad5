//! Formatter registry.
//!
//! A formatter is a named value transform. Templates name formatters
//! (`{0|uppercase}`); the registry resolves those names at render time.

use std::{collections::HashMap, fmt};

use serde_json::Value;

use super::value::display_value;

/// A value transform applied to an argument before insertion.
pub trait Formatter: Send + Sync {
    fn format(&self, value: Value) -> Value;
}

impl<F> Formatter for F
where
    F: Fn(Value) -> Value + Send + Sync,
{
    fn format(&self, value: Value) -> Value {
        self(value)
    }
}

/// Resolves formatter names to formatters.
pub trait FormatterRegistry {
    /// `None` means the name is not registered.
    fn resolve(&self, name: &str) -> Option<&dyn Formatter>;
}

/// Formatters registered by name.
#[derive(Default)]
pub struct Formatters {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl Formatters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, formatter: impl Formatter + 'static) {
        self.formatters.insert(name.into(), Box::new(formatter));
    }

    /// Builder-style [`Formatters::insert`].
    pub fn with(mut self, name: impl Into<String>, formatter: impl Formatter + 'static) -> Self {
        self.insert(name, formatter);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formatters.keys().map(String::as_str)
    }
}

impl FormatterRegistry for Formatters {
    fn resolve(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }
}

impl fmt::Debug for Formatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Formatters").field("names", &names).finish()
    }
}

/// Names of the formatters every project gets without declaring them.
pub const BUILTIN_FORMATTERS: &[&str] = &["identity", "ignore", "lowercase", "uppercase"];

/// The built-in formatters.
///
/// - `identity`: returns the value unchanged
/// - `ignore`: renders nothing
/// - `lowercase` / `uppercase`: case conversion of the value's string form
pub fn builtin_formatters() -> Formatters {
    Formatters::new()
        .with("identity", |value: Value| value)
        .with("ignore", |_: Value| Value::String(String::new()))
        .with("lowercase", |value: Value| {
            Value::String(display_value(&value).to_lowercase())
        })
        .with("uppercase", |value: Value| {
            Value::String(display_value(&value).to_uppercase())
        })
}
