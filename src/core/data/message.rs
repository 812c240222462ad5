use std::collections::{BTreeMap, HashMap};

/// Position of a template in a dictionary file (JSON).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the dictionary file (e.g., "./i18n/en.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }

    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self::new(file_path, line, 1)
    }
}

/// A template together with its key and where it was defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// The translation key (e.g., "auth.login").
    pub key: String,
    /// The raw template.
    pub value: String,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            location,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// All templates of one locale, across its dictionary files.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Locale code (e.g., "en", "de-at").
    pub locale: String,
    /// Files that contributed entries (root file and namespace files).
    pub files: Vec<String>,
    /// Templates keyed by flattened translation key, in key order.
    pub entries: BTreeMap<String, MessageContext>,
}

/// Dictionaries keyed by locale.
pub type AllDictionaries = HashMap<String, Dictionary>;

impl Dictionary {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            files: Vec::new(),
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MessageContext> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
