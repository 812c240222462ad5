use std::{fmt, str::FromStr};

use serde::Serialize;

/// How an argument placeholder is bound to the caller's arguments.
///
/// - `{0}`, `{1}` bind by position (`Positional`)
/// - `{name}` binds by key (`Keyed`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ArgIdentity {
    Positional(usize),
    Keyed(String),
}

impl ArgIdentity {
    pub fn is_positional(&self) -> bool {
        matches!(self, ArgIdentity::Positional(_))
    }

    pub fn is_keyed(&self) -> bool {
        matches!(self, ArgIdentity::Keyed(_))
    }
}

impl fmt::Display for ArgIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgIdentity::Positional(index) => write!(f, "{}", index),
            ArgIdentity::Keyed(key) => write!(f, "{}", key),
        }
    }
}

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// All categories in CLDR order. Unlabeled plural forms are assigned in this order.
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluralCategory::Zero => write!(f, "zero"),
            PluralCategory::One => write!(f, "one"),
            PluralCategory::Two => write!(f, "two"),
            PluralCategory::Few => write!(f, "few"),
            PluralCategory::Many => write!(f, "many"),
            PluralCategory::Other => write!(f, "other"),
        }
    }
}

impl FromStr for PluralCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(PluralCategory::Zero),
            "one" => Ok(PluralCategory::One),
            "two" => Ok(PluralCategory::Two),
            "few" => Ok(PluralCategory::Few),
            "many" => Ok(PluralCategory::Many),
            "other" => Ok(PluralCategory::Other),
            _ => Err(()),
        }
    }
}

/// An argument placeholder: `{identity?:type|formatter|...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub identity: ArgIdentity,
    /// Declared type tag (`{0:number}`). Only used for static validation.
    pub type_tag: Option<String>,
    /// Formatter chain, applied left to right.
    pub formatters: Vec<String>,
    /// `{name?}` marks the argument as optional.
    pub optional: bool,
}

impl Argument {
    pub fn new(identity: ArgIdentity) -> Self {
        Self {
            identity,
            type_tag: None,
            formatters: Vec::new(),
            optional: false,
        }
    }
}

/// Plural forms keyed by category.
///
/// Each form is a part sequence of its own (Text and Argument parts only).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
    pub zero: Option<Vec<Part>>,
    pub one: Option<Vec<Part>>,
    pub two: Option<Vec<Part>>,
    pub few: Option<Vec<Part>>,
    pub many: Option<Vec<Part>>,
    pub other: Vec<Part>,
}

impl PluralForms {
    /// Select the form for `category`, falling back to `other`.
    pub fn select(&self, category: PluralCategory) -> &[Part] {
        let form = match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => None,
        };
        form.unwrap_or(&self.other)
    }

    /// The explicitly present form for `category`, without fallback.
    pub fn get(&self, category: PluralCategory) -> Option<&[Part]> {
        match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => Some(&self.other),
        }
    }

    pub fn set(&mut self, category: PluralCategory, form: Vec<Part>) {
        match category {
            PluralCategory::Zero => self.zero = Some(form),
            PluralCategory::One => self.one = Some(form),
            PluralCategory::Two => self.two = Some(form),
            PluralCategory::Few => self.few = Some(form),
            PluralCategory::Many => self.many = Some(form),
            PluralCategory::Other => self.other = form,
        }
    }

    /// Present forms in CLDR category order.
    pub fn iter(&self) -> impl Iterator<Item = (PluralCategory, &[Part])> {
        PluralCategory::ALL
            .into_iter()
            .filter_map(|category| self.get(category).map(|form| (category, form)))
    }
}

/// A plural block: `{{singular|plural}}` or `{{key:zero|one|other}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralBlock {
    /// The numeric argument driving form selection.
    pub key: ArgIdentity,
    /// True when written as `{{key:...}}`, false when bound implicitly.
    pub explicit: bool,
    pub forms: PluralForms,
}

/// One unit of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    Argument(Argument),
    Plural(PluralBlock),
}

impl Part {
    pub fn text(s: impl Into<String>) -> Self {
        Part::Text(s.into())
    }
}
