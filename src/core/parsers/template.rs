//! Template parser.
//!
//! Turns a raw template such as `"{0} apple{{s}}"` into a sequence of [`Part`]s.
//! Parsing is total: anything that does not form a valid placeholder is kept as
//! literal text, delimiters included.
//!
//! ## Grammar
//!
//! - `{identity}`, `{identity:type}`, `{identity|fmt1|fmt2}`, `{identity?}`
//! - `{{forms}}` and `{{key:forms}}`, forms separated by `|`
//! - labeled forms: `{{one=apple|other=apples}}`

use std::sync::LazyLock;

use regex::Regex;

use crate::core::data::{ArgIdentity, Argument, Part, PluralBlock, PluralCategory, PluralForms};

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}_$][\p{L}\p{N}_$]*$").unwrap());

/// Categories assigned to unlabeled forms, in order, before the final `other` form.
const UNLABELED_CATEGORIES: [PluralCategory; 5] = [
    PluralCategory::Zero,
    PluralCategory::One,
    PluralCategory::Two,
    PluralCategory::Few,
    PluralCategory::Many,
];

/// Parse a raw template into parts.
///
/// Implicit plural blocks (`{{s}}`) are bound here: to the nearest preceding
/// argument, else to the first argument of the template, else to `{0}`.
pub fn parse(raw: &str) -> Vec<Part> {
    let mut parts = scan(raw, true);
    bind_implicit_plurals(&mut parts);
    parts
}

/// Collects parts, merging adjacent text.
#[derive(Default)]
struct PartsBuilder {
    parts: Vec<Part>,
}

impl PartsBuilder {
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Part::Text(last)) = self.parts.last_mut() {
            last.push_str(text);
        } else {
            self.parts.push(Part::text(text));
        }
    }

    fn push(&mut self, part: Part) {
        match part {
            Part::Text(text) => self.push_text(&text),
            other => self.parts.push(other),
        }
    }

    fn finish(self) -> Vec<Part> {
        self.parts
    }
}

fn scan(raw: &str, allow_plural: bool) -> Vec<Part> {
    let bytes = raw.as_bytes();
    let mut builder = PartsBuilder::default();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'{' {
            let next = raw[i..].find('{').map_or(raw.len(), |pos| i + pos);
            builder.push_text(&raw[i..next]);
            i = next;
            continue;
        }

        if allow_plural && bytes.get(i + 1) == Some(&b'{') {
            if let Some(end) = find_plural_end(bytes, i + 2) {
                builder.push(Part::Plural(parse_plural(&raw[i + 2..end])));
                i = end + 2;
                continue;
            }
        } else if let Some(end) = find_argument_end(bytes, i + 1)
            && let Some(argument) = parse_argument(&raw[i + 1..end])
        {
            builder.push(Part::Argument(argument));
            i = end + 1;
            continue;
        }

        builder.push_text("{");
        i += 1;
    }

    builder.finish()
}

/// Index of the first `}` of the `}}` closing a plural block opened before `start`.
///
/// A lone `}` outside nested placeholders stays part of the form text.
fn find_plural_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for j in start..bytes.len() {
        match bytes[j] {
            b'{' => depth += 1,
            b'}' if depth > 0 => depth -= 1,
            b'}' if bytes.get(j + 1) == Some(&b'}') => return Some(j),
            _ => {}
        }
    }
    None
}

/// Index of the `}` closing an argument placeholder, if no `{` comes first.
fn find_argument_end(bytes: &[u8], start: usize) -> Option<usize> {
    bytes[start..]
        .iter()
        .position(|&b| b == b'{' || b == b'}')
        .map(|pos| start + pos)
        .filter(|&end| bytes[end] == b'}')
}

fn parse_identity(raw: &str, allow_optional: bool) -> Option<(ArgIdentity, bool)> {
    let mut identity = raw.trim();
    let mut optional = false;
    if allow_optional && let Some(stripped) = identity.strip_suffix('?') {
        identity = stripped.trim_end();
        optional = true;
    }

    if identity.is_empty() {
        return None;
    }
    if identity.bytes().all(|b| b.is_ascii_digit()) {
        return identity
            .parse()
            .ok()
            .map(|index| (ArgIdentity::Positional(index), optional));
    }
    IDENTIFIER_REGEX
        .is_match(identity)
        .then(|| (ArgIdentity::Keyed(identity.to_string()), optional))
}

fn parse_argument(content: &str) -> Option<Argument> {
    let (head, formatter_chain) = match content.split_once('|') {
        Some((head, chain)) => (head, Some(chain)),
        None => (content, None),
    };
    let (identity_raw, type_raw) = match head.split_once(':') {
        Some((identity, type_tag)) => (identity, Some(type_tag)),
        None => (head, None),
    };

    let (identity, optional) = parse_identity(identity_raw, true)?;

    let type_tag = type_raw
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from);

    let formatters = formatter_chain
        .map(|chain| {
            chain
                .split('|')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Some(Argument {
        identity,
        type_tag,
        formatters,
        optional,
    })
}

fn parse_plural(content: &str) -> PluralBlock {
    let (key, body) = match split_plural_key(content) {
        Some((key, body)) => (Some(key), body),
        None => (None, content),
    };

    PluralBlock {
        explicit: key.is_some(),
        // Implicit keys are replaced by `bind_implicit_plurals`.
        key: key.unwrap_or(ArgIdentity::Positional(0)),
        forms: assign_forms(&split_forms(body)),
    }
}

/// Split `key:forms` when the text before the first `:` is a valid identity.
fn split_plural_key(content: &str) -> Option<(ArgIdentity, &str)> {
    let (prefix, body) = content.split_once(':')?;
    if prefix.contains(['{', '}', '|']) {
        return None;
    }
    let (identity, _) = parse_identity(prefix, false)?;
    Some((identity, body))
}

/// Split plural forms on `|` outside nested placeholders.
fn split_forms(body: &str) -> Vec<&str> {
    let mut forms = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, b) in body.bytes().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b'|' if depth == 0 => {
                forms.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    forms.push(&body[start..]);
    forms
}

fn assign_forms(raw_forms: &[&str]) -> PluralForms {
    if let Some(forms) = labeled_forms(raw_forms) {
        return forms;
    }

    let mut forms = PluralForms::default();
    match raw_forms {
        [] => {}
        [other] => {
            forms.one = Some(Vec::new());
            forms.other = scan(other, false);
        }
        [one, other] => {
            forms.one = Some(scan(one, false));
            forms.other = scan(other, false);
        }
        [rest @ .., other] => {
            for (category, form) in UNLABELED_CATEGORIES.into_iter().zip(rest) {
                forms.set(category, scan(form, false));
            }
            forms.other = scan(other, false);
        }
    }
    forms
}

/// `{{one=apple|other=apples}}`: only when every form carries a category label.
fn labeled_forms(raw_forms: &[&str]) -> Option<PluralForms> {
    let mut forms = PluralForms::default();
    for raw in raw_forms {
        let (label, form) = raw.split_once('=')?;
        let category: PluralCategory = label.trim().parse().ok()?;
        forms.set(category, scan(form, false));
    }
    Some(forms)
}

fn bind_implicit_plurals(parts: &mut [Part]) {
    let first = first_identity(parts);
    let mut last: Option<ArgIdentity> = None;

    for part in parts.iter_mut() {
        match part {
            Part::Argument(argument) => last = Some(argument.identity.clone()),
            Part::Plural(block) if block.explicit => last = Some(block.key.clone()),
            Part::Plural(block) => {
                block.key = last
                    .clone()
                    .or_else(|| first.clone())
                    .unwrap_or(ArgIdentity::Positional(0));
            }
            Part::Text(_) => {}
        }
    }
}

fn first_identity(parts: &[Part]) -> Option<ArgIdentity> {
    parts.iter().find_map(|part| match part {
        Part::Argument(argument) => Some(argument.identity.clone()),
        Part::Plural(block) if block.explicit => Some(block.key.clone()),
        Part::Plural(block) => block.forms.iter().find_map(|(_, form)| first_identity(form)),
        Part::Text(_) => None,
    })
}
