use std::{
    fs,
    path::{Component, Path},
};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use walkdir::WalkDir;

use crate::core::{AllDictionaries, Dictionary, MessageContext, MessageLocation};

/// A dictionary file that could not be loaded.
#[derive(Debug, Clone)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanDictionariesResult {
    pub dictionaries: AllDictionaries,
    pub warnings: Vec<MessageScanWarning>,
}

/// Load one dictionary file into `dictionary`.
///
/// Keys of a namespace file are prefixed with the namespace (`auth` + `login`
/// -> `auth.login`).
pub fn parse_json_file(
    path: &Path,
    namespace: Option<&str>,
    dictionary: &mut Dictionary,
) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let file = SourceFile {
        path: path.to_string_lossy().to_string(),
        line_index: build_line_index(&content),
        content: &content,
    };
    flatten_json(&json, String::new(), namespace, &file, dictionary);
    dictionary.files.push(file.path);
    Ok(())
}

struct SourceFile<'a> {
    path: String,
    content: &'a str,
    line_index: Vec<usize>,
}

/// Build an index of line start byte offsets for O(log n) line lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line containing byte `offset`.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Line where `key_path` is defined.
///
/// Each path segment is searched after the previous one, and a match only
/// counts when it is followed by `:`, so `auth.title` skips a `"title"` that
/// appears in a value or under another object first.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();
            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

/// Flatten nested objects (and arrays, by index) into dotted keys.
///
/// `path` is the key path inside the file; the namespace only prefixes the
/// stored key. Non-string leaves are not templates and are skipped.
fn flatten_json(
    value: &Value,
    path: String,
    namespace: Option<&str>,
    file: &SourceFile<'_>,
    dictionary: &mut Dictionary,
) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_json(val, join_key(&path, key), namespace, file, dictionary);
            }
        }
        Value::Array(items) => {
            for (index, val) in items.iter().enumerate() {
                let segment = index.to_string();
                flatten_json(val, join_key(&path, &segment), namespace, file, dictionary);
            }
        }
        Value::String(template) if !path.is_empty() => {
            let line = find_key_line(file.content, &path, &file.line_index);
            let key = match namespace {
                Some(ns) => join_key(ns, &path),
                None => path,
            };
            let context = MessageContext::new(
                MessageLocation::with_line(file.path.clone(), line),
                key.clone(),
                template.clone(),
            );
            dictionary.entries.insert(key, context);
        }
        _ => {}
    }
}

/// Locale and namespace of a dictionary file relative to the messages root.
///
/// Examples:
/// - "en.json" -> ("en", None)
/// - "zh-CN.json" -> ("zh-CN", None)
/// - "de/auth.json" -> ("de", Some("auth"))
pub fn dictionary_source(relative: impl AsRef<Path>) -> Option<(String, Option<String>)> {
    let relative = relative.as_ref();
    if relative.extension().and_then(|e| e.to_str()) != Some("json") {
        return None;
    }

    let components: Vec<&str> = relative
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Option<_>>()?;

    let stem = relative.file_stem().and_then(|s| s.to_str())?.to_string();
    match components.as_slice() {
        [_] => Some((stem, None)),
        [locale, _] => Some((locale.to_string(), Some(stem))),
        _ => None,
    }
}

/// Load every dictionary under `messages_root`.
///
/// Files that fail to load are returned as warnings; the scan itself only
/// fails when the root is missing or unreadable.
pub fn scan_dictionaries(messages_root: impl AsRef<Path>) -> Result<ScanDictionariesResult> {
    let messages_root = messages_root.as_ref();
    let mut result = ScanDictionariesResult::default();

    if !messages_root.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .parlancerc.json 'messagesRoot' setting.",
            messages_root.display()
        );
    }

    if !messages_root.is_dir() {
        bail!("'{}' is not a directory.", messages_root.display());
    }

    let walker = WalkDir::new(messages_root)
        .min_depth(1)
        .max_depth(2)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.with_context(|| {
            format!("Failed to read messages directory '{}'", messages_root.display())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(messages_root) else {
            continue;
        };
        let Some((locale, namespace)) = dictionary_source(relative) else {
            continue;
        };

        let dictionary = result
            .dictionaries
            .entry(locale.clone())
            .or_insert_with(|| Dictionary::new(locale));
        if let Err(e) = parse_json_file(path, namespace.as_deref(), dictionary) {
            result.warnings.push(MessageScanWarning {
                file_path: path.to_string_lossy().to_string(),
                error: format!("{:#}", e),
            });
        }
    }

    // A locale whose only files failed to load has no dictionary.
    result.dictionaries.retain(|_, d| !d.files.is_empty());

    Ok(result)
}
