use std::{
    cell::OnceCell,
    collections::HashMap,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use anyhow::{Result, anyhow};
use glob::Pattern;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        AllDictionaries, Dictionary, Extraction, MessageContext, ParseCache, Part, extract, parse,
        parsers::json::scan_dictionaries,
    },
    issues::ParseErrorIssue,
};

/// A dictionary template with its parts and argument model.
#[derive(Debug, Clone)]
pub struct ParsedTemplate {
    pub context: MessageContext,
    pub parts: Arc<[Part]>,
    pub extraction: Extraction,
}

impl ParsedTemplate {
    /// Parse and extract `context.value` without going through a cache.
    pub fn new(context: MessageContext) -> Self {
        let parts: Arc<[Part]> = parse(&context.value).into();
        let extraction = extract(&parts, &context.key);
        Self {
            context,
            parts,
            extraction,
        }
    }

    pub fn key(&self) -> &str {
        &self.context.key
    }
}

/// Parsed templates of every locale, each list sorted by key.
pub type AllTemplates = HashMap<String, Vec<ParsedTemplate>>;

/// Loaded project: merged configuration, dictionaries and parsed templates.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--primary-locale en`)
/// 2. `.parlancerc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    dictionaries: AllDictionaries,

    ignore_patterns: Vec<Pattern>,

    cache: ParseCache,

    /// Parsed on first call to `templates()`.
    templates: OnceCell<AllTemplates>,

    message_parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Load config and dictionaries for the project at `--path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Messages root doesn't exist
    /// - Primary locale has no dictionary
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .parlancerc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(ref primary_locale) = common_args.primary_locale {
            config.primary_locale = primary_locale.clone();
        }
        if let Some(ref messages_root) = common_args.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }

        let messages_root = resolve_messages_root(&root_dir, &config.messages_root);
        let scan_result = scan_dictionaries(&messages_root)?;

        let message_parse_errors: Vec<ParseErrorIssue> = scan_result
            .warnings
            .into_iter()
            .map(|warning| {
                if verbose {
                    eprintln!("Warning: {} - {}", warning.file_path, warning.error);
                }
                ParseErrorIssue {
                    file_path: warning.file_path,
                    error: warning.error,
                }
            })
            .collect();

        if !scan_result.dictionaries.contains_key(&config.primary_locale) {
            return Err(anyhow!(
                "Primary locale '{}' dictionary not found in '{}'",
                config.primary_locale,
                messages_root.display()
            ));
        }

        Ok(Self::from_parts(
            config,
            root_dir,
            scan_result.dictionaries,
            message_parse_errors,
            verbose,
        ))
    }

    /// Build a context from already loaded dictionaries.
    pub fn from_parts(
        config: Config,
        root_dir: PathBuf,
        dictionaries: AllDictionaries,
        message_parse_errors: Vec<ParseErrorIssue>,
        verbose: bool,
    ) -> Self {
        let ignore_patterns = config.ignore_patterns();
        Self {
            config,
            root_dir,
            verbose,
            dictionaries,
            ignore_patterns,
            cache: ParseCache::new(),
            templates: OnceCell::new(),
            message_parse_errors,
        }
    }

    pub fn dictionaries(&self) -> &AllDictionaries {
        &self.dictionaries
    }

    pub fn dictionary(&self, locale: &str) -> Option<&Dictionary> {
        self.dictionaries.get(locale)
    }

    /// Locales with a dictionary, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.dictionaries.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Number of dictionary files loaded across all locales.
    pub fn file_count(&self) -> usize {
        self.dictionaries.values().map(|d| d.files.len()).sum()
    }

    /// Errors from dictionary files that could not be loaded.
    pub fn message_parse_errors(&self) -> &[ParseErrorIssue] {
        &self.message_parse_errors
    }

    /// True when `key` matches a config `ignores` pattern.
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignore_patterns.iter().any(|p| p.matches(key))
    }

    pub fn cache(&self) -> &ParseCache {
        &self.cache
    }

    /// Parsed templates of every locale (lazy initialization).
    ///
    /// Ignored keys are left out. Templates are parsed in parallel through the
    /// shared parse cache, so identical templates across locales parse once.
    pub fn templates(&self) -> &AllTemplates {
        self.templates.get_or_init(|| {
            let entries: Vec<(&str, &MessageContext)> = self
                .dictionaries
                .iter()
                .flat_map(|(locale, dictionary)| {
                    dictionary
                        .entries
                        .values()
                        .map(move |context| (locale.as_str(), context))
                })
                .filter(|(_, context)| !self.is_ignored(&context.key))
                .collect();

            let cache = &self.cache;
            let parsed: Vec<(&str, ParsedTemplate)> = entries
                .into_par_iter()
                .map(|(locale, context)| {
                    let parts = cache.get_parts(&context.value);
                    let extraction = extract(&parts, &context.key);
                    (
                        locale,
                        ParsedTemplate {
                            context: context.clone(),
                            parts,
                            extraction,
                        },
                    )
                })
                .collect();

            let mut templates = AllTemplates::new();
            for (locale, template) in parsed {
                templates
                    .entry(locale.to_string())
                    .or_default()
                    .push(template);
            }
            for list in templates.values_mut() {
                list.sort_by(|a, b| a.context.key.cmp(&b.context.key));
            }
            templates
        })
    }

    /// One template parsed through the shared cache, ignored or not.
    pub fn template(&self, locale: &str, key: &str) -> Option<ParsedTemplate> {
        let context = self.dictionary(locale)?.get(key)?;
        let parts = self.cache.get_parts(&context.value);
        let extraction = extract(&parts, &context.key);
        Some(ParsedTemplate {
            context: context.clone(),
            parts,
            extraction,
        })
    }

    /// Parsed templates of one locale, sorted by key.
    pub fn locale_templates(&self, locale: &str) -> &[ParsedTemplate] {
        self.templates()
            .get(locale)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Messages root resolved against the project root.
    pub fn resolved_messages_root(&self) -> PathBuf {
        resolve_messages_root(&self.root_dir, &self.config.messages_root)
    }
}

/// `messages_root` relative to `root_dir`, unless absolute or the root is `.`.
fn resolve_messages_root(root_dir: &Path, messages_root: &str) -> PathBuf {
    let p = Path::new(messages_root);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn common_args(path: &Path) -> CommonArgs {
        CommonArgs {
            path: Some(path.to_path_buf()),
            primary_locale: None,
            messages_root: None,
            verbose: false,
        }
    }

    #[test]
    fn test_resolve_messages_root_absolute_path() {
        assert_eq!(
            resolve_messages_root(Path::new("./project"), "/abs/i18n"),
            PathBuf::from("/abs/i18n")
        );
    }

    #[test]
    fn test_resolve_messages_root_relative_with_dot() {
        assert_eq!(
            resolve_messages_root(Path::new("."), "./i18n"),
            PathBuf::from("./i18n")
        );
    }

    #[test]
    fn test_resolve_messages_root_relative_with_root() {
        assert_eq!(
            resolve_messages_root(Path::new("/project"), "./i18n"),
            PathBuf::from("/project/i18n")
        );
        assert_eq!(
            resolve_messages_root(Path::new("/project"), "locales"),
            PathBuf::from("/project/locales")
        );
    }

    #[test]
    fn test_new_loads_dictionaries() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("i18n")).unwrap();
        fs::write(
            dir.path().join("i18n/en.json"),
            r#"{"apples": "{0} apple{{s}}", "legacy": {"title": "Old"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("i18n/de.json"), r#"{"apples": "{0} Apfel{{Äpfel}}"}"#)
            .unwrap();
        fs::write(
            dir.path().join(".parlancerc.json"),
            r#"{ "ignores": ["legacy.*"] }"#,
        )
        .unwrap();

        let ctx = CheckContext::new(&common_args(dir.path())).unwrap();

        assert_eq!(ctx.locales(), vec!["de", "en"]);
        assert_eq!(ctx.file_count(), 2);
        assert!(ctx.message_parse_errors().is_empty());
        assert!(ctx.is_ignored("legacy.title"));

        let en: Vec<&str> = ctx.locale_templates("en").iter().map(|t| t.key()).collect();
        assert_eq!(en, vec!["apples"]);
        assert!(ctx.locale_templates("fr").is_empty());
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("locales")).unwrap();
        fs::write(dir.path().join("locales/de.json"), r#"{"a": "A"}"#).unwrap();

        let mut args = common_args(dir.path());
        args.primary_locale = Some("de".to_string());
        args.messages_root = Some(PathBuf::from("locales"));

        let ctx = CheckContext::new(&args).unwrap();
        assert_eq!(ctx.config.primary_locale, "de");
        assert_eq!(ctx.resolved_messages_root(), dir.path().join("locales"));
    }

    #[test]
    fn test_missing_primary_locale() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::create_dir(dir.path().join("i18n")).unwrap();
        fs::write(dir.path().join("i18n/de.json"), r#"{"a": "A"}"#).unwrap();

        let err = CheckContext::new(&common_args(dir.path()))
            .err()
            .unwrap()
            .to_string();
        assert!(err.contains("Primary locale 'en'"));
    }

    #[test]
    fn test_templates_share_parse_cache() {
        let mut en = Dictionary::new("en");
        let mut de = Dictionary::new("de");
        for (dictionary, file) in [(&mut en, "en.json"), (&mut de, "de.json")] {
            dictionary.entries.insert(
                "count".to_string(),
                MessageContext::new(
                    crate::core::MessageLocation::with_line(file, 1),
                    "count",
                    "{0}",
                ),
            );
        }
        let dictionaries = AllDictionaries::from([("en".to_string(), en), ("de".to_string(), de)]);
        let ctx = CheckContext::from_parts(
            Config::default(),
            PathBuf::from("."),
            dictionaries,
            Vec::new(),
            false,
        );

        assert_eq!(ctx.templates().len(), 2);
        assert_eq!(ctx.cache().len(), 1);
    }

    #[test]
    fn test_template_lookup_ignores_ignore_patterns() {
        let mut en = Dictionary::new("en");
        en.entries.insert(
            "legacy.title".to_string(),
            MessageContext::new(
                crate::core::MessageLocation::with_line("en.json", 3),
                "legacy.title",
                "{name|uppercase}",
            ),
        );
        let config = Config {
            ignores: vec!["legacy.*".to_string()],
            ..Config::default()
        };
        let ctx = CheckContext::from_parts(
            config,
            PathBuf::from("."),
            AllDictionaries::from([("en".to_string(), en)]),
            Vec::new(),
            false,
        );

        assert!(ctx.locale_templates("en").is_empty());
        let template = ctx.template("en", "legacy.title").unwrap();
        assert_eq!(template.extraction.arguments.len(), 1);
        assert_eq!(template.extraction.formatter_names(), vec!["uppercase"]);
        assert!(ctx.template("en", "missing").is_none());
        assert!(ctx.template("fr", "legacy.title").is_none());
    }
}
