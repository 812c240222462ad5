use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".parlancerc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default = "default_primary_locale", alias = "baseLocale")]
    pub primary_locale: String,
    /// Application formatters, in addition to the built-in ones.
    #[serde(default)]
    pub formatters: Vec<String>,
    /// Glob patterns matched against translation keys.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_messages_root() -> String {
    "./i18n".to_string()
}

fn default_primary_locale() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            primary_locale: default_primary_locale(),
            formatters: Vec::new(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or a
    /// formatter name is blank.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if let Some(name) = self.formatters.iter().find(|name| name.trim().is_empty()) {
            anyhow::bail!("Invalid name in 'formatters': \"{}\"", name);
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
