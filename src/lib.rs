//! Parlance - typesafe-i18n style templates and dictionary checker
//!
//! Parlance parses parameterized, pluralizable translation templates
//! (`"{0} apple{{s}}"`), extracts their argument model for static checks and
//! renders them at runtime with injected plural rules and formatters. The CLI
//! checks JSON dictionaries for argument problems across locales.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (check, inspect, render, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Template parser, parse cache, argument extractor and translator
//! - `issues`: Issue type definitions and reporting
//! - `locale`: Built-in plural rules per language family
//! - `rules`: Dictionary check rules

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod locale;
pub mod rules;
