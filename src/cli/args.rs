//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check dictionary templates (argument structure, formatters, mismatches)
//! - `inspect`: Print the argument model of templates
//! - `render`: Render one template with the built-in plural rules and formatters
//! - `init`: Initialize the parlance configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Inspect(cmd)) => cmd.common.verbose,
            Some(Command::Render(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (where .parlancerc.json is searched from)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Primary locale (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Translation key to inspect (default: all keys)
    pub key: Option<String>,

    /// Locale to inspect (default: primary locale)
    #[arg(long)]
    pub locale: Option<String>,

    /// Print the argument model as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Translation key to render
    pub key: String,

    /// Positional argument values ({0}, {1}, ...); JSON literals or plain strings
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Keyed argument value as name=value; can be repeated
    #[arg(long = "arg", value_name = "NAME=VALUE")]
    pub args: Vec<String>,

    /// Locale to render (default: primary locale)
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check dictionary templates for argument and formatter problems
    Check(CheckCommand),
    /// Print the argument model of one or all templates
    Inspect(InspectCommand),
    /// Render a template with the given arguments
    Render(RenderCommand),
    /// Initialize a new .parlancerc.json configuration file
    Init,
}
