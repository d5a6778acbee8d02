//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the sl CLI.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// sl - analyze strings and query them by their properties
#[derive(Parser, Debug)]
#[command(name = "sl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Catalog file to use (default: from config, then the XDG cache dir)
    #[arg(long, global = true, env = "STRINGLENS_STORE")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a string and store it in the catalog
    #[command(alias = "a")]
    Add {
        /// The string to analyze
        value: String,
    },

    /// Show a stored string and its properties
    #[command(alias = "s")]
    Show {
        /// The exact string to look up
        value: String,
    },

    /// List stored strings, optionally filtered by property
    #[command(alias = "l")]
    List {
        /// Only palindromes (true) or non-palindromes (false)
        #[arg(long)]
        is_palindrome: Option<String>,

        /// Minimum length in characters (inclusive)
        #[arg(long)]
        min_length: Option<String>,

        /// Maximum length in characters (inclusive)
        #[arg(long)]
        max_length: Option<String>,

        /// Exact number of words
        #[arg(long)]
        word_count: Option<String>,

        /// Single character the string must contain (case-insensitive)
        #[arg(long)]
        contains_character: Option<String>,
    },

    /// Filter stored strings with a natural-language query
    #[command(alias = "q")]
    Query {
        /// Query phrase, e.g. "single word palindromic strings"
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },

    /// Remove a string from the catalog
    #[command(alias = "rm")]
    Delete {
        /// The exact string to remove
        value: String,
    },

    /// Analyze a string without storing it
    Analyze {
        /// The string to analyze
        value: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. store.path, output.color)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
