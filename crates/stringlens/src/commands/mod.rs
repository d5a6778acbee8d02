//! Command implementations for the sl CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod add;
pub mod analyze;
pub mod completions;
pub mod config;
pub mod delete;
pub mod list;
pub mod query;
pub mod show;

use std::path::PathBuf;

use stringlens_core::filter::{CriteriaError, QueryError};
use stringlens_core::{CatalogError, CatalogStore, StoreError};
use tracing::{debug, warn};

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Catalog lookup or insert error.
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Catalog file error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Natural-language query error.
    #[error("query error: {0}")]
    Query(#[from] QueryError),

    /// Explicit filter parameter error.
    #[error("filter error: {0}")]
    Criteria(#[from] CriteriaError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Catalog path given on the command line or via `STRINGLENS_STORE`.
    pub store_path: Option<PathBuf>,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    ///
    /// Colors are disabled by `--no-color`, the `NO_COLOR` environment
    /// variable, or `output.color = false` in the config file.
    pub fn from_cli(cli: &Cli) -> Self {
        let config_color = match config::load_config() {
            Ok(config) => config.output.color.unwrap_or(true),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable config file");
                true
            }
        };
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());

        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env && config_color,
            quiet: cli.quiet,
            store_path: cli.store.clone(),
        }
    }

    /// Opens the catalog store.
    ///
    /// The path is resolved with priority: `--store` flag / `STRINGLENS_STORE`
    /// > `store.path` in the config file > the default XDG location.
    pub fn open_store(&self) -> Result<CatalogStore> {
        let store = match &self.store_path {
            Some(path) => CatalogStore::with_path(path),
            None => match config::load_config()?.store.path {
                Some(path) => CatalogStore::with_path(path),
                None => CatalogStore::new()?,
            },
        };
        debug!(path = %store.path().display(), "using catalog");
        Ok(store)
    }
}
