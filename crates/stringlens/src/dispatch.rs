//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands are split by whether they need the catalog store: store-free
//! commands run synchronously, catalog commands run on the async runtime.

use crate::cli::{Cli, Commands, ConfigCommands, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that never open the catalog.
pub trait LocalCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that read or write the catalog.
#[allow(async_fn_in_trait)]
pub trait StoreCommand {
    /// Execute the command against the catalog store.
    async fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Commands that don't need the catalog.
#[derive(Debug)]
pub enum LocalDispatch<'a> {
    Analyze { value: &'a str },
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> LocalDispatch<'a> {
    /// Try to create a local dispatch from the CLI command.
    /// Returns None if the command needs the catalog.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Analyze { value }) => Some(Self::Analyze { value }),
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl LocalCommand for LocalDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Analyze { value } => {
                let opts = commands::analyze::AnalyzeOptions {
                    value: value.to_string(),
                };
                commands::analyze::execute(ctx, &opts)
            }
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("sl - analyze strings and query them by their properties");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that operate on the catalog.
#[derive(Debug)]
pub enum StoreDispatch<'a> {
    Add {
        value: &'a str,
    },
    Show {
        value: &'a str,
    },
    List {
        is_palindrome: &'a Option<String>,
        min_length: &'a Option<String>,
        max_length: &'a Option<String>,
        word_count: &'a Option<String>,
        contains_character: &'a Option<String>,
    },
    Query {
        phrase: &'a [String],
    },
    Delete {
        value: &'a str,
    },
}

impl<'a> StoreDispatch<'a> {
    /// Create a store dispatch from the CLI command.
    /// Returns None for commands handled by [`LocalDispatch`].
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Add { value }) => Some(Self::Add { value }),
            Some(Commands::Show { value }) => Some(Self::Show { value }),
            Some(Commands::List {
                is_palindrome,
                min_length,
                max_length,
                word_count,
                contains_character,
            }) => Some(Self::List {
                is_palindrome,
                min_length,
                max_length,
                word_count,
                contains_character,
            }),
            Some(Commands::Query { phrase }) => Some(Self::Query { phrase }),
            Some(Commands::Delete { value }) => Some(Self::Delete { value }),
            // Already handled by LocalDispatch
            Some(Commands::Analyze { .. })
            | Some(Commands::Config { .. })
            | Some(Commands::Completions { .. })
            | None => None,
        }
    }
}

impl StoreCommand for StoreDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Add { value } => {
                let opts = commands::add::AddOptions {
                    value: value.to_string(),
                };
                commands::add::execute(ctx, &opts).await
            }
            Self::Show { value } => {
                let opts = commands::show::ShowOptions {
                    value: value.to_string(),
                };
                commands::show::execute(ctx, &opts).await
            }
            Self::List {
                is_palindrome,
                min_length,
                max_length,
                word_count,
                contains_character,
            } => {
                let opts = commands::list::ListOptions {
                    is_palindrome: (*is_palindrome).clone(),
                    min_length: (*min_length).clone(),
                    max_length: (*max_length).clone(),
                    word_count: (*word_count).clone(),
                    contains_character: (*contains_character).clone(),
                };
                commands::list::execute(ctx, &opts).await
            }
            Self::Query { phrase } => {
                let opts = commands::query::QueryOptions {
                    phrase: phrase.join(" "),
                };
                commands::query::execute(ctx, &opts).await
            }
            Self::Delete { value } => {
                let opts = commands::delete::DeleteOptions {
                    value: value.to_string(),
                };
                commands::delete::execute(ctx, &opts).await
            }
        }
    }
}
