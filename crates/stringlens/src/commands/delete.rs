//! Delete command implementation.
//!
//! Removes a string from the catalog.

use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_deleted_record, helpers::quote_value};

/// Options for the delete command.
#[derive(Debug)]
pub struct DeleteOptions {
    /// The exact string to remove.
    pub value: String,
}

/// Executes the delete command.
///
/// # Errors
///
/// Returns a not-found error if the string is not stored, or an error if the
/// catalog file cannot be read or written.
pub async fn execute(ctx: &CommandContext, opts: &DeleteOptions) -> Result<()> {
    let store = ctx.open_store()?;
    let mut catalog = store.load_or_default_async().await?;

    let removed = catalog.remove(&opts.value)?;
    store.save_async(&catalog).await?;
    debug!(id = %removed.fingerprint, remaining = catalog.len(), "removed string");

    if ctx.json_output {
        println!("{}", format_deleted_record(&removed)?);
    } else if !ctx.quiet {
        println!("Deleted {}", quote_value(&removed.content));
    }

    Ok(())
}
