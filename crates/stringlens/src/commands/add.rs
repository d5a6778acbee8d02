//! Add command implementation.
//!
//! Analyzes a string and stores it in the catalog.

use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_created_record, format_record_json};

/// Options for the add command.
#[derive(Debug)]
pub struct AddOptions {
    /// The string to analyze and store.
    pub value: String,
}

/// Executes the add command.
///
/// # Errors
///
/// Returns an error if the string is already stored or the catalog file
/// cannot be read or written.
pub async fn execute(ctx: &CommandContext, opts: &AddOptions) -> Result<()> {
    let store = ctx.open_store()?;
    let mut catalog = store.load_or_default_async().await?;

    let record = catalog.insert(opts.value.as_str())?.clone();
    store.save_async(&catalog).await?;
    debug!(id = %record.fingerprint, total = catalog.len(), "stored string");

    if ctx.json_output {
        println!("{}", format_record_json(&record)?);
    } else if !ctx.quiet {
        print!("{}", format_created_record(&record, ctx.use_colors));
    }

    Ok(())
}
