//! Show command implementation.
//!
//! Displays a stored string and all of its properties.

use super::{CommandContext, Result};
use crate::output::{format_record_details, format_record_json};

/// Options for the show command.
#[derive(Debug)]
pub struct ShowOptions {
    /// The exact string to look up.
    pub value: String,
}

/// Executes the show command.
///
/// # Errors
///
/// Returns a not-found error (with a suggestion when a close match exists)
/// if the string is not stored.
pub async fn execute(ctx: &CommandContext, opts: &ShowOptions) -> Result<()> {
    let store = ctx.open_store()?;
    let catalog = store.load_or_default_async().await?;

    let record = catalog.require(&opts.value)?;

    if ctx.json_output {
        println!("{}", format_record_json(record)?);
    } else if !ctx.quiet {
        print!("{}", format_record_details(record, ctx.use_colors));
    }

    Ok(())
}
