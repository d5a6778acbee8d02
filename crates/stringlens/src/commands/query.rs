//! Query command implementation.
//!
//! Interprets a natural-language phrase as filters and lists the matches.

use stringlens_core::filter::interpret_query;
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_query_json, format_query_table};

/// Options for the query command.
#[derive(Debug)]
pub struct QueryOptions {
    /// The query phrase, already joined from its words.
    pub phrase: String,
}

/// Executes the query command.
///
/// # Errors
///
/// Returns an error if the phrase is blank, matches no known pattern, yields
/// conflicting length bounds, or the catalog file cannot be read.
pub async fn execute(ctx: &CommandContext, opts: &QueryOptions) -> Result<()> {
    let query = interpret_query(&opts.phrase)?;
    debug!(filters = ?query.parsed_filters, "interpreted query");

    let store = ctx.open_store()?;
    let catalog = store.load_or_default_async().await?;

    let records = catalog.filter(&query.parsed_filters);

    if ctx.json_output {
        println!("{}", format_query_json(&records, &query)?);
    } else if !ctx.quiet {
        print!("{}", format_query_table(&records, &query, ctx.use_colors));
    }

    Ok(())
}
