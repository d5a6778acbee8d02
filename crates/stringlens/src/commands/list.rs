//! List command implementation.
//!
//! Lists stored strings matching explicit property filters.

use stringlens_core::filter::RawCriteria;
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_records_json, format_records_table};

/// Options for the list command.
///
/// Values are kept as strings and validated together so every filter
/// reports errors the same way.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Palindrome flag (`true`/`false`).
    pub is_palindrome: Option<String>,
    /// Inclusive minimum length.
    pub min_length: Option<String>,
    /// Inclusive maximum length.
    pub max_length: Option<String>,
    /// Exact word count.
    pub word_count: Option<String>,
    /// Single required character.
    pub contains_character: Option<String>,
}

impl ListOptions {
    fn to_raw_criteria(&self) -> RawCriteria {
        RawCriteria {
            is_palindrome: self.is_palindrome.clone(),
            min_length: self.min_length.clone(),
            max_length: self.max_length.clone(),
            word_count: self.word_count.clone(),
            contains_character: self.contains_character.clone(),
        }
    }
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if a filter value is malformed, the length bounds
/// conflict, or the catalog file cannot be read.
pub async fn execute(ctx: &CommandContext, opts: &ListOptions) -> Result<()> {
    // Validate before touching the store so bad input fails fast
    let criteria = opts.to_raw_criteria().validate()?;

    let store = ctx.open_store()?;
    let catalog = store.load_or_default_async().await?;

    let records = catalog.filter(&criteria);
    debug!(matched = records.len(), total = catalog.len(), "filtered catalog");

    if ctx.json_output {
        println!("{}", format_records_json(&records, &criteria)?);
    } else if !ctx.quiet {
        print!("{}", format_records_table(&records, ctx.use_colors));
    }

    Ok(())
}
