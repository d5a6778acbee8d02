//! Natural-language query output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use stringlens_core::filter::InterpretedQuery;
use stringlens_core::TextRecord;

use super::records::{format_criteria, format_records_table};

/// JSON output structure for the query command.
#[derive(Serialize)]
pub struct QueryOutput<'a> {
    pub data: &'a [&'a TextRecord],
    pub count: usize,
    pub interpreted_query: &'a InterpretedQuery,
}

/// Formats query results as JSON.
pub fn format_query_json(
    records: &[&TextRecord],
    query: &InterpretedQuery,
) -> Result<String, serde_json::Error> {
    let output = QueryOutput {
        data: records,
        count: records.len(),
        interpreted_query: query,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats query results as a table preceded by the interpreted filters.
pub fn format_query_table(
    records: &[&TextRecord],
    query: &InterpretedQuery,
    use_colors: bool,
) -> String {
    let summary = format!(
        "Query: {}\nFilters: {}\n",
        query.original,
        format_criteria(&query.parsed_filters)
    );

    let mut output = if use_colors {
        format!("{}\n", summary.trim_end().dimmed())
    } else {
        summary
    };
    output.push('\n');
    output.push_str(&format_records_table(records, use_colors));
    output
}
