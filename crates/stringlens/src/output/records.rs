//! Record output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use stringlens_core::filter::FilterCriteria;
use stringlens_core::{PropertyRecord, TextRecord};

use super::helpers::{format_char, format_palindrome, quote_value, truncate_id, truncate_str};

/// Width of the value column in record tables.
const VALUE_WIDTH: usize = 48;

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct RecordsListOutput<'a> {
    pub data: &'a [&'a TextRecord],
    pub count: usize,
    pub filters_applied: &'a FilterCriteria,
}

/// Formats filtered records as JSON.
pub fn format_records_json(
    records: &[&TextRecord],
    criteria: &FilterCriteria,
) -> Result<String, serde_json::Error> {
    let output = RecordsListOutput {
        data: records,
        count: records.len(),
        filters_applied: criteria,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats records as a table.
pub fn format_records_table(records: &[&TextRecord], use_colors: bool) -> String {
    if records.is_empty() {
        return "No strings found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!(
        "{:<10} {:>6} {:>6} {:<5} {}",
        "ID", "Len", "Words", "Pal", "Value"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for record in records {
        let props = &record.properties;
        // Pad before coloring so escape codes don't skew alignment
        let palindrome = format!("{:<5}", format_palindrome(props.is_palindrome, false));
        let palindrome = if use_colors && props.is_palindrome {
            palindrome.green().to_string()
        } else {
            palindrome
        };

        let line = format!(
            "{:<10} {:>6} {:>6} {} {}",
            truncate_id(&record.fingerprint),
            props.length,
            props.word_count,
            palindrome,
            truncate_str(&quote_value(&record.content), VALUE_WIDTH)
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats a single record as JSON.
pub fn format_record_json(record: &TextRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Formats a single record with all of its properties.
pub fn format_record_details(record: &TextRecord, use_colors: bool) -> String {
    let mut output = format_properties(&record.content, &record.properties, use_colors);
    push_field(
        &mut output,
        "Created",
        &record.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    output
}

/// Formats a record that was just added.
pub fn format_created_record(record: &TextRecord, use_colors: bool) -> String {
    let message = format!(
        "Added {} ({})",
        quote_value(&record.content),
        truncate_id(&record.fingerprint)
    );
    if use_colors {
        format!("{}\n", message.green())
    } else {
        format!("{message}\n")
    }
}

/// JSON output structure for a deleted record.
#[derive(Serialize)]
pub struct DeletedRecordOutput<'a> {
    pub id: &'a str,
    pub value: &'a str,
    pub status: &'static str,
}

/// Formats a deleted record as JSON.
pub fn format_deleted_record(record: &TextRecord) -> Result<String, serde_json::Error> {
    let output = DeletedRecordOutput {
        id: &record.fingerprint,
        value: &record.content,
        status: "deleted",
    };

    serde_json::to_string_pretty(&output)
}

/// JSON output structure for the analyze command.
#[derive(Serialize)]
pub struct AnalysisOutput<'a> {
    pub value: &'a str,
    pub properties: &'a PropertyRecord,
}

/// Formats an unstored analysis as JSON.
pub fn format_analysis_json(
    content: &str,
    properties: &PropertyRecord,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&AnalysisOutput {
        value: content,
        properties,
    })
}

/// Formats a string and its properties as labeled lines.
pub fn format_properties(content: &str, props: &PropertyRecord, use_colors: bool) -> String {
    let mut output = String::new();

    let value = quote_value(content);
    if use_colors {
        output.push_str(&format!("{}\n\n", value.bold()));
    } else {
        output.push_str(&format!("{value}\n\n"));
    }

    push_field(&mut output, "ID", &props.sha256_hash);
    push_field(&mut output, "Length", &props.length.to_string());
    push_field(
        &mut output,
        "Palindrome",
        &format_palindrome(props.is_palindrome, use_colors),
    );
    push_field(&mut output, "Words", &props.word_count.to_string());
    push_field(&mut output, "Unique", &props.unique_characters.to_string());

    if !props.character_frequency.is_empty() {
        let freq: Vec<String> = props
            .character_frequency
            .iter()
            .map(|(c, n)| format!("{}={}", format_char(*c), n))
            .collect();
        push_field(&mut output, "Frequency", &freq.join(" "));
    }

    output
}

/// Appends a `Label:  value` line.
fn push_field(output: &mut String, label: &str, value: &str) {
    output.push_str(&format!("{:<12}{}\n", format!("{label}:"), value));
}

/// Describes criteria as `key=value` pairs for table headers.
pub fn format_criteria(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();

    if let Some(p) = criteria.is_palindrome {
        parts.push(format!("is_palindrome={p}"));
    }
    if let Some(n) = criteria.min_length {
        parts.push(format!("min_length={n}"));
    }
    if let Some(n) = criteria.max_length {
        parts.push(format!("max_length={n}"));
    }
    if let Some(n) = criteria.word_count {
        parts.push(format!("word_count={n}"));
    }
    if let Some(c) = criteria.contains_character {
        parts.push(format!("contains_character={}", format_char(c)));
    }

    if parts.is_empty() {
        "(none)".to_string()
    } else {
        parts.join(", ")
    }
}
