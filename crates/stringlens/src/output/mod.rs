//! Output formatting utilities for the sl CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//!
//! - [`records`] - Stored string output (list, show, add, delete, analyze)
//! - [`query`] - Natural-language query results
//! - [`helpers`] - Common formatting utilities (truncation, quoting)

pub mod helpers;
mod query;
mod records;

pub use query::{format_query_json, format_query_table};

pub use records::{
    format_analysis_json, format_created_record, format_deleted_record, format_properties,
    format_record_details, format_record_json, format_records_json, format_records_table,
};
