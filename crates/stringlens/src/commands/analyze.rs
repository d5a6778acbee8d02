//! Analyze command implementation.
//!
//! Computes a string's properties without touching the catalog.

use stringlens_core::analyze;

use super::{CommandContext, Result};
use crate::output::{format_analysis_json, format_properties};

/// Options for the analyze command.
#[derive(Debug)]
pub struct AnalyzeOptions {
    /// The string to analyze.
    pub value: String,
}

/// Executes the analyze command.
pub fn execute(ctx: &CommandContext, opts: &AnalyzeOptions) -> Result<()> {
    let properties = analyze(&opts.value);

    if ctx.json_output {
        println!("{}", format_analysis_json(&opts.value, &properties)?);
    } else if !ctx.quiet {
        print!("{}", format_properties(&opts.value, &properties, ctx.use_colors));
    }

    Ok(())
}
