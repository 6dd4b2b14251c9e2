//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde::Serialize;
use serde_json::json;

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format error as JSON: {}", e),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(e) => e.type_name(),
        None => "unknown",
    }
}

/// Print a successful JSON response, merging `fields` next to `"success": true`.
pub fn print_success_json<T: Serialize>(fields: &T) -> Result<(), CliError> {
    let mut value = serde_json::to_value(fields)?;
    if let Some(object) = value.as_object_mut() {
        object.insert("success".to_string(), json!(true));
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Format a curve value for human output.
pub fn format_value(value: f64) -> String {
    format!("{value:.6}")
}

/// Print a section heading.
pub fn print_heading(text: &str) {
    println!("{}", text.bold());
}
