//! Evaluate a curve at given inputs

use serde::Serialize;

use super::{CurveArgs, Session};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct Evaluation<'a> {
    input: &'a str,
    y: f64,
}

#[derive(Debug, Serialize)]
struct EvalReport<'a> {
    curve: &'a str,
    results: Vec<Evaluation<'a>>,
}

/// Execute the eval command
pub fn execute(args: &CurveArgs, values: &[String], json: bool) -> Result<(), CliError> {
    let session = Session::open(args)?;

    let mut results = Vec::with_capacity(values.len());
    for input in values {
        let y = session.ease.evaluate_str(input);
        session.flush_markers()?;
        results.push(Evaluation { input, y });
    }

    if json {
        return output::print_success_json(&EvalReport {
            curve: session.ease.id().as_str(),
            results,
        });
    }

    for Evaluation { input, y } in results {
        println!("{input} -> {}", output::format_value(y));
    }
    Ok(())
}
