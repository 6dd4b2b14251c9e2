//! Sample a curve at evenly spaced inputs

use colored::*;
use serde::Serialize;

use super::{CurveArgs, Session};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct SamplePoint {
    t: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct SampleReport<'a> {
    curve: &'a str,
    steps: u32,
    samples: Vec<SamplePoint>,
}

/// Evenly spaced inputs `0, 1/steps, ..., 1`.
pub fn sample_inputs(steps: u32) -> impl Iterator<Item = f64> {
    let steps = steps.max(1);
    (0..=steps).map(move |i| f64::from(i) / f64::from(steps))
}

/// Execute the sample command
pub fn execute(args: &CurveArgs, steps: u32, json: bool) -> Result<(), CliError> {
    let session = Session::open(args)?;

    let mut samples = Vec::new();
    for t in sample_inputs(steps) {
        let y = session.ease.evaluate(t);
        session.flush_markers()?;
        samples.push(SamplePoint { t, y });
    }

    if json {
        return output::print_success_json(&SampleReport {
            curve: session.ease.id().as_str(),
            steps,
            samples,
        });
    }

    output::print_heading(&format!("Curve '{}'", session.ease.id()));
    println!("  {:>10}  {:>10}", "t".dimmed(), "y".dimmed());
    for SamplePoint { t, y } in samples {
        println!(
            "  {:>10}  {:>10}",
            output::format_value(t),
            output::format_value(y)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_inputs_cover_unit_interval() {
        let inputs: Vec<f64> = sample_inputs(4).collect();
        assert_eq!(inputs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn sample_inputs_never_divide_by_zero() {
        let inputs: Vec<f64> = sample_inputs(0).collect();
        assert_eq!(inputs, vec![0.0, 1.0]);
    }
}
