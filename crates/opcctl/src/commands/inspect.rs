//! Show the validated anchors and built segments of a curve

use opc_easing::{Anchor, Segment};
use serde::Serialize;

use super::{CurveArgs, Session};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    curve: &'a str,
    anchors: &'a [Anchor],
    segments: &'a [Segment],
}

/// Execute the inspect command
pub fn execute(args: &CurveArgs, json: bool) -> Result<(), CliError> {
    let session = Session::open(args)?;
    let curve = session.ease.curve();

    if json {
        return output::print_success_json(&InspectReport {
            curve: session.ease.id().as_str(),
            anchors: curve.anchors(),
            segments: curve.segments(),
        });
    }

    output::print_heading(&format!("Curve '{}'", session.ease.id()));
    println!("  Anchors:");
    for (i, a) in curve.anchors().iter().enumerate() {
        println!(
            "    {i}: point ({}, {})  handle ({}, {})",
            a.p_x, a.p_y, a.c_x, a.c_y
        );
    }
    println!("  Segments:");
    for (i, s) in curve.segments().iter().enumerate() {
        println!(
            "    {i}: ({}, {}) ({}, {}) ({}, {}) ({}, {})",
            s.p1.x, s.p1.y, s.c1.x, s.c1.y, s.c2.x, s.c2.y, s.p2.x, s.p2.y
        );
    }
    Ok(())
}
