//! List the built-in curves

use colored::*;
use opc_easing::Preset;
use serde::Serialize;

use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct PresetInfo {
    name: &'static str,
    cubic_bezier: [f64; 4],
}

#[derive(Debug, Serialize)]
struct PresetList {
    presets: Vec<PresetInfo>,
}

/// Execute the presets command
pub fn execute(json: bool) -> Result<(), CliError> {
    let presets: Vec<PresetInfo> = Preset::ALL
        .into_iter()
        .map(|p| {
            let (x1, y1, x2, y2) = p.control_points();
            PresetInfo {
                name: p.name(),
                cubic_bezier: [x1, y1, x2, y2],
            }
        })
        .collect();

    if json {
        return output::print_success_json(&PresetList { presets });
    }

    output::print_heading("Built-in presets:");
    for PresetInfo { name, cubic_bezier } in presets {
        let [x1, y1, x2, y2] = cubic_bezier;
        println!(
            "  {:<12} {}",
            name.green(),
            format!("cubic-bezier({x1}, {y1}, {x2}, {y2})").dimmed()
        );
    }
    Ok(())
}
