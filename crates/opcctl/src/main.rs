//! opcctl - evaluate and inspect piecewise Bézier easing curves
//!
//! Builds a curve from anchors or a preset and evaluates, samples or
//! inspects it from the command line.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::CurveArgs;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "opcctl")]
#[command(about = "Evaluate and inspect piecewise cubic Bézier easing curves")]
#[command(version)]
#[command(long_about = "
opcctl builds an easing curve from a JSON array of anchors (or a named preset)
and evaluates it. Each anchor is an object with pX, pY, cX and cY fields; the
first pX must be 0 and the last must be 1.

Use --json for machine-readable output and --markers to stream the marker
envelopes a host would receive for every evaluation.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    curve: CurveArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the curve at one or more inputs
    Eval {
        /// Inputs to evaluate; non-numeric text is treated as 0
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Evaluate the curve at evenly spaced inputs across [0, 1]
    Sample {
        /// Number of intervals; steps + 1 points are printed
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=100_000))]
        steps: u32,
    },

    /// Show the validated anchors and the segments built from them
    Inspect,

    /// List built-in presets
    Presets,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("opcctl={log_level},opc_easing={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Eval { values } => commands::eval::execute(&cli.curve, values, cli.json)?,
        Commands::Sample { steps } => commands::sample::execute(&cli.curve, *steps, cli.json)?,
        Commands::Inspect => commands::inspect::execute(&cli.curve, cli.json)?,
        Commands::Presets => commands::presets::execute(cli.json)?,
        Commands::Completion { shell } => completion::generate_completion(*shell),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use opc_easing::Preset;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    // --- Global flag parsing ---

    #[test]
    fn parse_eval_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["opcctl", "eval", "0.5"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert!(cli.curve.anchors.is_none());
        assert!(cli.curve.preset.is_none());
        assert_eq!(cli.curve.name, "bezier");
        assert!(!cli.curve.markers);
        assert!(matches!(cli.command, Commands::Eval { ref values } if values == &["0.5"]));
        Ok(())
    }

    #[test]
    fn parse_global_flags_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from([
            "opcctl", "sample", "--json", "-vv", "--preset", "ease-in", "--name", "fade",
            "--markers",
        ])?;
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.curve.preset, Some(Preset::EaseIn));
        assert_eq!(cli.curve.name, "fade");
        assert!(cli.curve.markers);
        assert!(matches!(cli.command, Commands::Sample { steps: 10 }));
        Ok(())
    }

    #[test]
    fn parse_eval_accepts_negative_inputs() -> TestResult {
        let cli = Cli::try_parse_from(["opcctl", "eval", "-0.5", "2"])?;
        assert!(matches!(cli.command, Commands::Eval { ref values } if values == &["-0.5", "2"]));
        Ok(())
    }

    #[test]
    fn parse_flags_after_eval_values() -> TestResult {
        let cli = Cli::try_parse_from([
            "opcctl", "eval", "0.25", "-0.5", "--markers", "--name", "fade", "--json",
        ])?;
        assert!(matches!(cli.command, Commands::Eval { ref values } if values == &["0.25", "-0.5"]));
        assert!(cli.curve.markers);
        assert_eq!(cli.curve.name, "fade");
        assert!(cli.json);
        Ok(())
    }

    #[test]
    fn parse_anchor_file_reference() -> TestResult {
        let cli = Cli::try_parse_from(["opcctl", "inspect", "--anchors", "@curve.json"])?;
        assert_eq!(cli.curve.anchors.as_deref(), Some("@curve.json"));
        Ok(())
    }

    // --- Rejections ---

    #[test]
    fn parse_eval_requires_values() {
        assert!(Cli::try_parse_from(["opcctl", "eval"]).is_err());
    }

    #[test]
    fn parse_sample_rejects_zero_steps() {
        assert!(Cli::try_parse_from(["opcctl", "sample", "--steps", "0"]).is_err());
    }

    #[test]
    fn parse_unknown_preset_fails() {
        assert!(Cli::try_parse_from(["opcctl", "presets", "--preset", "bouncy"]).is_err());
    }

    #[test]
    fn parse_completion_shell() -> TestResult {
        let cli = Cli::try_parse_from(["opcctl", "completion", "bash"])?;
        assert!(matches!(
            cli.command,
            Commands::Completion {
                shell: clap_complete::Shell::Bash
            }
        ));
        Ok(())
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
