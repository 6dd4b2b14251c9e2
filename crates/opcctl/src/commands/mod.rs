//! Command implementations for opcctl CLI

pub mod eval;
pub mod inspect;
pub mod presets;
pub mod sample;

use std::fs;
use std::sync::Arc;

use clap::Args;
use crossbeam::channel::Receiver;
use opc_easing::{
    ChannelObserver, CurveObserver, EaseConfig, EasingFunction, MarkerEnvelope, MarkerEvent, Preset,
};

use crate::error::CliError;

/// Options selecting which curve a command works on.
#[derive(Args, Debug, Default, Clone)]
pub struct CurveArgs {
    /// Anchors as a JSON array, or @path to read them from a file
    #[arg(long, global = true, env = "OPCCTL_ANCHORS", value_name = "JSON|@FILE")]
    pub anchors: Option<String>,

    /// Built-in curve to use when no anchors are given
    #[arg(long, global = true, value_name = "NAME")]
    pub preset: Option<Preset>,

    /// Curve name reported in marker events
    #[arg(long, global = true, default_value = "bezier")]
    pub name: String,

    /// Stream one marker envelope per evaluation to stderr as JSON lines
    #[arg(long, global = true)]
    pub markers: bool,
}

impl CurveArgs {
    /// Resolve the arguments into an easing config.
    pub fn to_config(&self) -> Result<EaseConfig, CliError> {
        let mut config = EaseConfig::named(self.name.as_str());
        if let Some(anchors) = &self.anchors {
            config = config.with_anchors(read_anchors(anchors)?);
        }
        if let Some(preset) = self.preset {
            config = config.with_preset(preset);
        }
        Ok(config)
    }
}

fn read_anchors(arg: &str) -> Result<String, CliError> {
    match arg.strip_prefix('@') {
        Some(path) => {
            tracing::debug!(path, "reading anchors from file");
            fs::read_to_string(path).map_err(|source| CliError::AnchorFile {
                path: path.to_string(),
                source,
            })
        }
        None => Ok(arg.to_string()),
    }
}

/// A built curve plus the optional marker stream attached to it.
pub struct Session {
    pub ease: EasingFunction,
    markers: Option<Receiver<MarkerEvent>>,
}

impl Session {
    /// Build the curve described by `args`.
    pub fn open(args: &CurveArgs) -> Result<Self, CliError> {
        let config = args.to_config()?;
        let (observer, markers) = if args.markers {
            let (observer, receiver) = ChannelObserver::unbounded();
            (
                Some(Arc::new(observer) as Arc<dyn CurveObserver>),
                Some(receiver),
            )
        } else {
            (None, None)
        };
        let ease = config.build(observer)?;
        Ok(Self { ease, markers })
    }

    /// Write pending markers to stderr, one JSON envelope per line.
    pub fn flush_markers(&self) -> Result<(), CliError> {
        let Some(receiver) = &self.markers else {
            return Ok(());
        };
        for event in receiver.try_iter() {
            let line = serde_json::to_string(&MarkerEnvelope::from(event))?;
            eprintln!("{line}");
        }
        Ok(())
    }
}
