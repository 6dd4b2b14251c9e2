//! Error types for opcctl CLI

use opc_easing::EasingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Curve rejected: {0}")]
    Curve(EasingError),

    #[error("Cannot read anchors from {path}: {source}")]
    AnchorFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

// Not `#[from]`: the message already carries the curve error, so it is not
// reported again as a cause.
impl From<EasingError> for CliError {
    fn from(error: EasingError) -> Self {
        Self::Curve(error)
    }
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Curve(_) => 4,
            Self::AnchorFile { .. } => 3,
            Self::JsonError(_) => 1,
        }
    }

    /// Stable machine-readable error type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Curve(e) => e.kind().as_str(),
            Self::AnchorFile { .. } => "anchor_file",
            Self::JsonError(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn insufficient() -> CliError {
        CliError::from(EasingError::InsufficientAnchors { count: 1 })
    }

    #[test]
    fn curve_error_is_reported_once() {
        let err = insufficient();
        assert_eq!(
            err.to_string(),
            "Curve rejected: At least two anchors are required, got 1"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn anchor_file_keeps_io_cause() {
        let err = CliError::AnchorFile {
            path: "missing.json".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.source().is_some());
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.type_name(), "anchor_file");
    }

    #[test]
    fn exit_codes_by_kind() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(insufficient().exit_code(), 4);
        assert_eq!(insufficient().type_name(), "insufficient_anchors");

        let json_err = match serde_json::from_str::<serde_json::Value>("[") {
            Ok(v) => return Err(format!("unexpectedly parsed {v}").into()),
            Err(e) => CliError::from(e),
        };
        assert_eq!(json_err.exit_code(), 1);
        assert_eq!(json_err.type_name(), "json");
        Ok(())
    }
}
