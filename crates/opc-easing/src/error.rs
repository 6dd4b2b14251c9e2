//! Error types for curve construction.

/// Error type for easing curve construction.
///
/// Every variant is raised synchronously while a curve is being built. Once an
/// [`EasingFunction`](crate::EasingFunction) exists, evaluating it never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EasingError {
    /// The anchor input could not be parsed or an anchor has the wrong shape.
    ///
    /// Covers malformed JSON, a top-level value that is not an array, records
    /// that are not objects, and fields that are missing or not numeric.
    #[error("Invalid anchor format: {reason}")]
    InvalidAnchorFormat {
        /// What was wrong with the input.
        reason: String,
    },

    /// Fewer than two anchors were supplied.
    #[error("At least two anchors are required, got {count}")]
    InsufficientAnchors {
        /// Number of anchors supplied.
        count: usize,
    },

    /// Anchor x positions decrease after sorting.
    #[error("Anchor pX values must be non-decreasing: anchor {index} has pX {current} after {previous}")]
    NonMonotonicAnchors {
        /// Index (in sorted order) of the offending anchor.
        index: usize,
        /// `pX` of the preceding anchor.
        previous: f64,
        /// `pX` of the offending anchor.
        current: f64,
    },

    /// The anchors do not span exactly `[0, 1]` on the x axis.
    #[error("First pX must be 0 and last pX must be 1, got {first} and {last}")]
    BoundaryViolation {
        /// `pX` of the first anchor after sorting.
        first: f64,
        /// `pX` of the last anchor after sorting.
        last: f64,
    },
}

impl EasingError {
    /// Shorthand for [`EasingError::InvalidAnchorFormat`].
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidAnchorFormat {
            reason: reason.into(),
        }
    }

    /// Classify the error without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAnchorFormat { .. } => ErrorKind::InvalidAnchorFormat,
            Self::InsufficientAnchors { .. } => ErrorKind::InsufficientAnchors,
            Self::NonMonotonicAnchors { .. } => ErrorKind::NonMonotonicAnchors,
            Self::BoundaryViolation { .. } => ErrorKind::BoundaryViolation,
        }
    }
}

/// Payload-free classification of an [`EasingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`EasingError::InvalidAnchorFormat`].
    InvalidAnchorFormat,
    /// See [`EasingError::InsufficientAnchors`].
    InsufficientAnchors,
    /// See [`EasingError::NonMonotonicAnchors`].
    NonMonotonicAnchors,
    /// See [`EasingError::BoundaryViolation`].
    BoundaryViolation,
}

impl ErrorKind {
    /// Stable identifier used in machine-readable output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidAnchorFormat => "invalid_anchor_format",
            Self::InsufficientAnchors => "insufficient_anchors",
            Self::NonMonotonicAnchors => "non_monotonic_anchors",
            Self::BoundaryViolation => "boundary_violation",
        }
    }
}

/// A specialized `Result` type for curve construction.
pub type Result<T, E = EasingError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_insufficient() {
        let err = EasingError::InsufficientAnchors { count: 1 };
        let msg = err.to_string();
        assert!(msg.contains("two anchors"));
        assert!(msg.contains("got 1"));
    }

    #[test]
    fn test_error_display_boundary() {
        let err = EasingError::BoundaryViolation {
            first: 0.1,
            last: 1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("First pX must be 0"));
        assert!(msg.contains("0.1"));
    }

    #[test]
    fn test_invalid_format_shorthand() {
        let err = EasingError::invalid_format("anchor 0 is missing cY");
        assert_eq!(err.kind(), ErrorKind::InvalidAnchorFormat);
        assert!(err.to_string().contains("missing cY"));
    }

    #[test]
    fn test_kind_strings_are_distinct() {
        let kinds = [
            ErrorKind::InvalidAnchorFormat,
            ErrorKind::InsufficientAnchors,
            ErrorKind::NonMonotonicAnchors,
            ErrorKind::BoundaryViolation,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in kinds.iter().skip(i + 1) {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_error_is_std_error() {
        let err = EasingError::InsufficientAnchors { count: 0 };
        let _: &dyn std::error::Error = &err;
    }
}
