//! Piecewise cubic Bezier easing for OPC curve controls
//!
//! This crate turns a list of user-authored anchors into an easing function:
//! a pure mapping from an input position `t ∈ [0,1]` to the height of the
//! curve at that horizontal position.
//!
//! # Overview
//!
//! - **Anchors**: each [`Anchor`] is a knot `(pX, pY)` plus one authored handle
//!   `(cX, cY)`. The opposite handle is the mirror image through the knot.
//! - **Curve**: adjacent anchors become cubic Bezier [`Segment`]s covering
//!   x ∈ `[0,1]` without gaps.
//! - **Evaluation**: the owning segment is found by binary search, its
//!   x(t) is inverted with Newton-Raphson (bisection as fallback), and y(t) is
//!   returned.
//! - **Markers**: every evaluation reports the point it landed on to a
//!   [`CurveObserver`]. Delivery never affects the result.
//!
//! Construction validates everything up front. Evaluation never fails:
//! out-of-range input is clamped and non-numeric input counts as 0.
//!
//! # Example
//!
//! ```
//! use opc_easing::{Anchor, EasingFunction};
//!
//! let bounce = EasingFunction::builder()
//!     .name("bounce")
//!     .anchors(vec![
//!         Anchor::new(0.0, 0.0, 0.25, 0.46),
//!         Anchor::new(0.5, 1.2, 0.45, 1.0),
//!         Anchor::new(1.0, 1.0, 0.75, 0.8),
//!     ])
//!     .build()?;
//!
//! assert_eq!(bounce.evaluate(0.0), 0.0);
//! assert!((bounce.evaluate(0.5) - 1.2).abs() < 1e-6);
//! assert_eq!(bounce.evaluate(7.0), 1.0);
//! # Ok::<(), opc_easing::EasingError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod anchor;
pub mod coerce;
pub mod config;
pub mod curve;
pub mod ease;
pub mod error;
pub mod observer;
pub mod prelude;
pub mod presets;
pub mod segment;
pub mod solver;

pub use anchor::{Anchor, AnchorSource};
pub use config::EaseConfig;
pub use curve::Curve;
pub use ease::{Easing, EasingBuilder, EasingFunction};
pub use error::{EasingError, ErrorKind, Result};
pub use observer::{
    ChannelObserver, CurveId, CurveObserver, MarkerEnvelope, MarkerEvent, NullObserver,
    TracingObserver,
};
pub use presets::Preset;
pub use segment::{Point, Segment};
