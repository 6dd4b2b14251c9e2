//! Convenience re-exports for common easing types.
//!
//! ```
//! use opc_easing::prelude::*;
//!
//! let ease = EasingFunction::builder().preset(Preset::EaseOut).build()?;
//! assert!(ease.evaluate(0.5) > 0.5);
//! # Ok::<(), EasingError>(())
//! ```

pub use crate::anchor::{Anchor, AnchorSource};
pub use crate::config::EaseConfig;
pub use crate::curve::Curve;
pub use crate::ease::{Easing, EasingBuilder, EasingFunction};
pub use crate::error::{EasingError, ErrorKind};
pub use crate::observer::{
    ChannelObserver, CurveId, CurveObserver, MarkerEnvelope, MarkerEvent, NullObserver,
    TracingObserver,
};
pub use crate::presets::Preset;
