//! Declarative easing curve configuration.
//!
//! Hosts describe a curve control either by name alone or by a full config
//! object. [`EaseConfig`] is the single shape both resolve to before a curve
//! is built.
//!
//! ```
//! use opc_easing::EaseConfig;
//!
//! let config: EaseConfig = serde_json::from_str(r#"{
//!     "name": "bounce",
//!     "anchors": [
//!         { "pX": 0,   "pY": 0,   "cX": 0.25, "cY": 0.46 },
//!         { "pX": 0.5, "pY": 1.2, "cX": 0.45, "cY": 1.0 },
//!         { "pX": 1,   "pY": 1,   "cX": 0.75, "cY": 0.8 }
//!     ]
//! }"#)?;
//!
//! let ease = config.build(None)?;
//! assert_eq!(ease.id().as_str(), "bounce");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::Arc;

use serde::Deserialize;

use crate::anchor::AnchorSource;
use crate::ease::EasingFunction;
use crate::error::Result;
use crate::observer::CurveObserver;
use crate::presets::Preset;

/// Configuration of one easing curve control.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EaseConfig {
    /// Name reported in marker notifications.
    pub name: Option<String>,
    /// Anchors as a JSON string or an array of records.
    pub anchors: Option<AnchorSource>,
    /// Built-in curve, used when `anchors` is absent.
    pub preset: Option<Preset>,
}

impl EaseConfig {
    /// Config with only a name, selecting the default curve.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the anchors.
    pub fn with_anchors(mut self, anchors: impl Into<AnchorSource>) -> Self {
        self.anchors = Some(anchors.into());
        self
    }

    /// Set the preset.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Build the easing function this config describes.
    ///
    /// # Errors
    ///
    /// Returns any validation error from [`crate::anchor::normalize`].
    pub fn build(&self, observer: Option<Arc<dyn CurveObserver>>) -> Result<EasingFunction> {
        let mut builder = EasingFunction::builder();
        if let Some(name) = &self.name {
            builder = builder.name(name.as_str());
        }
        if let Some(anchors) = &self.anchors {
            builder = builder.anchors(anchors.clone());
        }
        if let Some(preset) = self.preset {
            builder = builder.preset(preset);
        }
        if let Some(observer) = observer {
            builder = builder.observer(observer);
        }
        builder.build()
    }
}

impl From<&str> for EaseConfig {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EasingError;
    use crate::observer::ChannelObserver;

    fn must<T, E: std::fmt::Debug>(result: std::result::Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_name_only_builds_default_curve() {
        let ease = must(EaseConfig::from("myBezier").build(None));
        assert_eq!(ease.id().as_str(), "myBezier");
        assert_eq!(ease.evaluate(0.5), 0.5);
    }

    #[test]
    fn test_anchor_string_is_accepted() {
        let config: EaseConfig = must(serde_json::from_str(
            r#"{"anchors": "[{\"pX\":0,\"pY\":0,\"cX\":0,\"cY\":0},{\"pX\":1,\"pY\":1,\"cX\":1,\"cY\":1}]"}"#,
        ));
        assert!(matches!(config.anchors, Some(AnchorSource::Json(_))));
        let ease = must(config.build(None));
        assert_eq!(ease.id().as_str(), "bezier");
    }

    #[test]
    fn test_preset_from_config() {
        let config: EaseConfig = must(serde_json::from_str(r#"{"name": "x", "preset": "ease-in"}"#));
        assert_eq!(config.preset, Some(Preset::EaseIn));
        let ease = must(config.build(None));
        assert_eq!(ease.curve().anchors(), &Preset::EaseIn.anchors());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: std::result::Result<EaseConfig, _> =
            serde_json::from_str(r#"{"name": "x", "curve": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_error_propagates() {
        let config = EaseConfig::named("bad").with_anchors(
            r#"[{"pX":0.1,"pY":0,"cX":0,"cY":0},{"pX":1,"pY":1,"cX":1,"cY":1}]"#,
        );
        assert!(matches!(
            config.build(None),
            Err(EasingError::BoundaryViolation { .. })
        ));
    }

    #[test]
    fn test_observer_is_attached() {
        let (observer, receiver) = ChannelObserver::unbounded();
        let ease = must(
            EaseConfig::named("watched")
                .with_preset(Preset::EaseOut)
                .build(Some(Arc::new(observer))),
        );
        let _ = ease.evaluate(0.2);
        assert_eq!(receiver.try_iter().count(), 1);
    }
}
