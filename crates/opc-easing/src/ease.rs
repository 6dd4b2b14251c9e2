//! The callable easing function.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::anchor::AnchorSource;
use crate::coerce;
use crate::curve::Curve;
use crate::error::Result;
use crate::observer::{CurveId, CurveObserver, MarkerEvent, NullObserver};
use crate::presets::Preset;
use crate::solver;

/// Anything that maps an input position in `[0, 1]` to an eased value.
pub trait Easing {
    /// Eased value at `t`.
    fn ease(&self, t: f64) -> f64;
}

/// A curve packaged as a pure, repeatedly callable easing function.
///
/// The curve is captured at construction and never changes. Each call reports
/// the evaluated point to the attached observer.
///
/// # Example
///
/// ```
/// use opc_easing::EasingFunction;
///
/// let ease = EasingFunction::builder().name("fade").build()?;
///
/// assert_eq!(ease.evaluate(0.0), 0.0);
/// assert_eq!(ease.evaluate(0.5), 0.5);
/// assert_eq!(ease.evaluate(1.0), 1.0);
/// # Ok::<(), opc_easing::EasingError>(())
/// ```
#[derive(Clone)]
pub struct EasingFunction {
    id: CurveId,
    curve: Arc<Curve>,
    observer: Arc<dyn CurveObserver>,
}

impl EasingFunction {
    /// Build an easing function from anchors, with no observer.
    ///
    /// # Errors
    ///
    /// Returns any validation error from [`crate::anchor::normalize`].
    pub fn new(source: impl Into<AnchorSource>) -> Result<Self> {
        Self::builder().anchors(source).build()
    }

    /// Start configuring an easing function.
    pub fn builder() -> EasingBuilder {
        EasingBuilder::default()
    }

    /// Wrap an already built curve.
    pub fn from_curve(id: CurveId, curve: Curve, observer: Arc<dyn CurveObserver>) -> Self {
        Self {
            id,
            curve: Arc::new(curve),
            observer,
        }
    }

    /// Name reported in notifications.
    pub fn id(&self) -> &CurveId {
        &self.id
    }

    /// The underlying curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The same curve reporting to a different observer.
    pub fn with_observer(&self, observer: Arc<dyn CurveObserver>) -> Self {
        Self {
            id: self.id.clone(),
            curve: Arc::clone(&self.curve),
            observer,
        }
    }

    /// Evaluate the curve's height at horizontal position `t`.
    ///
    /// Non-finite input is treated as 0 and the result is clamped into
    /// `[0, 1]` first. At or beyond either end the knot's y is returned exactly.
    pub fn evaluate(&self, t: f64) -> f64 {
        let x = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

        let start = self.curve.start();
        if x <= start.x {
            self.emit(start.x, start.y);
            return start.y;
        }
        let end = self.curve.end();
        if x >= end.x {
            self.emit(end.x, end.y);
            return end.y;
        }

        let Some(segment) = self.curve.segment_for(x) else {
            self.emit(start.x, start.y);
            return start.y;
        };
        let solution = solver::solve_t_for_x(segment, x);
        let point = segment.point_at(solution.t);
        self.emit(point.x, point.y);
        point.y
    }

    /// Evaluate a loosely-typed input.
    ///
    /// Values with no numeric reading (arrays, objects, non-numeric strings)
    /// evaluate as 0.
    pub fn evaluate_value(&self, t: &Value) -> f64 {
        self.evaluate(coerce::to_number(t).unwrap_or(0.0))
    }

    /// Evaluate a textual input, see [`EasingFunction::evaluate_value`].
    pub fn evaluate_str(&self, t: &str) -> f64 {
        self.evaluate(coerce::str_to_number(t).unwrap_or(0.0))
    }

    fn emit(&self, x: f64, y: f64) {
        self.observer.notify(&MarkerEvent {
            curve_id: self.id.clone(),
            x,
            y,
        });
    }
}

impl Easing for EasingFunction {
    fn ease(&self, t: f64) -> f64 {
        self.evaluate(t)
    }
}

impl fmt::Debug for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasingFunction")
            .field("id", &self.id)
            .field("segments", &self.curve.segments().len())
            .finish_non_exhaustive()
    }
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::from_curve(CurveId::default(), Curve::default(), Arc::new(NullObserver))
    }
}

/// Fluent construction of an [`EasingFunction`].
#[derive(Default)]
pub struct EasingBuilder {
    id: Option<CurveId>,
    anchors: Option<AnchorSource>,
    preset: Option<Preset>,
    observer: Option<Arc<dyn CurveObserver>>,
}

impl EasingBuilder {
    /// Name reported in notifications. Defaults to `"bezier"`.
    pub fn name(mut self, id: impl Into<CurveId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Anchors to build from. Take precedence over a preset.
    pub fn anchors(mut self, source: impl Into<AnchorSource>) -> Self {
        self.anchors = Some(source.into());
        self
    }

    /// Built-in curve to use when no anchors are given.
    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Observer receiving a marker per evaluation. Defaults to [`NullObserver`].
    pub fn observer(mut self, observer: Arc<dyn CurveObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Validate the anchors and build the function.
    ///
    /// # Errors
    ///
    /// Returns any validation error from [`crate::anchor::normalize`].
    pub fn build(self) -> Result<EasingFunction> {
        let id = self.id.unwrap_or_default();
        let source = match (self.anchors, self.preset) {
            (Some(anchors), Some(preset)) => {
                tracing::debug!(curve = %id, %preset, "anchors given, ignoring preset");
                anchors
            }
            (Some(anchors), None) => anchors,
            (None, Some(preset)) => AnchorSource::Anchors(preset.anchors().to_vec()),
            (None, None) => AnchorSource::Default,
        };

        let curve = Curve::new(&source).inspect_err(|e| {
            tracing::debug!(curve = %id, error = %e, "rejected easing curve");
        })?;
        tracing::debug!(
            curve = %id,
            anchors = curve.anchors().len(),
            segments = curve.segments().len(),
            "built easing curve"
        );

        let observer = self.observer.unwrap_or_else(|| Arc::new(NullObserver));
        Ok(EasingFunction::from_curve(id, curve, observer))
    }
}

impl fmt::Debug for EasingBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasingBuilder")
            .field("id", &self.id)
            .field("anchors", &self.anchors)
            .field("preset", &self.preset)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
