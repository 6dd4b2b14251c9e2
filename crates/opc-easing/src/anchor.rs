//! Anchor input, normalization and validation.
//!
//! Anchors reach the engine in several shapes: a JSON string typed into an
//! editor, loosely-typed records forwarded by a host, or typed [`Anchor`]s.
//! [`normalize`] turns any of them into a sorted, validated anchor list that
//! spans `[0, 1]` on the x axis.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce;
use crate::error::{EasingError, Result};
use crate::segment::Point;

/// Minimum number of anchors needed to form a curve.
pub const MIN_ANCHORS: usize = 2;

/// Tolerance for the first and last anchor sitting at x = 0 and x = 1.
pub const BOUNDARY_EPSILON: f64 = 1e-9;

/// Tolerance for decreasing x between consecutive sorted anchors.
pub const MONOTONIC_EPSILON: f64 = 1e-12;

/// The conventional ease-in-out curve used when no anchors are given.
pub const DEFAULT_ANCHORS: [Anchor; 2] = [
    Anchor::new(0.0, 0.0, 0.42, 0.0),
    Anchor::new(1.0, 1.0, 0.58, 1.0),
];

const FIELDS: [&str; 4] = ["pX", "pY", "cX", "cY"];

/// A knot the curve passes through plus one authored control handle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Knot x.
    #[serde(rename = "pX")]
    pub p_x: f64,
    /// Knot y.
    #[serde(rename = "pY")]
    pub p_y: f64,
    /// Handle x.
    #[serde(rename = "cX")]
    pub c_x: f64,
    /// Handle y.
    #[serde(rename = "cY")]
    pub c_y: f64,
}

impl Anchor {
    /// Create an anchor from its knot `(p_x, p_y)` and handle `(c_x, c_y)`.
    pub const fn new(p_x: f64, p_y: f64, c_x: f64, c_y: f64) -> Self {
        Self { p_x, p_y, c_x, c_y }
    }

    /// The knot.
    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.p_x, self.p_y)
    }

    /// The authored handle.
    #[inline]
    pub fn handle(&self) -> Point {
        Point::new(self.c_x, self.c_y)
    }

    /// The same anchor with its handle reflected through its knot.
    pub fn mirrored(&self) -> Self {
        let handle = self.handle().reflect_through(self.point());
        Self::new(self.p_x, self.p_y, handle.x, handle.y)
    }

    fn is_finite(&self) -> bool {
        self.p_x.is_finite() && self.p_y.is_finite() && self.c_x.is_finite() && self.c_y.is_finite()
    }
}

/// Where the anchors of a curve come from.
///
/// Deserializes from either a JSON string (parsed later, like a value typed
/// into an editor) or a JSON array of anchor records.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnchorSource {
    /// The built-in ease-in-out curve.
    #[default]
    #[serde(skip)]
    Default,
    /// A JSON-encoded array of anchor records.
    Json(String),
    /// Loosely-typed anchor records, coerced field by field.
    Records(Vec<Value>),
    /// Typed anchors.
    #[serde(skip)]
    Anchors(Vec<Anchor>),
}

impl From<&str> for AnchorSource {
    fn from(json: &str) -> Self {
        Self::Json(json.to_string())
    }
}

impl From<String> for AnchorSource {
    fn from(json: String) -> Self {
        Self::Json(json)
    }
}

impl From<Vec<Anchor>> for AnchorSource {
    fn from(anchors: Vec<Anchor>) -> Self {
        Self::Anchors(anchors)
    }
}

impl From<&[Anchor]> for AnchorSource {
    fn from(anchors: &[Anchor]) -> Self {
        Self::Anchors(anchors.to_vec())
    }
}

impl From<Vec<Value>> for AnchorSource {
    fn from(records: Vec<Value>) -> Self {
        Self::Records(records)
    }
}

impl<T: Into<AnchorSource>> From<Option<T>> for AnchorSource {
    fn from(source: Option<T>) -> Self {
        source.map_or(Self::Default, Into::into)
    }
}

/// Turn any anchor source into a sorted, validated anchor list.
///
/// # Errors
///
/// - [`EasingError::InvalidAnchorFormat`] for malformed JSON, non-object
///   records, missing or non-numeric fields, or non-finite coordinates
/// - [`EasingError::InsufficientAnchors`] for fewer than two anchors
/// - [`EasingError::NonMonotonicAnchors`] if x decreases after sorting
/// - [`EasingError::BoundaryViolation`] if x does not span `[0, 1]`
pub fn normalize(source: &AnchorSource) -> Result<Vec<Anchor>> {
    let anchors = match source {
        AnchorSource::Default => DEFAULT_ANCHORS.to_vec(),
        AnchorSource::Json(text) => parse_json(text)?,
        AnchorSource::Records(records) => from_records(records)?,
        AnchorSource::Anchors(anchors) => {
            check_count(anchors.len())?;
            anchors.clone()
        }
    };
    validate(anchors)
}

fn parse_json(text: &str) -> Result<Vec<Anchor>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| EasingError::invalid_format(format!("invalid JSON: {e}")))?;
    match value {
        Value::Array(records) => from_records(&records),
        other => Err(EasingError::invalid_format(format!(
            "expected an array of anchors, got {}",
            json_type(&other)
        ))),
    }
}

fn from_records(records: &[Value]) -> Result<Vec<Anchor>> {
    check_count(records.len())?;
    records
        .iter()
        .enumerate()
        .map(|(index, record)| from_record(index, record))
        .collect()
}

fn from_record(index: usize, record: &Value) -> Result<Anchor> {
    let Value::Object(fields) = record else {
        return Err(EasingError::invalid_format(format!(
            "anchor {index} must be an object with pX, pY, cX, cY, got {}",
            json_type(record)
        )));
    };

    let mut coords = [0.0; 4];
    for (slot, name) in coords.iter_mut().zip(FIELDS) {
        let raw = fields
            .get(name)
            .ok_or_else(|| EasingError::invalid_format(format!("anchor {index} is missing {name}")))?;
        *slot = coerce::to_number(raw).ok_or_else(|| {
            EasingError::invalid_format(format!("anchor {index} field {name} is not numeric: {raw}"))
        })?;
    }

    let [p_x, p_y, c_x, c_y] = coords;
    Ok(Anchor::new(p_x, p_y, c_x, c_y))
}

fn check_count(count: usize) -> Result<()> {
    if count < MIN_ANCHORS {
        return Err(EasingError::InsufficientAnchors { count });
    }
    Ok(())
}

/// Validate typed anchors and sort them by `pX`.
///
/// The sort is stable, so anchors sharing an x keep their input order.
///
/// # Errors
///
/// See [`normalize`].
pub fn validate(mut anchors: Vec<Anchor>) -> Result<Vec<Anchor>> {
    check_count(anchors.len())?;

    if let Some(index) = anchors.iter().position(|a| !a.is_finite()) {
        return Err(EasingError::invalid_format(format!(
            "anchor {index} has a non-finite coordinate"
        )));
    }

    // -0.0 and 0.0 tie; NaN was rejected above.
    anchors.sort_by(|a, b| a.p_x.partial_cmp(&b.p_x).unwrap_or(Ordering::Equal));

    for (index, pair) in anchors.windows(2).enumerate() {
        if let [previous, current] = pair
            && current.p_x < previous.p_x - MONOTONIC_EPSILON
        {
            return Err(EasingError::NonMonotonicAnchors {
                index: index + 1,
                previous: previous.p_x,
                current: current.p_x,
            });
        }
    }

    let (Some(first), Some(last)) = (anchors.first(), anchors.last()) else {
        return Err(EasingError::InsufficientAnchors {
            count: anchors.len(),
        });
    };
    if first.p_x.abs() > BOUNDARY_EPSILON || (last.p_x - 1.0).abs() > BOUNDARY_EPSILON {
        return Err(EasingError::BoundaryViolation {
            first: first.p_x,
            last: last.p_x,
        });
    }

    Ok(anchors)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
