//! Outbound marker notifications.
//!
//! Every evaluation reports the point it landed on so a host editor can draw a
//! marker on the curve. Delivery is one-way: observers return nothing, and an
//! observer that cannot deliver drops the event.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam::channel::{Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};

/// Message type hosts use to route marker updates.
pub const MARKER_MESSAGE_TYPE: &str = "OPC_bezier_marker";

/// Identifier used for curves built without a name.
pub const DEFAULT_CURVE_ID: &str = "bezier";

/// Name of a curve as reported in notifications.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveId(Arc<str>);

impl CurveId {
    /// Create an identifier.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurveId {
    fn default() -> Self {
        Self::new(DEFAULT_CURVE_ID)
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurveId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CurveId {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

/// The point an evaluation landed on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerEvent {
    /// Curve that was evaluated.
    #[serde(rename = "name")]
    pub curve_id: CurveId,
    /// Marker x.
    pub x: f64,
    /// Marker y, the value returned to the caller.
    pub y: f64,
}

/// Host-facing wrapper around a [`MarkerEvent`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerEnvelope {
    /// Always [`MARKER_MESSAGE_TYPE`].
    #[serde(rename = "messageType")]
    pub message_type: String,
    /// The marker.
    pub message: MarkerEvent,
}

impl From<MarkerEvent> for MarkerEnvelope {
    fn from(message: MarkerEvent) -> Self {
        Self {
            message_type: MARKER_MESSAGE_TYPE.to_string(),
            message,
        }
    }
}

/// Receiver of marker notifications.
///
/// Called synchronously once per evaluation. Implementations must not block.
pub trait CurveObserver: Send + Sync {
    /// Handle one marker.
    fn notify(&self, event: &MarkerEvent);
}

impl<F> CurveObserver for F
where
    F: Fn(&MarkerEvent) + Send + Sync,
{
    fn notify(&self, event: &MarkerEvent) {
        self(event);
    }
}

/// Discards every marker.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl CurveObserver for NullObserver {
    fn notify(&self, _event: &MarkerEvent) {}
}

/// Logs every marker at TRACE level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl CurveObserver for TracingObserver {
    fn notify(&self, event: &MarkerEvent) {
        tracing::trace!(
            target: "opc_easing::marker",
            curve = %event.curve_id,
            x = event.x,
            y = event.y,
            "marker"
        );
    }
}

/// Forwards markers into a crossbeam channel without blocking.
///
/// When the channel is full or its receiver is gone the marker is dropped and
/// counted.
#[derive(Debug)]
pub struct ChannelObserver {
    sender: Sender<MarkerEvent>,
    dropped: AtomicU64,
}

impl ChannelObserver {
    /// Wrap an existing sender.
    pub fn new(sender: Sender<MarkerEvent>) -> Self {
        Self {
            sender,
            dropped: AtomicU64::new(0),
        }
    }

    /// Create an observer backed by a bounded channel.
    pub fn bounded(capacity: usize) -> (Self, Receiver<MarkerEvent>) {
        let (sender, receiver) = crossbeam::channel::bounded(capacity);
        (Self::new(sender), receiver)
    }

    /// Create an observer backed by an unbounded channel.
    pub fn unbounded() -> (Self, Receiver<MarkerEvent>) {
        let (sender, receiver) = crossbeam::channel::unbounded();
        (Self::new(sender), receiver)
    }

    /// Number of markers that could not be delivered.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl CurveObserver for ChannelObserver {
    fn notify(&self, event: &MarkerEvent) {
        match self.sender.try_send(event.clone()) {
            Ok(()) => {}
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn event(x: f64, y: f64) -> MarkerEvent {
        MarkerEvent {
            curve_id: CurveId::new("ease"),
            x,
            y,
        }
    }

    #[test]
    fn test_curve_id_default_and_display() {
        assert_eq!(CurveId::default().as_str(), DEFAULT_CURVE_ID);
        assert_eq!(CurveId::from("speed").to_string(), "speed");
        assert_eq!(CurveId::from("a".to_string()), CurveId::new("a"));
    }

    #[test]
    fn test_curve_id_serde_is_a_plain_string() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&CurveId::new("fade"))?;
        assert_eq!(json, r#""fade""#);

        let id: CurveId = serde_json::from_str(&json)?;
        assert_eq!(id.as_str(), "fade");

        let event: MarkerEvent = serde_json::from_str(r#"{"name":"opacity","x":0.5,"y":0.25}"#)?;
        assert_eq!(event.curve_id, CurveId::new("opacity"));
        Ok(())
    }

    #[test]
    fn test_closure_observer() {
        let seen = Mutex::new(Vec::new());
        let observer = |e: &MarkerEvent| {
            if let Ok(mut guard) = seen.lock() {
                guard.push(e.clone());
            }
        };
        observer.notify(&event(0.5, 0.25));
        let seen = seen.into_inner().unwrap_or_default();
        assert_eq!(seen, vec![event(0.5, 0.25)]);
    }

    #[test]
    fn test_channel_observer_delivers() {
        let (observer, receiver) = ChannelObserver::unbounded();
        observer.notify(&event(0.1, 0.2));
        observer.notify(&event(0.3, 0.4));
        let received: Vec<MarkerEvent> = receiver.try_iter().collect();
        assert_eq!(received, vec![event(0.1, 0.2), event(0.3, 0.4)]);
        assert_eq!(observer.dropped(), 0);
    }

    #[test]
    fn test_channel_observer_drops_when_full() {
        let (observer, receiver) = ChannelObserver::bounded(1);
        observer.notify(&event(0.1, 0.2));
        observer.notify(&event(0.3, 0.4));
        assert_eq!(observer.dropped(), 1);
        assert_eq!(receiver.try_iter().count(), 1);
    }

    #[test]
    fn test_channel_observer_drops_when_disconnected() {
        let (observer, receiver) = ChannelObserver::unbounded();
        drop(receiver);
        observer.notify(&event(0.1, 0.2));
        assert_eq!(observer.dropped(), 1);
    }

    #[test]
    fn test_envelope_wire_format() -> Result<(), serde_json::Error> {
        let envelope = MarkerEnvelope::from(event(0.5, 0.75));
        let json = serde_json::to_value(&envelope)?;
        assert_eq!(
            json,
            serde_json::json!({
                "messageType": "OPC_bezier_marker",
                "message": {"name": "ease", "x": 0.5, "y": 0.75}
            })
        );
        Ok(())
    }

    #[test]
    fn test_null_and_tracing_observers_accept_events() {
        NullObserver.notify(&event(0.0, 0.0));
        TracingObserver.notify(&event(1.0, 1.0));
    }
}
