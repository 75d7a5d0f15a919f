//! Value types shared by the recognizer, the pointer binding and the demo views.
//! Everything here is plain data: no DOM handles, no interior mutability.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Identifier of one physical contact, stable from begin to end/cancel.
/// Matches `PointerEvent.pointerId`.
pub type ContactId = i32;

/// Lifecycle phase carried by an emitted [`Snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Start,
    Move,
    End,
    Cancel,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Move => "move",
            Phase::End => "end",
            Phase::Cancel => "cancel",
        }
    }
}

/// Input device behind a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    Touch,
    Pen,
    Mouse,
    /// Anything the platform reports that we do not track.
    Other,
}

impl Modality {
    /// Maps a DOM `pointerType` string.
    pub fn from_pointer_type(kind: &str) -> Self {
        match kind {
            "touch" => Modality::Touch,
            "pen" => Modality::Pen,
            "mouse" => Modality::Mouse,
            _ => Modality::Other,
        }
    }

    /// Only direct touch, stylus and mouse contacts ever enter the registry.
    pub fn is_tracked(self) -> bool {
        !matches!(self, Modality::Other)
    }
}

/// The four lifecycle notifications the host delivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Begin,
    Move,
    End,
    Cancel,
}

impl ContactKind {
    /// DOM event name the binding listens to for this notification.
    pub fn event_name(self) -> &'static str {
        match self {
            ContactKind::Begin => "pointerdown",
            ContactKind::Move => "pointermove",
            ContactKind::End => "pointerup",
            ContactKind::Cancel => "pointercancel",
        }
    }
}

/// One raw notification, already decoupled from the DOM event that carried it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactEvent {
    pub kind: ContactKind,
    pub id: ContactId,
    pub position: Point,
    pub modality: Modality,
    /// Monotonic clock reading in milliseconds.
    pub timestamp: f64,
}

/// One emitted description of the gesture. Built once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub phase: Phase,
    /// Live contacts at emission time, clamped to 2.
    pub pointer_count: u8,
    pub center: Point,
    /// Center movement since the previous snapshot of this session.
    pub delta: Point,
    /// Center movement since the session was last anchored.
    pub translation: Point,
    /// Raw distance between the two active contacts, when there are two.
    pub distance: Option<f64>,
    /// Current distance over anchor distance; 1.0 with fewer than two contacts.
    pub scale: f64,
    /// Radians, current bearing minus anchor bearing. Not wrapped.
    pub rotation: f64,
    pub timestamp: f64,
}

fn default_true() -> bool {
    true
}

/// Binding options. A partially filled JSON object keeps defaults for missing keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureOptions {
    /// Suppress the platform default action of every pointer notification.
    #[serde(default = "default_true")]
    pub prevent_default: bool,
    /// Pin subsequent notifications of a contact to the bound element.
    #[serde(default = "default_true")]
    pub capture_pointers: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            prevent_default: true,
            capture_pointers: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_types_map_to_tracked_modalities() {
        assert_eq!(Modality::from_pointer_type("touch"), Modality::Touch);
        assert_eq!(Modality::from_pointer_type("pen"), Modality::Pen);
        assert_eq!(Modality::from_pointer_type("mouse"), Modality::Mouse);
        assert!(Modality::Touch.is_tracked());
        assert!(Modality::Pen.is_tracked());
        assert!(Modality::Mouse.is_tracked());
    }

    #[test]
    fn unknown_pointer_types_are_ignored() {
        assert_eq!(Modality::from_pointer_type(""), Modality::Other);
        assert_eq!(Modality::from_pointer_type("kinect"), Modality::Other);
        assert!(!Modality::Other.is_tracked());
    }

    #[test]
    fn options_default_to_enabled() {
        let opts = GestureOptions::default();
        assert!(opts.prevent_default);
        assert!(opts.capture_pointers);
    }

    #[test]
    fn partial_options_json_keeps_defaults() {
        let opts: GestureOptions = serde_json::from_str(r#"{"capturePointers":false}"#).unwrap();
        assert!(opts.prevent_default);
        assert!(!opts.capture_pointers);
        let empty: GestureOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, GestureOptions::default());
    }

    #[test]
    fn snapshot_serializes_phase_in_lowercase() {
        let snap = Snapshot {
            phase: Phase::Cancel,
            pointer_count: 0,
            center: Point::ORIGIN,
            delta: Point::ORIGIN,
            translation: Point::ORIGIN,
            distance: None,
            scale: 1.0,
            rotation: 0.0,
            timestamp: 12.5,
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains(r#""phase":"cancel""#));
        assert!(json.contains(r#""pointerCount":0"#));
    }
}
