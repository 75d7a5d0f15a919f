//! Demo view transform, driven by gesture snapshots.

use crate::model::{Phase, Point, Snapshot};

pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Radians.
    pub angle: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            angle: 0.0,
        }
    }
}

impl ViewTransform {
    /// Transform for `snap` relative to the transform held when the epoch started.
    pub fn applied(&self, snap: &Snapshot) -> Self {
        Self {
            zoom: (self.zoom * snap.scale).clamp(MIN_ZOOM, MAX_ZOOM),
            offset_x: self.offset_x + snap.translation.x,
            offset_y: self.offset_y + snap.translation.y,
            angle: self.angle + snap.rotation,
        }
    }

    /// Canvas `set_transform` arguments placing the origin at `offset`.
    pub fn matrix(&self) -> [f64; 6] {
        let (sin, cos) = self.angle.sin_cos();
        [
            self.zoom * cos,
            self.zoom * sin,
            -self.zoom * sin,
            self.zoom * cos,
            self.offset_x,
            self.offset_y,
        ]
    }
}

/// Tracks the base transform of the current epoch and the live result.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub base: ViewTransform,
    pub current: ViewTransform,
    pub center: Option<Point>,
}

impl ViewState {
    pub fn apply(&mut self, snap: &Snapshot) {
        match snap.phase {
            Phase::Start => {
                self.base = self.current;
                self.current = self.base.applied(snap);
                self.center = Some(snap.center);
            }
            Phase::Move => {
                self.current = self.base.applied(snap);
                self.center = Some(snap.center);
            }
            // A release snapshot is measured against the pair that just broke
            // up, so it carries no scale or rotation. Keep what the last move
            // produced and start the next epoch from there.
            Phase::End | Phase::Cancel => {
                self.base = self.current;
                self.center = if snap.pointer_count == 0 {
                    None
                } else {
                    Some(snap.center)
                };
            }
        }
    }

    pub fn reset(&mut self, origin: Point) {
        let fresh = ViewTransform {
            offset_x: origin.x,
            offset_y: origin.y,
            ..ViewTransform::default()
        };
        self.base = fresh;
        self.current = fresh;
        self.center = None;
    }
}
