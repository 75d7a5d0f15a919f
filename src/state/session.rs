//! Per-attachment gesture session: the anchors every snapshot is measured against.

use super::geometry::Geometry;
use crate::model::{Phase, Point, Snapshot};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub anchor_center: Point,
    /// Set at most once per epoch, the first time two contacts are measured.
    pub anchor_distance: Option<f64>,
    pub anchor_angle: Option<f64>,
    pub last_center: Point,
    pub translation: Point,
}

impl Session {
    /// Starts a new epoch anchored at `geom`.
    pub fn anchored(geom: &Geometry) -> Self {
        Self {
            anchor_center: geom.center,
            anchor_distance: geom.distance,
            anchor_angle: geom.angle,
            last_center: geom.center,
            translation: Point::ORIGIN,
        }
    }

    /// Builds the snapshot for `geom` and advances `last_center`.
    pub fn snapshot(
        &mut self,
        phase: Phase,
        live_contacts: usize,
        geom: &Geometry,
        timestamp: f64,
    ) -> Snapshot {
        if self.anchor_distance.is_none() {
            self.anchor_distance = geom.distance;
        }
        if self.anchor_angle.is_none() {
            self.anchor_angle = geom.angle;
        }

        let delta = geom.center - self.last_center;
        self.last_center = geom.center;
        self.translation = geom.center - self.anchor_center;

        let scale = match (geom.distance, self.anchor_distance) {
            (Some(current), Some(anchor)) if anchor != 0.0 => current / anchor,
            _ => 1.0,
        };
        let rotation = match (geom.angle, self.anchor_angle) {
            (Some(current), Some(anchor)) => current - anchor,
            _ => 0.0,
        };

        Snapshot {
            phase,
            pointer_count: live_contacts.min(2) as u8,
            center: geom.center,
            delta,
            translation: self.translation,
            distance: geom.distance,
            scale,
            rotation,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::geometry::measure;

    #[test]
    fn anchored_snapshot_is_neutral() {
        let geom = measure(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        let mut s = Session::anchored(&geom);
        let snap = s.snapshot(Phase::Start, 2, &geom, 1.0);
        assert_eq!(snap.delta, Point::ORIGIN);
        assert_eq!(snap.translation, Point::ORIGIN);
        assert_eq!(snap.scale, 1.0);
        assert_eq!(snap.rotation, 0.0);
        assert_eq!(snap.distance, Some(100.0));
    }

    #[test]
    fn delta_is_relative_to_previous_emission() {
        let mut s = Session::anchored(&Geometry::at(Point::new(10.0, 10.0)));
        let a = s.snapshot(Phase::Move, 1, &Geometry::at(Point::new(15.0, 10.0)), 2.0);
        let b = s.snapshot(Phase::Move, 1, &Geometry::at(Point::new(15.0, 30.0)), 3.0);
        assert_eq!(a.delta, Point::new(5.0, 0.0));
        assert_eq!(b.delta, Point::new(0.0, 20.0));
        assert_eq!(b.translation, Point::new(5.0, 20.0));
    }

    #[test]
    fn pair_anchors_are_captured_lazily() {
        let mut s = Session::anchored(&Geometry::at(Point::ORIGIN));
        let pair = measure(&[Point::new(0.0, 0.0), Point::new(50.0, 0.0)]);
        let first = s.snapshot(Phase::Move, 2, &pair, 1.0);
        assert_eq!(first.scale, 1.0);
        assert_eq!(s.anchor_distance, Some(50.0));

        let wider = measure(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        let second = s.snapshot(Phase::Move, 2, &wider, 2.0);
        assert_eq!(second.scale, 2.0);
        assert_eq!(s.anchor_distance, Some(50.0));
    }

    #[test]
    fn zero_anchor_distance_keeps_unit_scale() {
        let same = measure(&[Point::new(5.0, 5.0), Point::new(5.0, 5.0)]);
        let mut s = Session::anchored(&same);
        let apart = measure(&[Point::new(0.0, 5.0), Point::new(10.0, 5.0)]);
        let snap = s.snapshot(Phase::Move, 2, &apart, 1.0);
        assert_eq!(snap.scale, 1.0);
    }

    #[test]
    fn pointer_count_is_clamped() {
        let mut s = Session::anchored(&Geometry::at(Point::ORIGIN));
        let snap = s.snapshot(Phase::End, 5, &Geometry::at(Point::ORIGIN), 0.0);
        assert_eq!(snap.pointer_count, 2);
    }
}
