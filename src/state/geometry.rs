//! Aggregate geometry of the active contacts.

use crate::model::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub center: Point,
    /// Euclidean distance between the two active contacts.
    pub distance: Option<f64>,
    /// Bearing from the first to the second active contact, in (-π, π].
    pub angle: Option<f64>,
}

impl Geometry {
    /// Geometry with no pair: only a center.
    pub fn at(center: Point) -> Self {
        Self {
            center,
            distance: None,
            angle: None,
        }
    }
}

/// Measures the first two points; any further points are ignored.
/// Total over its input: an empty slice yields the origin.
pub fn measure(points: &[Point]) -> Geometry {
    match points {
        [] => Geometry::at(Point::ORIGIN),
        [only] => Geometry::at(*only),
        [a, b, ..] => {
            let span = *b - *a;
            Geometry {
                center: a.midpoint(*b),
                distance: Some(span.length()),
                angle: Some(span.y.atan2(span.x)),
            }
        }
    }
}
