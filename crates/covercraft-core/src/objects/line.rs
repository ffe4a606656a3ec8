//! Line object.

use super::{ObjectCommon, Origin, SerializableColor};
use kurbo::{BezPath, Point, Rect as KurboRect};
use serde::{Deserialize, Serialize};

/// A straight line segment. Lines carry no fill; only stroke properties
/// apply (enforced by the capability table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub common: ObjectCommon,
    pub start: Point,
    pub end: Point,
    pub stroke: SerializableColor,
    pub stroke_width: f64,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            common: ObjectCommon::new(Origin::TopLeft),
            start,
            end,
            stroke: SerializableColor::black(),
            stroke_width: 2.0,
        }
    }

    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn bounds(&self) -> KurboRect {
        KurboRect::new(
            self.start.x.min(self.end.x),
            self.start.y.min(self.end.y),
            self.start.x.max(self.end.x),
            self.start.y.max(self.end.y),
        )
    }

    pub fn outline(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((line.length() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_unordered_endpoints() {
        let line = Line::new(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        assert_eq!(line.bounds(), KurboRect::new(10.0, 20.0, 50.0, 80.0));
    }
}
