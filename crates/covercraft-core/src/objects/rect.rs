//! Rectangle object.

use super::{ObjectCommon, Origin, ShapeStyle};
use kurbo::{BezPath, Point, Rect as KurboRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub common: ObjectCommon,
    /// Anchor position (interpreted via `common.origin`).
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub style: ShapeStyle,
}

impl Rect {
    /// Create a rectangle anchored at its top-left corner.
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            common: ObjectCommon::new(Origin::TopLeft),
            position,
            width,
            height,
            style: ShapeStyle::default(),
        }
    }

    /// Create a rectangle spanning two corner points.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self::new(
            Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            (p2.x - p1.x).abs(),
            (p2.y - p1.y).abs(),
        )
    }

    /// Top-left corner regardless of origin mode.
    pub fn top_left(&self) -> Point {
        match self.common.origin {
            Origin::TopLeft => self.position,
            Origin::Center => Point::new(
                self.position.x - self.width / 2.0,
                self.position.y - self.height / 2.0,
            ),
        }
    }

    pub fn bounds(&self) -> KurboRect {
        let tl = self.top_left();
        KurboRect::new(tl.x, tl.y, tl.x + self.width, tl.y + self.height)
    }

    /// Outline path for rendering.
    pub fn outline(&self) -> BezPath {
        self.bounds().to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let rect = Rect::from_corners(Point::new(300.0, 250.0), Point::new(100.0, 100.0));
        assert_eq!(rect.position, Point::new(100.0, 100.0));
        assert!((rect.width - 200.0).abs() < f64::EPSILON);
        assert!((rect.height - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_centered_origin() {
        let mut rect = Rect::new(Point::new(100.0, 100.0), 40.0, 20.0);
        rect.common.origin = Origin::Center;
        let b = rect.bounds();
        assert_eq!(b, KurboRect::new(80.0, 90.0, 120.0, 110.0));
    }
}
