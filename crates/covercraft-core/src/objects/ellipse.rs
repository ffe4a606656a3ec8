//! Ellipse object.

use super::{ObjectCommon, Origin, ShapeStyle};
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect as KurboRect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse, stored by center and radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub common: ObjectCommon,
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub style: ShapeStyle,
}

impl Ellipse {
    pub fn new(center: Point, radius_x: f64, radius_y: f64) -> Self {
        Self {
            common: ObjectCommon::new(Origin::Center),
            center,
            radius_x,
            radius_y,
            style: ShapeStyle::default(),
        }
    }

    /// Create an ellipse inscribed in the rectangle spanned by two corners.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let rect = KurboRect::new(
            p1.x.min(p2.x),
            p1.y.min(p2.y),
            p1.x.max(p2.x),
            p1.y.max(p2.y),
        );
        Self::new(rect.center(), rect.width() / 2.0, rect.height() / 2.0)
    }

    pub fn bounds(&self) -> KurboRect {
        KurboRect::new(
            self.center.x - self.radius_x,
            self.center.y - self.radius_y,
            self.center.x + self.radius_x,
            self.center.y + self.radius_y,
        )
    }

    pub fn outline(&self) -> BezPath {
        KurboEllipse::new(self.center, (self.radius_x, self.radius_y), 0.0).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners() {
        let e = Ellipse::from_corners(Point::new(0.0, 0.0), Point::new(100.0, 60.0));
        assert_eq!(e.center, Point::new(50.0, 30.0));
        assert!((e.radius_x - 50.0).abs() < f64::EPSILON);
        assert!((e.radius_y - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let e = Ellipse::new(Point::new(50.0, 50.0), 30.0, 20.0);
        assert_eq!(e.bounds(), KurboRect::new(20.0, 30.0, 80.0, 70.0));
    }
}
