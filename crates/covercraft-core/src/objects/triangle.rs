//! Triangle object.

use super::{ObjectCommon, Origin, ShapeStyle};
use kurbo::{BezPath, Point, Rect as KurboRect};
use serde::{Deserialize, Serialize};

/// An isoceles triangle inscribed in its bounding box, apex at top-center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub common: ObjectCommon,
    /// Anchor position (interpreted via `common.origin`).
    pub position: Point,
    pub width: f64,
    pub height: f64,
    pub style: ShapeStyle,
}

impl Triangle {
    pub fn new(position: Point, width: f64, height: f64) -> Self {
        Self {
            common: ObjectCommon::new(Origin::TopLeft),
            position,
            width,
            height,
            style: ShapeStyle::default(),
        }
    }

    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self::new(
            Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            (p2.x - p1.x).abs(),
            (p2.y - p1.y).abs(),
        )
    }

    fn top_left(&self) -> Point {
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

    pub fn outline(&self) -> BezPath {
        let b = self.bounds();
        let mut path = BezPath::new();
        path.move_to(Point::new(b.center().x, b.y0));
        path.line_to(Point::new(b.x1, b.y1));
        path.line_to(Point::new(b.x0, b.y1));
        path.close_path();
        path
    }
}
