//! Arrow object.
//!
//! An arrow is a composite: one object to the user, but internally a stroked
//! shaft plus an [`ArrowHead`] constituent. The head's fill must always track
//! the shaft's stroke color; style reconciliation maintains that coupling.

use super::{ObjectCommon, Origin, SerializableColor};
use kurbo::{BezPath, Point, Rect as KurboRect, Vec2};
use serde::{Deserialize, Serialize};

/// Fixed arrowhead size: wing length, and distance back along the shaft from
/// which the wings are drawn.
pub const ARROW_HEAD: f64 = 18.0;

/// The arrowhead constituent of an arrow composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowHead {
    /// Wing color. Invariant: equal to the shaft stroke unless the composite
    /// fill was written explicitly.
    pub fill: SerializableColor,
    pub size: f64,
}

/// An arrow composite (shaft + head).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub common: ObjectCommon,
    pub start: Point,
    /// End point (where the head points).
    pub end: Point,
    pub stroke: SerializableColor,
    pub stroke_width: f64,
    pub head: ArrowHead,
}

impl Arrow {
    pub fn new(start: Point, end: Point) -> Self {
        let stroke = SerializableColor::black();
        Self {
            common: ObjectCommon::new(Origin::TopLeft),
            start,
            end,
            stroke,
            stroke_width: 2.0,
            head: ArrowHead {
                fill: stroke,
                size: ARROW_HEAD,
            },
        }
    }

    /// Unit direction vector of the shaft. Degenerate (zero-length) arrows
    /// fall back to +X so the head geometry stays valid.
    pub fn direction(&self) -> Vec2 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len < f64::EPSILON {
            Vec2::new(1.0, 0.0)
        } else {
            Vec2::new(dx / len, dy / len)
        }
    }

    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The two wing endpoints of the head.
    ///
    /// Wings start at a point `head.size` units back along the shaft and are
    /// offset `head.size / 2` along the perpendicular, computed from the unit
    /// direction vector so the head stays proportionate at any drag angle.
    pub fn wing_points(&self) -> (Point, Point) {
        let dir = self.direction();
        let perp = Vec2::new(-dir.y, dir.x);
        let back = Point::new(
            self.end.x - dir.x * self.head.size,
            self.end.y - dir.y * self.head.size,
        );
        let half = self.head.size / 2.0;
        (
            Point::new(back.x + perp.x * half, back.y + perp.y * half),
            Point::new(back.x - perp.x * half, back.y - perp.y * half),
        )
    }

    /// Shaft as a multi-stroke path: shaft segment, then one stroke from the
    /// end point to each wing.
    pub fn shaft_path(&self) -> BezPath {
        let (left, right) = self.wing_points();
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path.move_to(self.end);
        path.line_to(left);
        path.move_to(self.end);
        path.line_to(right);
        path
    }

    pub fn bounds(&self) -> KurboRect {
        let (left, right) = self.wing_points();
        let xs = [self.start.x, self.end.x, left.x, right.x];
        let ys = [self.start.y, self.end.y, left.y, right.y];
        KurboRect::new(
            xs.iter().copied().fold(f64::MAX, f64::min),
            ys.iter().copied().fold(f64::MAX, f64::min),
            xs.iter().copied().fold(f64::MIN, f64::max),
            ys.iter().copied().fold(f64::MIN, f64::max),
        )
    }
}
