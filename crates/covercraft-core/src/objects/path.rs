//! Free-form path object and the heart click-to-place preset.

use super::{ObjectCommon, Origin, ShapeStyle};
use kurbo::{BezPath, Point, Rect as KurboRect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};

/// One command of a path sequence. Coordinates are relative to the owning
/// object's anchor, unscaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSeg {
    MoveTo(Vec2),
    LineTo(Vec2),
    CurveTo(Vec2, Vec2, Vec2),
    Close,
}

/// A shape defined by an explicit path command sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathShape {
    pub common: ObjectCommon,
    pub position: Point,
    pub segments: Vec<PathSeg>,
    pub style: ShapeStyle,
}

impl PathShape {
    pub fn new(position: Point, segments: Vec<PathSeg>) -> Self {
        Self {
            common: ObjectCommon::new(Origin::Center),
            position,
            segments,
            style: ShapeStyle::default(),
        }
    }

    /// Heart preset: a fixed cubic outline placed at 2x scale.
    pub fn heart(center: Point) -> Self {
        use PathSeg::*;
        let segments = vec![
            MoveTo(Vec2::new(0.0, -30.0)),
            CurveTo(
                Vec2::new(-20.0, -50.0),
                Vec2::new(-50.0, -50.0),
                Vec2::new(-50.0, -30.0),
            ),
            CurveTo(
                Vec2::new(-50.0, -10.0),
                Vec2::new(-30.0, 10.0),
                Vec2::new(0.0, 30.0),
            ),
            CurveTo(
                Vec2::new(30.0, 10.0),
                Vec2::new(50.0, -10.0),
                Vec2::new(50.0, -30.0),
            ),
            CurveTo(
                Vec2::new(50.0, -50.0),
                Vec2::new(20.0, -50.0),
                Vec2::new(0.0, -30.0),
            ),
            Close,
        ];
        let mut shape = Self::new(center, segments);
        shape.common.scale = 2.0;
        shape
    }

    /// Resolve the command sequence into an absolute path.
    pub fn outline(&self) -> BezPath {
        let at = |v: Vec2| {
            Point::new(
                self.position.x + v.x * self.common.scale,
                self.position.y + v.y * self.common.scale,
            )
        };
        let mut path = BezPath::new();
        for seg in &self.segments {
            match *seg {
                PathSeg::MoveTo(p) => path.move_to(at(p)),
                PathSeg::LineTo(p) => path.line_to(at(p)),
                PathSeg::CurveTo(c1, c2, p) => path.curve_to(at(c1), at(c2), at(p)),
                PathSeg::Close => path.close_path(),
            }
        }
        path
    }

    pub fn bounds(&self) -> KurboRect {
        if self.segments.is_empty() {
            return KurboRect::new(self.position.x, self.position.y, self.position.x, self.position.y);
        }
        self.outline().bounding_box()
    }
}
