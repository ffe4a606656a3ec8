//! Polygon object and click-to-place presets (star, hexagon).

use super::{ObjectCommon, Origin, ShapeStyle};
use kurbo::{BezPath, Point, Rect as KurboRect, Vec2};
use serde::{Deserialize, Serialize};

/// A closed polygon. Vertices are stored relative to the anchor, which sits
/// at the geometric center for the presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub common: ObjectCommon,
    pub position: Point,
    /// Vertices relative to `position`, unscaled.
    pub points: Vec<Vec2>,
    pub style: ShapeStyle,
}

impl Polygon {
    pub fn new(position: Point, points: Vec<Vec2>) -> Self {
        Self {
            common: ObjectCommon::new(Origin::Center),
            position,
            points,
            style: ShapeStyle::default(),
        }
    }

    /// Five-pointed star preset, pointing up.
    pub fn star(center: Point) -> Self {
        const SPIKES: usize = 5;
        const OUTER: f64 = 80.0;
        const INNER: f64 = 40.0;
        let mut points = Vec::with_capacity(SPIKES * 2);
        for i in 0..SPIKES * 2 {
            let radius = if i % 2 == 0 { OUTER } else { INNER };
            let angle = (std::f64::consts::PI / SPIKES as f64) * i as f64;
            points.push(Vec2::new(radius * angle.sin(), -radius * angle.cos()));
        }
        Self::new(center, points)
    }

    /// Regular hexagon preset.
    pub fn hexagon(center: Point) -> Self {
        const SIDES: usize = 6;
        const RADIUS: f64 = 80.0;
        let mut points = Vec::with_capacity(SIDES);
        for i in 0..SIDES {
            let angle = (std::f64::consts::PI / 3.0) * i as f64;
            points.push(Vec2::new(RADIUS * angle.cos(), RADIUS * angle.sin()));
        }
        Self::new(center, points)
    }

    /// Vertices in scene coordinates, with display scale applied.
    pub fn scene_points(&self) -> Vec<Point> {
        self.points
            .iter()
            .map(|v| {
                Point::new(
                    self.position.x + v.x * self.common.scale,
                    self.position.y + v.y * self.common.scale,
                )
            })
            .collect()
    }

    pub fn bounds(&self) -> KurboRect {
        let pts = self.scene_points();
        if pts.is_empty() {
            return KurboRect::new(self.position.x, self.position.y, self.position.x, self.position.y);
        }
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for p in &pts {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        KurboRect::new(min_x, min_y, max_x, max_y)
    }

    pub fn outline(&self) -> BezPath {
        let pts = self.scene_points();
        let mut path = BezPath::new();
        if let Some(first) = pts.first() {
            path.move_to(*first);
            for p in &pts[1..] {
                path.line_to(*p);
            }
            path.close_path();
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_vertex_count() {
        let star = Polygon::star(Point::new(150.0, 150.0));
        assert_eq!(star.points.len(), 10);
        // First spike points straight up at outer radius.
        assert!((star.points[0].x).abs() < 1e-9);
        assert!((star.points[0].y + 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_hexagon_bounds_centered() {
        let hex = Polygon::hexagon(Point::new(100.0, 100.0));
        let b = hex.bounds();
        assert!((b.x0 - 20.0).abs() < 1e-9);
        assert!((b.x1 - 180.0).abs() < 1e-9);
        // Flat-topped orientation: vertical extent is radius * sin(60°).
        let half_height = 80.0 * (std::f64::consts::PI / 3.0).sin();
        assert!((b.y0 - (100.0 - half_height)).abs() < 1e-9);
    }
}
