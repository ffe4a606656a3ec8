//! Software renderer: scene to RGBA pixel buffer.
//!
//! Deliberately small: flattened paths, even-odd scanline fills, and quad
//! strokes are enough to make export deterministic and testable. Glyph
//! rasterization is out of scope; text boxes contribute no pixels.

use covercraft_core::objects::{SceneObject, SerializableColor, ShapeStyle};
use covercraft_core::scene::{Background, DEFAULT_BACKGROUND, Scene};
use kurbo::{BezPath, CubicBez, ParamCurve, PathEl, Point, QuadBez};

/// Subdivision steps for curve flattening.
const CURVE_STEPS: usize = 16;

/// An RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    /// Fill the whole buffer with one color.
    pub fn fill(&mut self, color: [u8; 4]) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Source-over blend one pixel. Out-of-bounds coordinates are ignored.
    pub fn blend(&mut self, x: i64, y: i64, color: [u8; 4]) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let a = color[3] as u32;
        if a == 0 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        if a == 255 {
            self.data[i..i + 4].copy_from_slice(&color);
            return;
        }
        let inv = 255 - a;
        for ch in 0..3 {
            let src = color[ch] as u32;
            let dst = self.data[i + ch] as u32;
            self.data[i + ch] = ((src * a + dst * inv) / 255) as u8;
        }
        let dst_a = self.data[i + 3] as u32;
        self.data[i + 3] = (a + dst_a * inv / 255).min(255) as u8;
    }
}

/// One flattened subpath plus whether it was explicitly closed.
struct Polyline {
    points: Vec<Point>,
    closed: bool,
}

fn flatten_path(path: &BezPath) -> Vec<Polyline> {
    let mut polys = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    let mut finish = |points: &mut Vec<Point>, closed: bool| {
        if points.len() > 1 {
            polys.push(Polyline {
                points: std::mem::take(points),
                closed,
            });
        } else {
            points.clear();
        }
    };

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                finish(&mut current, false);
                current.push(p);
            }
            PathEl::LineTo(p) => current.push(p),
            PathEl::QuadTo(c, p) => {
                let last = *current.last().unwrap_or(&p);
                let quad = QuadBez::new(last, c, p);
                for i in 1..=CURVE_STEPS {
                    current.push(quad.eval(i as f64 / CURVE_STEPS as f64));
                }
            }
            PathEl::CurveTo(c1, c2, p) => {
                let last = *current.last().unwrap_or(&p);
                let cubic = CubicBez::new(last, c1, c2, p);
                for i in 1..=CURVE_STEPS {
                    current.push(cubic.eval(i as f64 / CURVE_STEPS as f64));
                }
            }
            PathEl::ClosePath => finish(&mut current, true),
        }
    }
    finish(&mut current, false);
    polys
}

/// Even-odd scanline fill over a set of polylines (open ones are closed
/// implicitly).
fn fill_polylines(pm: &mut Pixmap, polys: &[Polyline], color: [u8; 4]) {
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for poly in polys {
        for p in &poly.points {
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
    }
    if min_y > max_y {
        return;
    }
    let y0 = (min_y.floor().max(0.0)) as i64;
    let y1 = (max_y.ceil().min(pm.height as f64)) as i64;

    let mut xs: Vec<f64> = Vec::new();
    for y in y0..y1 {
        let sy = y as f64 + 0.5;
        xs.clear();
        for poly in polys {
            let n = poly.points.len();
            for i in 0..n {
                let a = poly.points[i];
                let b = poly.points[(i + 1) % n];
                if (a.y <= sy && b.y > sy) || (b.y <= sy && a.y > sy) {
                    let t = (sy - a.y) / (b.y - a.y);
                    xs.push(a.x + t * (b.x - a.x));
                }
            }
        }
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in xs.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil() as i64;
            let end = (pair[1] - 0.5).floor() as i64;
            for x in start..=end {
                pm.blend(x, y, color);
            }
        }
    }
}

/// Stroke a polyline by filling one quad per segment.
fn stroke_polyline(pm: &mut Pixmap, points: &[Point], closed: bool, width: f64, color: [u8; 4]) {
    if width <= 0.0 || points.len() < 2 {
        return;
    }
    let hw = width / 2.0;
    let n = points.len();
    let segment_count = if closed { n } else { n - 1 };
    for i in 0..segment_count {
        let a = points[i];
        let b = points[(i + 1) % n];
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len < f64::EPSILON {
            continue;
        }
        let nx = -dy / len * hw;
        let ny = dx / len * hw;
        let quad = Polyline {
            points: vec![
                Point::new(a.x + nx, a.y + ny),
                Point::new(b.x + nx, b.y + ny),
                Point::new(b.x - nx, b.y - ny),
                Point::new(a.x - nx, a.y - ny),
            ],
            closed: true,
        };
        fill_polylines(pm, std::slice::from_ref(&quad), color);
    }
}

fn with_opacity(color: SerializableColor, opacity: f64) -> [u8; 4] {
    let alpha = (color.a as f64 * opacity.clamp(0.0, 1.0)).round() as u8;
    [color.r, color.g, color.b, alpha]
}

fn paint_shape(pm: &mut Pixmap, path: &BezPath, style: &ShapeStyle, opacity: f64) {
    let polys = flatten_path(path);
    if let Some(fill) = style.fill {
        fill_polylines(pm, &polys, with_opacity(fill, opacity));
    }
    let stroke = with_opacity(style.stroke, opacity);
    for poly in &polys {
        stroke_polyline(pm, &poly.points, poly.closed, style.stroke_width, stroke);
    }
}

fn paint_stroke(pm: &mut Pixmap, path: &BezPath, width: f64, color: [u8; 4]) {
    for poly in flatten_path(path) {
        stroke_polyline(pm, &poly.points, poly.closed, width, color);
    }
}

fn blit_rgba(
    pm: &mut Pixmap,
    data: &[u8],
    src_w: u32,
    src_h: u32,
    x0: f64,
    y0: f64,
    scale: f64,
    opacity: f64,
) {
    if src_w == 0 || src_h == 0 || scale <= 0.0 {
        return;
    }
    let dst_w = src_w as f64 * scale;
    let dst_h = src_h as f64 * scale;
    let px0 = x0.floor().max(0.0) as i64;
    let py0 = y0.floor().max(0.0) as i64;
    let px1 = ((x0 + dst_w).ceil() as i64).min(pm.width as i64);
    let py1 = ((y0 + dst_h).ceil() as i64).min(pm.height as i64);

    for py in py0..py1 {
        let sy = ((py as f64 + 0.5 - y0) / scale).floor();
        if sy < 0.0 || sy >= src_h as f64 {
            continue;
        }
        for px in px0..px1 {
            let sx = ((px as f64 + 0.5 - x0) / scale).floor();
            if sx < 0.0 || sx >= src_w as f64 {
                continue;
            }
            let i = ((sy as u32 * src_w + sx as u32) * 4) as usize;
            if i + 3 >= data.len() {
                continue;
            }
            let alpha = (data[i + 3] as f64 * opacity).round() as u8;
            pm.blend(px, py, [data[i], data[i + 1], data[i + 2], alpha]);
        }
    }
}

fn background_color(css: &str) -> [u8; 4] {
    let color = SerializableColor::parse_css(css)
        .or_else(|| SerializableColor::parse_css(DEFAULT_BACKGROUND))
        .unwrap_or(SerializableColor::white());
    // The canvas itself is opaque.
    [color.r, color.g, color.b, 255]
}

fn draw_object(pm: &mut Pixmap, object: &SceneObject) {
    let opacity = object.common().opacity;
    if opacity <= 0.0 {
        return;
    }
    match object {
        SceneObject::Rect(o) => paint_shape(pm, &o.outline(), &o.style, opacity),
        SceneObject::Ellipse(o) => paint_shape(pm, &o.outline(), &o.style, opacity),
        SceneObject::Triangle(o) => paint_shape(pm, &o.outline(), &o.style, opacity),
        SceneObject::Polygon(o) => paint_shape(pm, &o.outline(), &o.style, opacity),
        SceneObject::PathShape(o) => paint_shape(pm, &o.outline(), &o.style, opacity),
        SceneObject::Line(o) => {
            paint_stroke(pm, &o.outline(), o.stroke_width, with_opacity(o.stroke, opacity));
        }
        SceneObject::Arrow(o) => {
            // Shaft in the stroke color, wings in the head fill. Normally the
            // coupling invariant keeps them identical.
            let mut shaft = BezPath::new();
            shaft.move_to(o.start);
            shaft.line_to(o.end);
            paint_stroke(pm, &shaft, o.stroke_width, with_opacity(o.stroke, opacity));

            let (left, right) = o.wing_points();
            let mut wings = BezPath::new();
            wings.move_to(o.end);
            wings.line_to(left);
            wings.move_to(o.end);
            wings.line_to(right);
            paint_stroke(pm, &wings, o.stroke_width, with_opacity(o.head.fill, opacity));
        }
        // Glyph rasterization is a renderer concern this crate does not take
        // on; text participates in the scene but exports no pixels here.
        SceneObject::TextBox(_) => {}
        SceneObject::Image(o) => {
            let Some(data) = o.rgba() else {
                log::error!("render: image {} has undecodable pixel data", o.common.id);
                return;
            };
            let bounds = o.bounds();
            blit_rgba(
                pm,
                &data,
                o.source_width,
                o.source_height,
                bounds.x0,
                bounds.y0,
                o.common.scale,
                opacity,
            );
        }
    }
}

/// Render a scene into a pixel buffer at its intrinsic resolution.
pub fn render_scene(scene: &Scene) -> Pixmap {
    let width = scene.width.max(1.0).round() as u32;
    let height = scene.height.max(1.0).round() as u32;
    let mut pm = Pixmap::new(width, height);

    match &scene.background {
        Background::Color(css) => pm.fill(background_color(css)),
        Background::Image(bg) => {
            pm.fill(background_color(DEFAULT_BACKGROUND));
            match bg.rgba() {
                Some(data) => {
                    // Cover scaling, centered: fully covers the canvas,
                    // overflow allowed on one axis.
                    let scale = (width as f64 / bg.width.max(1) as f64)
                        .max(height as f64 / bg.height.max(1) as f64);
                    let x0 = (width as f64 - bg.width as f64 * scale) / 2.0;
                    let y0 = (height as f64 - bg.height as f64 * scale) / 2.0;
                    blit_rgba(&mut pm, &data, bg.width, bg.height, x0, y0, scale, 1.0);
                }
                None => log::error!("render: background image has undecodable pixel data"),
            }
        }
    }

    for object in scene.objects() {
        draw_object(&mut pm, object);
    }
    pm
}
