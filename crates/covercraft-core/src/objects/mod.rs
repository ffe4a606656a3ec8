//! Scene object definitions.
//!
//! Every drawable on the canvas is one variant of [`SceneObject`]. Variants
//! own their geometry; shared presentation state (identity, origin, rotation,
//! opacity, selectability) lives in [`ObjectCommon`].

mod arrow;
mod ellipse;
mod image;
mod line;
mod path;
mod polygon;
mod rect;
mod textbox;
mod triangle;

pub use arrow::{ARROW_HEAD, Arrow, ArrowHead};
pub use ellipse::Ellipse;
pub use image::ImageObject;
pub use line::Line;
pub use path::{PathSeg, PathShape};
pub use polygon::Polygon;
pub use rect::Rect;
pub use textbox::TextBox;
pub use triangle::Triangle;

use crate::style::StyleProp;
use kurbo::{Point, Rect as KurboRect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for scene objects.
pub type ObjectId = Uuid;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Parse a CSS hex color string (`#rgb`, `#rrggbb`, `#rrggbbaa`).
    ///
    /// Returns `None` for anything else; callers decide the fallback so that
    /// malformed input degrades instead of erroring.
    pub fn parse_css(color: &str) -> Option<Self> {
        let color = color.trim();
        if color == "transparent" {
            return Some(Self::transparent());
        }
        let hex = color.strip_prefix('#')?;
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::new(r, g, b, 255))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b, 255))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How an object's anchor point relates to its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Origin {
    /// Anchor is the top-left corner.
    #[default]
    TopLeft,
    /// Anchor is the geometric center.
    Center,
}

/// Presentation state shared by every object variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectCommon {
    pub id: ObjectId,
    /// Anchor interpretation for position-based variants.
    pub origin: Origin,
    /// Uniform display scale.
    pub scale: f64,
    /// Rotation angle in radians (around the anchor).
    pub rotation: f64,
    /// Overall opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub opacity: f64,
    /// Whether the retained canvas lets the user pick this object.
    pub selectable: bool,
}

impl ObjectCommon {
    pub fn new(origin: Origin) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            scale: 1.0,
            rotation: 0.0,
            opacity: 1.0,
            selectable: true,
        }
    }
}

/// Fill/stroke state for outline-and-fill shape variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color (None = no fill).
    pub fill: Option<SerializableColor>,
    /// Stroke color.
    pub stroke: SerializableColor,
    /// Stroke width.
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: SerializableColor::black(),
            stroke_width: 2.0,
        }
    }
}

/// Enum wrapper for all object variants (for serialization and dispatch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneObject {
    Rect(Rect),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Line(Line),
    Arrow(Arrow),
    Polygon(Polygon),
    PathShape(PathShape),
    TextBox(TextBox),
    Image(ImageObject),
}

impl SceneObject {
    pub fn id(&self) -> ObjectId {
        self.common().id
    }

    pub fn common(&self) -> &ObjectCommon {
        match self {
            SceneObject::Rect(o) => &o.common,
            SceneObject::Ellipse(o) => &o.common,
            SceneObject::Triangle(o) => &o.common,
            SceneObject::Line(o) => &o.common,
            SceneObject::Arrow(o) => &o.common,
            SceneObject::Polygon(o) => &o.common,
            SceneObject::PathShape(o) => &o.common,
            SceneObject::TextBox(o) => &o.common,
            SceneObject::Image(o) => &o.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut ObjectCommon {
        match self {
            SceneObject::Rect(o) => &mut o.common,
            SceneObject::Ellipse(o) => &mut o.common,
            SceneObject::Triangle(o) => &mut o.common,
            SceneObject::Line(o) => &mut o.common,
            SceneObject::Arrow(o) => &mut o.common,
            SceneObject::Polygon(o) => &mut o.common,
            SceneObject::PathShape(o) => &mut o.common,
            SceneObject::TextBox(o) => &mut o.common,
            SceneObject::Image(o) => &mut o.common,
        }
    }

    /// Anchor point of the object. Line-like variants derive it from their
    /// start point; everything else stores it directly.
    pub fn anchor(&self) -> Point {
        match self {
            SceneObject::Rect(o) => o.position,
            SceneObject::Ellipse(o) => o.center,
            SceneObject::Triangle(o) => o.position,
            SceneObject::Line(o) => o.start,
            SceneObject::Arrow(o) => o.start,
            SceneObject::Polygon(o) => o.position,
            SceneObject::PathShape(o) => o.position,
            SceneObject::TextBox(o) => o.position,
            SceneObject::Image(o) => o.position,
        }
    }

    /// Move the object by a delta. Line-like variants move both endpoints,
    /// everything else moves its anchor.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        let shift = |p: &mut Point| {
            p.x += dx;
            p.y += dy;
        };
        match self {
            SceneObject::Rect(o) => shift(&mut o.position),
            SceneObject::Ellipse(o) => shift(&mut o.center),
            SceneObject::Triangle(o) => shift(&mut o.position),
            SceneObject::Line(o) => {
                shift(&mut o.start);
                shift(&mut o.end);
            }
            SceneObject::Arrow(o) => {
                shift(&mut o.start);
                shift(&mut o.end);
            }
            SceneObject::Polygon(o) => shift(&mut o.position),
            SceneObject::PathShape(o) => shift(&mut o.position),
            SceneObject::TextBox(o) => shift(&mut o.position),
            SceneObject::Image(o) => shift(&mut o.position),
        }
    }

    /// Bounding box in scene coordinates, derived from current geometry so
    /// collision state can never go stale.
    pub fn bounds(&self) -> KurboRect {
        match self {
            SceneObject::Rect(o) => o.bounds(),
            SceneObject::Ellipse(o) => o.bounds(),
            SceneObject::Triangle(o) => o.bounds(),
            SceneObject::Line(o) => o.bounds(),
            SceneObject::Arrow(o) => o.bounds(),
            SceneObject::Polygon(o) => o.bounds(),
            SceneObject::PathShape(o) => o.bounds(),
            SceneObject::TextBox(o) => o.bounds(),
            SceneObject::Image(o) => o.bounds(),
        }
    }

    /// Capability table: which style properties are legal for this variant.
    ///
    /// Checked at the style-reconciliation dispatch boundary instead of
    /// relying on best-effort field presence.
    pub fn supports(&self, prop: StyleProp) -> bool {
        use StyleProp::*;
        match self {
            SceneObject::Rect(_)
            | SceneObject::Ellipse(_)
            | SceneObject::Triangle(_)
            | SceneObject::Polygon(_)
            | SceneObject::PathShape(_) => {
                matches!(prop, Fill | Stroke | StrokeWidth | Opacity)
            }
            SceneObject::Line(_) => matches!(prop, Stroke | StrokeWidth | Opacity),
            SceneObject::Arrow(_) => matches!(prop, Fill | Stroke | StrokeWidth | Opacity),
            SceneObject::TextBox(_) => {
                matches!(prop, Fill | Opacity | FontFamily | FontSize)
            }
            SceneObject::Image(_) => matches!(prop, Opacity),
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            SceneObject::Rect(_) => "rect",
            SceneObject::Ellipse(_) => "ellipse",
            SceneObject::Triangle(_) => "triangle",
            SceneObject::Line(_) => "line",
            SceneObject::Arrow(_) => "arrow",
            SceneObject::Polygon(_) => "polygon",
            SceneObject::PathShape(_) => "path",
            SceneObject::TextBox(_) => "textbox",
            SceneObject::Image(_) => "image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_hex() {
        assert_eq!(
            SerializableColor::parse_css("#ff0000"),
            Some(SerializableColor::new(255, 0, 0, 255))
        );
        assert_eq!(
            SerializableColor::parse_css("#f00"),
            Some(SerializableColor::new(255, 0, 0, 255))
        );
        assert_eq!(
            SerializableColor::parse_css("#11223344"),
            Some(SerializableColor::new(0x11, 0x22, 0x33, 0x44))
        );
        assert_eq!(
            SerializableColor::parse_css("transparent"),
            Some(SerializableColor::transparent())
        );
        assert_eq!(SerializableColor::parse_css("red"), None);
        assert_eq!(SerializableColor::parse_css("#12"), None);
    }

    #[test]
    fn test_distinct_identities() {
        let a = SceneObject::Rect(Rect::new(Point::new(0.0, 0.0), 10.0, 10.0));
        let b = SceneObject::Rect(Rect::new(Point::new(50.0, 50.0), 10.0, 10.0));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_capability_table() {
        let line = SceneObject::Line(Line::new(Point::ZERO, Point::new(10.0, 0.0)));
        assert!(line.supports(StyleProp::Stroke));
        assert!(!line.supports(StyleProp::Fill));

        let text = SceneObject::TextBox(TextBox::new(Point::ZERO, "hi".into()));
        assert!(text.supports(StyleProp::FontFamily));
        assert!(!text.supports(StyleProp::StrokeWidth));
    }

    #[test]
    fn test_translate_line_moves_endpoints() {
        let mut line = SceneObject::Line(Line::new(Point::ZERO, Point::new(10.0, 0.0)));
        line.translate(5.0, -3.0);
        let SceneObject::Line(l) = &line else {
            unreachable!()
        };
        assert_eq!(l.start, Point::new(5.0, -3.0));
        assert_eq!(l.end, Point::new(15.0, -3.0));
    }
}
