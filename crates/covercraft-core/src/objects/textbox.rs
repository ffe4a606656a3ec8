//! Text box object.
//!
//! Glyph layout and rasterization belong to the renderer; the core only
//! tracks content and font state, plus an approximate bounding box so
//! selection geometry stays usable before a renderer has measured anything.

use super::{ObjectCommon, Origin, SerializableColor};
use kurbo::{Point, Rect as KurboRect};
use serde::{Deserialize, Serialize};

/// Default font stack for new text boxes.
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// An editable text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub common: ObjectCommon,
    /// Top-left corner of the text bounding box.
    pub position: Point,
    pub content: String,
    pub font_family: String,
    /// Font size in scene units.
    pub font_size: f64,
    pub fill: SerializableColor,
}

impl TextBox {
    pub const DEFAULT_FONT_SIZE: f64 = 40.0;

    pub fn new(position: Point, content: String) -> Self {
        Self {
            common: ObjectCommon::new(Origin::TopLeft),
            position,
            content,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: Self::DEFAULT_FONT_SIZE,
            fill: SerializableColor::black(),
        }
    }

    /// Approximate bounds from character count and font size. A renderer with
    /// real glyph metrics may present tighter boxes; this one only has to be
    /// stable and non-degenerate.
    pub fn bounds(&self) -> KurboRect {
        let line_count = self.content.lines().count().max(1) as f64;
        let longest = self
            .content
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as f64;
        let width = (longest * self.font_size * 0.6).max(self.font_size);
        let height = line_count * self.font_size * 1.2;
        KurboRect::new(
            self.position.x,
            self.position.y,
            self.position.x + width,
            self.position.y + height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_grow_with_content() {
        let short = TextBox::new(Point::ZERO, "hi".into());
        let long = TextBox::new(Point::ZERO, "a much longer line".into());
        assert!(long.bounds().width() > short.bounds().width());
    }

    #[test]
    fn test_empty_content_keeps_nonzero_bounds() {
        let empty = TextBox::new(Point::new(10.0, 10.0), String::new());
        assert!(empty.bounds().width() > 0.0);
        assert!(empty.bounds().height() > 0.0);
    }
}
