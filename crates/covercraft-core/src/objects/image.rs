//! Placed image object.

use super::{ObjectCommon, Origin};
use crate::decode::DecodedImage;
use kurbo::{Point, Rect as KurboRect};
use serde::{Deserialize, Serialize};

/// A decoded raster image placed on the scene.
///
/// Pixel data is kept base64-encoded so snapshots stay plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    pub common: ObjectCommon,
    /// Anchor position (center by default, matching cover placement).
    pub position: Point,
    /// Natural width in pixels.
    pub source_width: u32,
    /// Natural height in pixels.
    pub source_height: u32,
    /// RGBA8 pixel data, base64-encoded.
    pub data_base64: String,
}

impl ImageObject {
    /// Create an image object from decoded pixels, anchored at its center.
    pub fn from_decoded(position: Point, image: &DecodedImage) -> Self {
        use base64::{Engine, engine::general_purpose::STANDARD};

        Self {
            common: ObjectCommon::new(Origin::Center),
            position,
            source_width: image.width,
            source_height: image.height,
            data_base64: STANDARD.encode(&image.rgba),
        }
    }

    /// Decode the stored pixel data back to RGBA8 bytes.
    pub fn rgba(&self) -> Option<Vec<u8>> {
        use base64::{Engine, engine::general_purpose::STANDARD};
        STANDARD.decode(&self.data_base64).ok()
    }

    pub fn display_width(&self) -> f64 {
        self.source_width as f64 * self.common.scale
    }

    pub fn display_height(&self) -> f64 {
        self.source_height as f64 * self.common.scale
    }

    pub fn bounds(&self) -> KurboRect {
        let (w, h) = (self.display_width(), self.display_height());
        match self.common.origin {
            Origin::Center => KurboRect::new(
                self.position.x - w / 2.0,
                self.position.y - h / 2.0,
                self.position.x + w / 2.0,
                self.position.y + h / 2.0,
            ),
            Origin::TopLeft => {
                KurboRect::new(self.position.x, self.position.y, self.position.x + w, self.position.y + h)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(width: u32, height: u32) -> DecodedImage {
        DecodedImage {
            width,
            height,
            rgba: vec![0u8; (width * height * 4) as usize],
        }
    }

    #[test]
    fn test_roundtrip_pixels() {
        let img = ImageObject::from_decoded(Point::ZERO, &decoded(2, 2));
        assert_eq!(img.rgba().unwrap().len(), 16);
    }

    #[test]
    fn test_centered_bounds_with_scale() {
        let mut img = ImageObject::from_decoded(Point::new(100.0, 100.0), &decoded(50, 20));
        img.common.scale = 2.0;
        assert_eq!(img.bounds(), KurboRect::new(50.0, 80.0, 150.0, 120.0));
    }
}
