//! Image decode collaborator contract.
//!
//! Decoding is the engine's main suspension point: a pending-image placement
//! cannot complete until the pixels exist. The engine never blocks on it —
//! each placement request carries a [`RequestToken`], and only the newest
//! token is honored when a decode completes (last request wins; superseded
//! decodes are discarded).

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Boxed future for async collaborator operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Monotonic token identifying one asynchronous placement request.
pub type RequestToken = u64;

/// Decode errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported url scheme: {0}")]
    UnsupportedScheme(String),
    #[error("malformed image data: {0}")]
    Malformed(String),
    #[error("io error: {0}")]
    Io(String),
}

/// A decoded raster image with its natural dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixel data, row-major, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// Create an image filled with one color. Handy for tests and gradient
    /// backgrounds built pixel by pixel.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            rgba: data,
        }
    }
}

/// Trait for asynchronous image decoders (`url -> decoded image`).
pub trait ImageDecoder {
    /// Decode the image referenced by `url`.
    fn decode(&self, url: &str) -> BoxFuture<'_, Result<DecodedImage, DecodeError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_fills_every_pixel() {
        let img = DecodedImage::solid(3, 2, [1, 2, 3, 4]);
        assert_eq!(img.rgba.len(), 24);
        assert_eq!(&img.rgba[20..24], &[1, 2, 3, 4]);
    }
}
