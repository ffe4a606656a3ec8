//! Image decoder backed by the `image` crate.

use covercraft_core::decode::{BoxFuture, DecodeError, DecodedImage, ImageDecoder};
use std::path::Path;

/// Decodes `data:` URLs and local file paths into RGBA8 pixels.
///
/// The decode itself is synchronous; the async contract exists so hosts with
/// genuinely asynchronous sources (network fetch, browser decode) slot in
/// behind the same trait.
#[derive(Debug, Default)]
pub struct RasterImageDecoder;

impl RasterImageDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl ImageDecoder for RasterImageDecoder {
    fn decode(&self, url: &str) -> BoxFuture<'_, Result<DecodedImage, DecodeError>> {
        let url = url.to_string();
        Box::pin(async move { decode_url(&url) })
    }
}

fn decode_url(url: &str) -> Result<DecodedImage, DecodeError> {
    if let Some(rest) = url.strip_prefix("data:") {
        let payload = rest
            .split_once("base64,")
            .map(|(_, data)| data)
            .ok_or_else(|| DecodeError::Malformed("data url without base64 payload".into()))?;
        let bytes = {
            use base64::{Engine, engine::general_purpose::STANDARD};
            STANDARD
                .decode(payload)
                .map_err(|e| DecodeError::Malformed(format!("base64: {e}")))?
        };
        return decode_bytes(&bytes);
    }

    let path = url.strip_prefix("file://").unwrap_or(url);
    if path.contains("://") {
        return Err(DecodeError::UnsupportedScheme(url.to_string()));
    }
    let bytes = std::fs::read(Path::new(path)).map_err(|e| DecodeError::Io(e.to_string()))?;
    decode_bytes(&bytes)
}

/// Decode encoded image bytes (PNG/JPEG) into RGBA8 with natural dimensions.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| DecodeError::Malformed(e.to_string()))?
        .to_rgba8();
    Ok(DecodedImage {
        width: decoded.width(),
        height: decoded.height(),
        rgba: decoded.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::encode_png;
    use crate::render::Pixmap;

    fn block_on<F: std::future::Future>(f: F) -> F::Output {
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn dummy_raw_waker() -> RawWaker {
            fn no_op(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                dummy_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
            RawWaker::new(std::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);
        loop {
            if let Poll::Ready(result) = f.as_mut().poll(&mut cx) {
                return result;
            }
        }
    }

    fn tiny_png() -> Vec<u8> {
        let mut pm = Pixmap::new(3, 2);
        pm.fill([9, 8, 7, 255]);
        encode_png(&pm).unwrap()
    }

    #[test]
    fn test_decode_bytes_dimensions() {
        let img = decode_bytes(&tiny_png()).unwrap();
        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(&img.rgba[0..4], &[9, 8, 7, 255]);
    }

    #[test]
    fn test_decode_data_url() {
        use base64::{Engine, engine::general_purpose::STANDARD};
        let url = format!("data:image/png;base64,{}", STANDARD.encode(tiny_png()));

        let decoder = RasterImageDecoder::new();
        let img = block_on(decoder.decode(&url)).unwrap();
        assert_eq!((img.width, img.height), (3, 2));
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        assert!(matches!(
            decode_bytes(b"not an image"),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_unsupported_scheme() {
        let decoder = RasterImageDecoder::new();
        let result = block_on(decoder.decode("https://example.com/pic.png"));
        assert!(matches!(result, Err(DecodeError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_engine_placement_through_decoder() {
        use crate::export::export_raster;
        use base64::{Engine as _, engine::general_purpose::STANDARD};
        use covercraft_core::engine::Engine;
        use kurbo::Point;

        let mut pm = Pixmap::new(2, 2);
        pm.fill([200, 100, 50, 255]);
        let url = format!(
            "data:image/png;base64,{}",
            STANDARD.encode(encode_png(&pm).unwrap())
        );

        // Full placement flow: arm the url, click, decode, complete, export.
        let mut engine = Engine::new(8.0, 8.0);
        engine.set_pending_image_url(Some(url.clone()));
        let request = engine.on_pointer_down(Point::new(1.0, 1.0)).unwrap();

        let decoder = RasterImageDecoder::new();
        let decoded = block_on(decoder.decode(&request.url));
        let placed = engine
            .complete_image_placement(request.token, decoded)
            .unwrap();
        assert!(placed.is_some());

        let mut camera = *engine.camera();
        let out = export_raster(engine.scene(), &mut camera);
        // Cover scaling stretches the 2x2 image over the whole 8x8 canvas.
        assert_eq!(out.pixel(4, 4), [200, 100, 50, 255]);
    }
}
