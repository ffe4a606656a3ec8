//! Raster export at intrinsic resolution.
//!
//! "What you exported" is the full-resolution scene, never "what's currently
//! visible": the view transform is neutralized for the duration of the
//! render and restored afterwards.

use crate::render::{Pixmap, render_scene};
use covercraft_core::camera::Camera;
use covercraft_core::scene::Scene;
use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("png encode error: {0}")]
    Encode(String),
}

/// Render the scene to a pixel buffer sized exactly `width x height`,
/// independent of the current pan/zoom state.
pub fn export_raster(scene: &Scene, camera: &mut Camera) -> Pixmap {
    let saved = *camera;
    camera.reset();
    let pixmap = render_scene(scene);
    *camera = saved;
    log::info!(
        "export: rendered {}x{} raster",
        pixmap.width(),
        pixmap.height()
    );
    pixmap
}

/// Export the scene as PNG bytes.
pub fn export_png(scene: &Scene, camera: &mut Camera) -> Result<Vec<u8>, ExportError> {
    encode_png(&export_raster(scene, camera))
}

/// Encode RGBA pixel data to PNG bytes.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| ExportError::Encode(format!("failed to write header: {e}")))?;
        writer
            .write_image_data(pixmap.data())
            .map_err(|e| ExportError::Encode(format!("failed to write image data: {e}")))?;
    }
    Ok(png_data)
}

/// Default download file name for an export taken at the given local time.
pub fn export_file_name(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> String {
    format!("covercraft_{year:04}{month:02}{day:02}_{hour:02}{minute:02}.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use covercraft_core::objects::{Rect, SceneObject};
    use kurbo::{Point, Vec2};

    #[test]
    fn test_export_dimensions_ignore_view_transform() {
        let scene = Scene::new(320.0, 200.0);
        let mut camera = Camera::new();
        camera.pan(Vec2::new(500.0, -200.0));
        camera.zoom = 3.0;

        let pixmap = export_raster(&scene, &mut camera);
        assert_eq!((pixmap.width(), pixmap.height()), (320, 200));

        // The prior transform is restored afterwards.
        assert!((camera.zoom - 3.0).abs() < f64::EPSILON);
        assert_eq!(camera.offset, Vec2::new(500.0, -200.0));
    }

    #[test]
    fn test_export_is_deterministic() {
        let mut scene = Scene::new(64.0, 64.0);
        let mut rect = Rect::new(Point::new(8.0, 8.0), 40.0, 30.0);
        rect.style.fill = Some(covercraft_core::objects::SerializableColor::new(
            20, 40, 60, 255,
        ));
        scene.add(SceneObject::Rect(rect));

        let mut camera = Camera::new();
        let first = export_raster(&scene, &mut camera);
        camera.zoom = 2.0;
        let second = export_raster(&scene, &mut camera);
        assert_eq!(first, second);
    }

    #[test]
    fn test_png_roundtrip_header() {
        let scene = Scene::new(16.0, 16.0);
        let mut camera = Camera::new();
        let bytes = export_png(&scene, &mut camera).unwrap();
        assert!(bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }

    #[test]
    fn test_export_file_name_format() {
        assert_eq!(
            export_file_name(2025, 3, 7, 9, 5),
            "covercraft_20250307_0905.png"
        );
    }
}
