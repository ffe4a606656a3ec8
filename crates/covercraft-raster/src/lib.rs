//! Covercraft Raster Library
//!
//! CPU rasterization of a scene at its intrinsic resolution, PNG export,
//! gradient background synthesis, and the `image`-crate-backed decoder.

pub mod decoder;
pub mod export;
pub mod gradient;
pub mod render;

pub use decoder::{RasterImageDecoder, decode_bytes};
pub use export::{ExportError, encode_png, export_file_name, export_png, export_raster};
pub use gradient::{GradientStop, apply_gradient_background, parse_stops, render_linear};
pub use render::{Pixmap, render_scene};
