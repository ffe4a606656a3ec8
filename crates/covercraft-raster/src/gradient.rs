//! Linear gradient background synthesis.
//!
//! The UI hands over CSS-flavored stop strings (`"#rrggbb 35%"`); the
//! gradient runs along the canvas diagonal from the top-left to the
//! bottom-right corner and is installed as a pre-rendered background image.

use covercraft_core::decode::DecodedImage;
use covercraft_core::engine::Engine;
use covercraft_core::objects::SerializableColor;

/// One gradient stop: color plus offset in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: SerializableColor,
    pub offset: f64,
}

/// Parse `"<color> <pos>%"` stop strings. Parsing is permissive, matching
/// the panel input it serves: unparsable colors fall back to black and
/// unparsable positions to 0.
pub fn parse_stops(stops: &[&str]) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|stop| {
            let mut parts = stop.split_whitespace();
            let color = parts
                .next()
                .and_then(SerializableColor::parse_css)
                .unwrap_or_else(SerializableColor::black);
            let offset = parts
                .next()
                .and_then(|p| p.trim_end_matches('%').parse::<f64>().ok())
                .unwrap_or(0.0)
                / 100.0;
            GradientStop {
                color,
                offset: offset.clamp(0.0, 1.0),
            }
        })
        .collect()
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

fn color_at(stops: &[GradientStop], t: f64) -> SerializableColor {
    match stops {
        [] => SerializableColor::black(),
        [only] => only.color,
        _ => {
            if t <= stops[0].offset {
                return stops[0].color;
            }
            for pair in stops.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                if t <= b.offset {
                    let span = b.offset - a.offset;
                    let local = if span <= f64::EPSILON {
                        1.0
                    } else {
                        (t - a.offset) / span
                    };
                    return SerializableColor::new(
                        lerp(a.color.r, b.color.r, local),
                        lerp(a.color.g, b.color.g, local),
                        lerp(a.color.b, b.color.b, local),
                        lerp(a.color.a, b.color.a, local),
                    );
                }
            }
            stops[stops.len() - 1].color
        }
    }
}

/// Render a linear gradient along the (0,0) to (width,height) diagonal.
pub fn render_linear(width: u32, height: u32, stops: &[GradientStop]) -> DecodedImage {
    let mut sorted = stops.to_vec();
    sorted.sort_by(|a, b| {
        a.offset
            .partial_cmp(&b.offset)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let (w, h) = (width as f64, height as f64);
    let denom = (w * w + h * h).max(f64::EPSILON);
    let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for y in 0..height {
        for x in 0..width {
            let t = ((x as f64 + 0.5) * w + (y as f64 + 0.5) * h) / denom;
            let c = color_at(&sorted, t.clamp(0.0, 1.0));
            rgba.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }
    DecodedImage {
        width,
        height,
        rgba,
    }
}

/// Rasterize a gradient at the scene's intrinsic size and install it as the
/// background image (one history snapshot).
pub fn apply_gradient_background(engine: &mut Engine, stops: &[&str]) {
    let parsed = parse_stops(stops);
    let width = engine.scene().width.max(1.0).round() as u32;
    let height = engine.scene().height.max(1.0).round() as u32;
    let image = render_linear(width, height, &parsed);
    engine.set_background_image(&image);
}

#[cfg(test)]
mod tests {
    use super::*;
    use covercraft_core::scene::Background;

    #[test]
    fn test_parse_stops() {
        let stops = parse_stops(&["#ff0000 0%", "#0000ff 100%"]);
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].color, SerializableColor::new(255, 0, 0, 255));
        assert!((stops[1].offset - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_stops_permissive() {
        let stops = parse_stops(&["nonsense", "#00ff00"]);
        assert_eq!(stops[0].color, SerializableColor::black());
        assert!((stops[0].offset).abs() < f64::EPSILON);
        assert_eq!(stops[1].color, SerializableColor::new(0, 255, 0, 255));
    }

    #[test]
    fn test_gradient_endpoints() {
        let stops = parse_stops(&["#000000 0%", "#ffffff 100%"]);
        let img = render_linear(64, 64, &stops);
        // Top-left is near the first stop, bottom-right near the last.
        assert!(img.rgba[0] < 16);
        let last = img.rgba.len() - 4;
        assert!(img.rgba[last] > 239);
    }

    #[test]
    fn test_apply_gradient_installs_background() {
        let mut engine = Engine::new(32.0, 16.0);
        apply_gradient_background(&mut engine, &["#ff0000 0%", "#0000ff 100%"]);

        let Background::Image(bg) = &engine.scene().background else {
            panic!("expected background image");
        };
        assert_eq!((bg.width, bg.height), (32, 16));

        // Installing the gradient is an undoable edit.
        assert!(engine.can_undo());
    }
}
