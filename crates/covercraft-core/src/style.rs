//! Style reconciliation: routing a property change to an object or to the
//! constituents of a composite.

use crate::objects::{SceneObject, SerializableColor};
use thiserror::Error;

/// Style properties a UI intent can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProp {
    Fill,
    Stroke,
    StrokeWidth,
    Opacity,
    FontFamily,
    FontSize,
}

/// Value carried by a style update.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Color(SerializableColor),
    Number(f64),
    Text(String),
}

/// Style reconciliation errors.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("property {prop:?} is not applicable to {variant}")]
    Unsupported {
        variant: &'static str,
        prop: StyleProp,
    },
    #[error("value type mismatch for {prop:?}")]
    TypeMismatch { prop: StyleProp },
}

/// Result of an engine-level style intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleOutcome {
    Applied,
    /// No object selected: defined as a safe no-op.
    NoSelection,
    /// A font change is waiting on font-resource readiness; apply happens in
    /// `complete_font_ready` with this token.
    AwaitingFont { token: u64 },
}

fn expect_color(prop: StyleProp, value: &StyleValue) -> Result<SerializableColor, StyleError> {
    match value {
        StyleValue::Color(c) => Ok(*c),
        _ => Err(StyleError::TypeMismatch { prop }),
    }
}

fn expect_number(prop: StyleProp, value: &StyleValue) -> Result<f64, StyleError> {
    match value {
        StyleValue::Number(n) => Ok(*n),
        _ => Err(StyleError::TypeMismatch { prop }),
    }
}

/// Apply one property change to one object, dispatching by variant.
///
/// The capability table is consulted first, so an inapplicable property
/// (fill on a line, stroke width on a text box) is rejected here instead of
/// silently writing a field nothing reads. Numeric values are clamped rather
/// than validated: opacity to `[0, 1]`, widths and sizes to non-negative.
pub fn apply_style(
    object: &mut SceneObject,
    prop: StyleProp,
    value: &StyleValue,
) -> Result<(), StyleError> {
    if !object.supports(prop) {
        return Err(StyleError::Unsupported {
            variant: object.variant_name(),
            prop,
        });
    }

    match prop {
        StyleProp::Opacity => {
            let n = expect_number(prop, value)?;
            object.common_mut().opacity = n.clamp(0.0, 1.0);
        }
        StyleProp::Stroke => {
            let color = expect_color(prop, value)?;
            match object {
                // Coupling invariant: the arrowhead fill tracks the shaft
                // stroke so the two never visually diverge.
                SceneObject::Arrow(arrow) => {
                    arrow.stroke = color;
                    arrow.head.fill = color;
                }
                SceneObject::Line(line) => line.stroke = color,
                SceneObject::Rect(o) => o.style.stroke = color,
                SceneObject::Ellipse(o) => o.style.stroke = color,
                SceneObject::Triangle(o) => o.style.stroke = color,
                SceneObject::Polygon(o) => o.style.stroke = color,
                SceneObject::PathShape(o) => o.style.stroke = color,
                SceneObject::TextBox(_) | SceneObject::Image(_) => unreachable!(),
            }
        }
        StyleProp::StrokeWidth => {
            let width = expect_number(prop, value)?.max(0.0);
            match object {
                // Width applies to the shaft only; the head keeps its fixed
                // geometry.
                SceneObject::Arrow(arrow) => arrow.stroke_width = width,
                SceneObject::Line(line) => line.stroke_width = width,
                SceneObject::Rect(o) => o.style.stroke_width = width,
                SceneObject::Ellipse(o) => o.style.stroke_width = width,
                SceneObject::Triangle(o) => o.style.stroke_width = width,
                SceneObject::Polygon(o) => o.style.stroke_width = width,
                SceneObject::PathShape(o) => o.style.stroke_width = width,
                SceneObject::TextBox(_) | SceneObject::Image(_) => unreachable!(),
            }
        }
        StyleProp::Fill => {
            let color = expect_color(prop, value)?;
            match object {
                // Composite fill reaches every constituent except the shaft.
                SceneObject::Arrow(arrow) => arrow.head.fill = color,
                SceneObject::TextBox(text) => text.fill = color,
                SceneObject::Rect(o) => o.style.fill = Some(color),
                SceneObject::Ellipse(o) => o.style.fill = Some(color),
                SceneObject::Triangle(o) => o.style.fill = Some(color),
                SceneObject::Polygon(o) => o.style.fill = Some(color),
                SceneObject::PathShape(o) => o.style.fill = Some(color),
                SceneObject::Line(_) | SceneObject::Image(_) => unreachable!(),
            }
        }
        StyleProp::FontFamily => {
            let family = match value {
                StyleValue::Text(t) => t.clone(),
                _ => return Err(StyleError::TypeMismatch { prop }),
            };
            let SceneObject::TextBox(text) = object else {
                unreachable!()
            };
            text.font_family = family;
        }
        StyleProp::FontSize => {
            let size = expect_number(prop, value)?.max(1.0);
            let SceneObject::TextBox(text) = object else {
                unreachable!()
            };
            text.font_size = size;
        }
    }
    Ok(())
}
