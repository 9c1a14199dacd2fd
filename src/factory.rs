// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape construction from raw panel input.
//!
//! Parses the active tool's field buffers as integers and builds a shape
//! carrying the original mathematical coordinates plus the current color.
//! Validation failures are ordinary values, never panics; the controller
//! treats them as "nothing happened" so the user can keep editing.

use crate::panel::{FieldBuffers, FieldKey, Tool};
use crate::shapes::{Circle, Ellipse, Line, Shape};
use kurbo::Point;
use masonry::vello::peniko::Color;
use thiserror::Error;

/// Why a shape could not be constructed from the current buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("field `{0}` is not a valid integer")]
    InvalidNumber(FieldKey),
    #[error("field `{0}` must be greater than zero")]
    NonPositive(FieldKey),
}

/// Parse one buffer as a signed integer. An empty buffer reads as 0.
fn parse_field(fields: &FieldBuffers, key: FieldKey) -> Result<i64, ShapeError> {
    let raw = fields.get(key).trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<i64>()
        .map_err(|_| ShapeError::InvalidNumber(key))
}

fn positive(value: i64, key: FieldKey) -> Result<f64, ShapeError> {
    if value > 0 {
        Ok(value as f64)
    } else {
        Err(ShapeError::NonPositive(key))
    }
}

/// Build a shape for `tool` from the field buffers and current color.
///
/// Circles and ellipses require strictly positive radii; lines always
/// succeed once all four coordinates parse (zero-length lines included).
pub fn create_shape(
    tool: Tool,
    fields: &FieldBuffers,
    color: Color,
) -> Result<Shape, ShapeError> {
    match tool {
        Tool::Circle => {
            let cx = parse_field(fields, FieldKey::Cx)?;
            let cy = parse_field(fields, FieldKey::Cy)?;
            let r = parse_field(fields, FieldKey::R)?;
            let radius = positive(r, FieldKey::R)?;
            Ok(Shape::Circle(Circle {
                center: Point::new(cx as f64, cy as f64),
                radius,
                color,
            }))
        }
        Tool::Ellipse => {
            let cx = parse_field(fields, FieldKey::Cx)?;
            let cy = parse_field(fields, FieldKey::Cy)?;
            let rx = parse_field(fields, FieldKey::Rx)?;
            let ry = parse_field(fields, FieldKey::Ry)?;
            let radius_x = positive(rx, FieldKey::Rx)?;
            let radius_y = positive(ry, FieldKey::Ry)?;
            Ok(Shape::Ellipse(Ellipse {
                center: Point::new(cx as f64, cy as f64),
                radius_x,
                radius_y,
                color,
            }))
        }
        Tool::Line => {
            let x1 = parse_field(fields, FieldKey::X1)?;
            let y1 = parse_field(fields, FieldKey::Y1)?;
            let x2 = parse_field(fields, FieldKey::X2)?;
            let y2 = parse_field(fields, FieldKey::Y2)?;
            Ok(Shape::Line(Line {
                start: Point::new(x1 as f64, y1 as f64),
                end: Point::new(x2 as f64, y2 as f64),
                color,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> Color {
        Color::from_rgb8(220, 53, 69)
    }

    fn circle_fields(cx: &str, cy: &str, r: &str) -> FieldBuffers {
        let mut fields = FieldBuffers::for_tool(Tool::Circle);
        fields.set(FieldKey::Cx, cx);
        fields.set(FieldKey::Cy, cy);
        fields.set(FieldKey::R, r);
        fields
    }

    #[test]
    fn circle_with_positive_radius() {
        let shape = create_shape(Tool::Circle, &circle_fields("3", "4", "5"), color());
        match shape {
            Ok(Shape::Circle(c)) => {
                assert_eq!(c.center, Point::new(3.0, 4.0));
                assert_eq!(c.radius, 5.0);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn circle_with_zero_radius_is_rejected() {
        let result = create_shape(Tool::Circle, &circle_fields("3", "4", "0"), color());
        assert_eq!(result, Err(ShapeError::NonPositive(FieldKey::R)));
    }

    #[test]
    fn circle_with_negative_radius_is_rejected() {
        let result = create_shape(Tool::Circle, &circle_fields("0", "0", "-2"), color());
        assert_eq!(result, Err(ShapeError::NonPositive(FieldKey::R)));
    }

    #[test]
    fn empty_buffer_reads_as_zero() {
        let shape = create_shape(Tool::Circle, &circle_fields("", "5", "2"), color());
        match shape {
            Ok(Shape::Circle(c)) => {
                assert_eq!(c.center, Point::new(0.0, 5.0));
                assert_eq!(c.radius, 2.0);
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_buffer_reads_as_zero() {
        let shape = create_shape(Tool::Circle, &circle_fields("  ", "5", "2"), color());
        assert!(matches!(shape, Ok(Shape::Circle(_))));
    }

    #[test]
    fn unparsable_buffer_is_rejected() {
        let result = create_shape(Tool::Circle, &circle_fields("abc", "0", "5"), color());
        assert_eq!(result, Err(ShapeError::InvalidNumber(FieldKey::Cx)));
    }

    #[test]
    fn negative_coordinates_are_fine() {
        let shape = create_shape(Tool::Circle, &circle_fields("-3", "-4", "5"), color());
        match shape {
            Ok(Shape::Circle(c)) => assert_eq!(c.center, Point::new(-3.0, -4.0)),
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn ellipse_requires_both_radii_positive() {
        let mut fields = FieldBuffers::for_tool(Tool::Ellipse);
        fields.set(FieldKey::Cx, "1");
        fields.set(FieldKey::Cy, "2");
        fields.set(FieldKey::Rx, "3");
        fields.set(FieldKey::Ry, "0");
        let result = create_shape(Tool::Ellipse, &fields, color());
        assert_eq!(result, Err(ShapeError::NonPositive(FieldKey::Ry)));

        fields.set(FieldKey::Ry, "4");
        match create_shape(Tool::Ellipse, &fields, color()) {
            Ok(Shape::Ellipse(e)) => {
                assert_eq!(e.center, Point::new(1.0, 2.0));
                assert_eq!((e.radius_x, e.radius_y), (3.0, 4.0));
            }
            other => panic!("expected an ellipse, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_line_is_allowed() {
        let mut fields = FieldBuffers::for_tool(Tool::Line);
        for key in [FieldKey::X1, FieldKey::Y1, FieldKey::X2, FieldKey::Y2] {
            fields.set(key, "0");
        }
        match create_shape(Tool::Line, &fields, color()) {
            Ok(Shape::Line(l)) => {
                assert_eq!(l.start, Point::ZERO);
                assert_eq!(l.end, Point::ZERO);
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn line_with_bad_coordinate_is_rejected() {
        let mut fields = FieldBuffers::for_tool(Tool::Line);
        fields.set(FieldKey::X1, "1");
        fields.set(FieldKey::Y1, "2.5"); // not an integer
        let result = create_shape(Tool::Line, &fields, color());
        assert_eq!(result, Err(ShapeError::InvalidNumber(FieldKey::Y1)));
    }
}
