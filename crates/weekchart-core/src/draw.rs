//! Draw commands and paint styles.
//!
//! All rendering reduces to these primitives.

use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Two-color linear gradient between two points.
///
/// Positions outside the `start`..`end` segment take the nearest endpoint
/// color (clamp tiling).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Where `start_color` applies
    pub start: Point,
    /// Where `end_color` applies
    pub end: Point,
    /// Color at `start`
    pub start_color: Color,
    /// Color at `end`
    pub end_color: Color,
}

impl LinearGradient {
    /// Create a gradient running from `start` to `end`.
    #[must_use]
    pub const fn new(start: Point, end: Point, start_color: Color, end_color: Color) -> Self {
        Self {
            start,
            end,
            start_color,
            end_color,
        }
    }

    /// Color at parameter `t` along the gradient axis, clamped to [0, 1].
    #[must_use]
    pub fn color_at(&self, t: f32) -> Color {
        self.start_color.lerp(&self.end_color, t)
    }

    /// Color at an arbitrary point, projected onto the gradient axis.
    #[must_use]
    pub fn color_at_point(&self, point: Point) -> Color {
        let axis = self.end - self.start;
        let len_sq = axis.x * axis.x + axis.y * axis.y;
        if len_sq <= f32::EPSILON {
            return self.start_color;
        }
        let rel = point - self.start;
        self.color_at((rel.x * axis.x + rel.y * axis.y) / len_sq)
    }

    /// Same gradient with both endpoint alphas scaled by `fraction`.
    #[must_use]
    pub fn with_alpha_scaled(&self, fraction: f32) -> Self {
        Self {
            start_color: self.start_color.with_alpha_scaled(fraction),
            end_color: self.end_color.with_alpha_scaled(fraction),
            ..*self
        }
    }

}

/// What a shape is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Brush {
    /// One flat color
    Solid(Color),
    /// Two-color linear gradient
    Linear(LinearGradient),
}

impl Brush {
    /// Color at `point` (the solid color for `Solid`).
    #[must_use]
    pub fn color_at_point(&self, point: Point) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::Linear(gradient) => gradient.color_at_point(point),
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<LinearGradient> for Brush {
    fn from(gradient: LinearGradient) -> Self {
        Self::Linear(gradient)
    }
}

/// Stroke style for lines. Ends are flat (butt caps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke paint
    pub brush: Brush,
    /// Stroke width in pixels
    pub width: f32,
    /// Alternating dash/gap lengths (empty = solid)
    pub dash: Vec<f32>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            brush: Brush::default(),
            width: 1.0,
            dash: Vec::new(),
        }
    }
}

impl StrokeStyle {
    /// Solid stroke of the given paint and width.
    #[must_use]
    pub fn new(brush: impl Into<Brush>, width: f32) -> Self {
        Self {
            brush: brush.into(),
            width,
            ..Self::default()
        }
    }

    /// Set the dash pattern.
    #[must_use]
    pub fn dashed(mut self, pattern: &[f32]) -> Self {
        self.dash = pattern.to_vec();
        self
    }

    /// Check if the stroke is dashed.
    #[must_use]
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

/// 2D transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Chain transforms: first apply self, then apply other.
    ///
    /// For point p: `a.then(b).apply(p)` == `b.apply(a.apply(p))`
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0] * point.x + m[2] * point.y + m[4],
            m[1] * point.x + m[3] * point.y + m[5],
        )
    }
}

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fill a rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill paint
        brush: Brush,
    },

    /// Stroke a straight line
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke style
        style: StrokeStyle,
    },

    /// Fill a circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill paint
        brush: Brush,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Anchor position (baseline)
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub fn filled_rect(bounds: Rect, brush: impl Into<Brush>) -> Self {
        Self::Rect {
            bounds,
            brush: brush.into(),
        }
    }

    /// Create a line between two points.
    #[must_use]
    pub const fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Line { from, to, style }
    }

    /// Create a filled circle.
    #[must_use]
    pub fn filled_circle(center: Point, radius: f32, brush: impl Into<Brush>) -> Self {
        Self::Circle {
            center,
            radius,
            brush: brush.into(),
        }
    }

    /// Short name of the primitive, as used in serialized dumps.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Text { .. } => "text",
        }
    }

    /// Move the command by a transform.
    #[must_use]
    pub fn transformed(self, transform: &Transform2D) -> Self {
        match self {
            Self::Rect { bounds, brush } => {
                let origin = transform.apply(bounds.origin());
                Self::Rect {
                    bounds: Rect::new(origin.x, origin.y, bounds.width, bounds.height),
                    brush: transform_brush(brush, transform),
                }
            }
            Self::Line { from, to, mut style } => {
                style.brush = transform_brush(style.brush, transform);
                Self::Line {
                    from: transform.apply(from),
                    to: transform.apply(to),
                    style,
                }
            }
            Self::Circle {
                center,
                radius,
                brush,
            } => Self::Circle {
                center: transform.apply(center),
                radius,
                brush: transform_brush(brush, transform),
            },
            Self::Text {
                content,
                position,
                style,
            } => Self::Text {
                content,
                position: transform.apply(position),
                style,
            },
        }
    }
}

fn transform_brush(brush: Brush, transform: &Transform2D) -> Brush {
    match brush {
        Brush::Solid(_) => brush,
        Brush::Linear(g) => Brush::Linear(LinearGradient {
            start: transform.apply(g.start),
            end: transform.apply(g.end),
            ..g
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Gradient Tests
    // =========================================================================

    #[test]
    fn test_gradient_endpoints() {
        let g = LinearGradient::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Color::BLACK,
            Color::WHITE,
        );
        assert_eq!(g.color_at(0.0), Color::BLACK);
        assert_eq!(g.color_at(1.0), Color::WHITE);
    }

    #[test]
    fn test_gradient_clamps_outside_axis() {
        let g = LinearGradient::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Color::BLACK,
            Color::WHITE,
        );
        assert_eq!(g.color_at_point(Point::new(-50.0, 3.0)), Color::BLACK);
        assert_eq!(g.color_at_point(Point::new(99.0, -3.0)), Color::WHITE);
        let mid = g.color_at_point(Point::new(5.0, 100.0));
        assert!((mid.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_gradient_uses_start_color() {
        let p = Point::new(4.0, 4.0);
        let g = LinearGradient::new(p, p, Color::WHITE, Color::BLACK);
        assert_eq!(g.color_at_point(Point::ORIGIN), Color::WHITE);
    }

    #[test]
    fn test_gradient_alpha_scaled() {
        let g = LinearGradient::new(Point::ORIGIN, Point::ORIGIN, Color::WHITE, Color::BLACK)
            .with_alpha_scaled(0.5);
        assert_eq!(g.start_color.a, 0.5);
        assert_eq!(g.end_color.a, 0.5);
    }

    // =========================================================================
    // Brush / StrokeStyle Tests
    // =========================================================================

    #[test]
    fn test_brush_from_color() {
        let b: Brush = Color::WHITE.into();
        assert_eq!(b, Brush::Solid(Color::WHITE));
        assert_eq!(b.color_at_point(Point::new(3.0, 3.0)), Color::WHITE);
        assert_eq!(Brush::default(), Brush::Solid(Color::BLACK));
    }

    #[test]
    fn test_stroke_style_default() {
        let style = StrokeStyle::default();
        assert_eq!(style.width, 1.0);
        assert!(!style.is_dashed());
    }

    #[test]
    fn test_stroke_style_dashed() {
        let style = StrokeStyle::new(Color::WHITE, 2.0).dashed(&[8.0, 6.0]);
        assert!(style.is_dashed());
        assert_eq!(style.dash, vec![8.0, 6.0]);
        assert_eq!(style.width, 2.0);
    }

    // =========================================================================
    // Transform Tests
    // =========================================================================

    #[test]
    fn test_transform_translate_apply() {
        let t = Transform2D::translate(10.0, 20.0);
        assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(11.0, 21.0));
        assert_eq!(Transform2D::default(), Transform2D::identity());
    }

    #[test]
    fn test_transform_then() {
        let t = Transform2D::translate(1.0, 0.0).then(&Transform2D::translate(0.0, 2.0));
        assert_eq!(t.apply(Point::ORIGIN), Point::new(1.0, 2.0));
    }

    // =========================================================================
    // DrawCommand Tests
    // =========================================================================

    #[test]
    fn test_draw_command_kind() {
        let rect = DrawCommand::filled_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);
        assert_eq!(rect.kind(), "rect");
        let circle = DrawCommand::filled_circle(Point::ORIGIN, 10.0, Color::BLACK);
        assert_eq!(circle.kind(), "circle");
    }

    #[test]
    fn test_draw_command_transformed_moves_gradient() {
        let g = LinearGradient::new(
            Point::ORIGIN,
            Point::new(5.0, 5.0),
            Color::WHITE,
            Color::BLACK,
        );
        let cmd = DrawCommand::filled_circle(Point::new(5.0, 5.0), 10.0, g)
            .transformed(&Transform2D::translate(100.0, 0.0));
        match cmd {
            DrawCommand::Circle { center, brush, .. } => {
                assert_eq!(center, Point::new(105.0, 5.0));
                match brush {
                    Brush::Linear(g) => assert_eq!(g.start, Point::new(100.0, 0.0)),
                    Brush::Solid(_) => panic!("Expected gradient brush"),
                }
            }
            _ => panic!("Expected Circle command"),
        }
    }

    #[test]
    fn test_draw_command_serializes_with_kind_tag() {
        let cmd = DrawCommand::filled_rect(Rect::new(0.0, 0.0, 180.0, 600.0), Color::WHITE);
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["kind"], "rect");
        assert_eq!(json["bounds"]["width"], 180.0);
    }
}
