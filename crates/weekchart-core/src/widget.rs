//! Widget trait and related types.
//!
//! This module defines the `Canvas` drawing backend and the `Widget` trait
//! that chart views implement.
//!
//! # Widget Lifecycle
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Record the bounds allocated by the host
//! 3. **Paint**: Emit draw calls for the current state into a `Canvas`
//!
//! Paint takes `&self`: repainting never mutates widget state, so a host
//! may repaint as often as it likes.
//!
//! # Examples
//!
//! ```
//! use weekchart_core::{TextAlign, TextStyle, TypeId};
//!
//! let label = TextStyle {
//!     size: 25.0,
//!     align: TextAlign::Right,
//!     ..TextStyle::default()
//! };
//! assert_eq!(label.align, TextAlign::Right);
//! assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
//! ```

use crate::constraints::Constraints;
use crate::draw::{Brush, StrokeStyle, Transform2D};
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Record the bounds allocated by the host.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, brush: Brush);

    /// Stroke a straight line, honoring the style's dash pattern.
    fn stroke_line(&mut self, from: Point, to: Point, style: &StrokeStyle);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush);

    /// Draw text anchored at `position` (baseline), aligned per `style.align`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Push a transform.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the transform.
    fn pop_transform(&mut self);
}

/// Horizontal text alignment relative to the anchor x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Text starts at the anchor
    #[default]
    Left,
    /// Text is centered on the anchor
    Center,
    /// Text ends at the anchor
    Right,
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: crate::Color,
    /// Horizontal alignment
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: crate::Color::BLACK,
            align: TextAlign::Left,
        }
    }
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Image (charts are exposed as images)
    Image,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id() {
        let id1 = TypeId::of::<u32>();
        let id2 = TypeId::of::<u32>();
        let id3 = TypeId::of::<String>();

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.align, TextAlign::Left);
        assert_eq!(style.color, crate::Color::BLACK);
    }

    #[test]
    fn test_text_align_serde_names() {
        let json = serde_json::to_string(&TextAlign::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let back: TextAlign = serde_json::from_str("\"center\"").unwrap();
        assert_eq!(back, TextAlign::Center);
    }

    #[test]
    fn test_accessible_role_default() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Generic);
    }

    #[test]
    fn test_layout_result_default() {
        let result = LayoutResult::default();
        assert_eq!(result.size, Size::new(0.0, 0.0));
    }
}
