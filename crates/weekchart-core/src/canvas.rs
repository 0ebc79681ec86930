//! Canvas implementations for rendering.

use crate::draw::{Brush, DrawCommand, StrokeStyle, Transform2D};
use crate::widget::{Canvas, TextStyle};
use crate::{Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (dump the draw list as JSON)
/// - Diffing (compare render outputs)
///
/// Pushed transforms are baked into the recorded coordinates.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform2D>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Count recorded commands of one kind (`"rect"`, `"line"`, `"circle"`, `"text"`).
    #[must_use]
    pub fn count_kind(&self, kind: &str) -> usize {
        self.commands.iter().filter(|c| c.kind() == kind).count()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    fn record(&mut self, command: DrawCommand) {
        let command = match self.transform_stack.last() {
            Some(transform) => command.transformed(transform),
            None => command,
        };
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, brush: Brush) {
        self.record(DrawCommand::filled_rect(rect, brush));
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        self.record(DrawCommand::line(from, to, style.clone()));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush) {
        self.record(DrawCommand::filled_circle(center, radius, brush));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn push_transform(&mut self, transform: Transform2D) {
        let composed = transform.then(&self.current_transform());
        self.transform_stack.push(composed);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }
}
