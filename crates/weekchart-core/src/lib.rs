//! Core types and traits for the weekly gradient chart.
//!
//! This crate provides the drawing backend the chart widget paints into:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex parsing
//! - Paint: [`Brush`], [`LinearGradient`], [`StrokeStyle`], [`TextStyle`]
//! - The [`Canvas`] and [`Widget`] traits, and a [`RecordingCanvas`]

mod canvas;
mod color;
mod constraints;
pub mod draw;
mod geometry;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{Brush, DrawCommand, LinearGradient, StrokeStyle, Transform2D};
pub use geometry::{Point, Rect, Size};
pub use widget::{AccessibleRole, Canvas, LayoutResult, TextAlign, TextStyle, TypeId, Widget};
