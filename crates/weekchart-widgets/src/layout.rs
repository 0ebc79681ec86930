//! Pixel geometry of the weekly grid.

use crate::style::ChartStyle;
use weekchart_core::{Point, Rect, Size};

/// Number of weekday columns.
pub const COLUMNS: usize = 7;

/// Number of category rows.
pub const ROWS: usize = 5;

/// Column and row positions for one surface size.
///
/// Degenerate sizes (zero or negative) produce degenerate but finite
/// geometry; the divisors are the fixed column and row counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    /// Surface size
    pub size: Size,
    /// Width of the label panel
    pub left: f32,
    /// Gap above the plot area
    pub top: f32,
    /// Value plotted at `top`
    pub max_value: f32,
    /// Width of one weekday column
    pub column_width: f32,
    /// Height of one category row
    pub row_height: f32,
}

impl ChartGeometry {
    /// Compute the geometry for a surface of `size`.
    #[must_use]
    pub fn new(size: Size, style: &ChartStyle) -> Self {
        let left = style.left_panel_width;
        let top = style.top_margin;
        Self {
            size,
            left,
            top,
            max_value: style.max_value,
            column_width: (size.width - left) / COLUMNS as f32,
            row_height: (size.height - top) / ROWS as f32,
        }
    }

    /// Center x of column `index`.
    #[must_use]
    pub fn column_center(&self, index: usize) -> f32 {
        self.left + self.column_width * index as f32 + self.column_width / 2.0
    }

    /// Top y of row `index` (row 0 sits on the top margin).
    #[must_use]
    pub fn row_y(&self, index: usize) -> f32 {
        index as f32 * self.row_height + self.top
    }

    /// Pixel y of a value; larger values plot higher.
    #[must_use]
    pub fn value_y(&self, value: f32) -> f32 {
        self.size.height - (value / self.max_value) * (self.size.height - self.top)
    }

    /// Pixel position of a value in column `index`.
    #[must_use]
    pub fn point(&self, index: usize, value: f32) -> Point {
        Point::new(self.column_center(index), self.value_y(value))
    }

    /// The label panel on the left.
    #[must_use]
    pub fn panel(&self) -> Rect {
        Rect::new(0.0, 0.0, self.left, self.size.height)
    }

    /// Plot area right of the panel and below the top margin.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        Rect::from_points(
            Point::new(self.left, self.top),
            Point::new(self.size.width, self.size.height),
        )
    }
}
