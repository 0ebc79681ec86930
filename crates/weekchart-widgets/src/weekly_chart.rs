//! `WeeklyChart` widget: seven tiered samples over a dashed grid.

use crate::entry::{ChartEntry, Tier};
use crate::layout::{ChartGeometry, COLUMNS, ROWS};
use crate::style::ChartStyle;
use weekchart_core::{
    widget::{AccessibleRole, LayoutResult},
    Brush, Canvas, Color, Constraints, LinearGradient, Point, Rect, Size, StrokeStyle,
    Transform2D, TypeId, Widget,
};

/// Weekday column labels, Sunday first.
pub const DAY_LABELS: [&str; COLUMNS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DEFAULT_WIDTH: f32 = 800.0;
const DEFAULT_HEIGHT: f32 = 600.0;

/// Weekly gradient line chart.
///
/// The host drives it through two calls: [`submit`](Self::submit) replaces
/// the entries and flags the widget for repaint, and
/// [`render`](Self::render) draws the current entries into a canvas of a
/// given size without touching widget state.
///
/// # Examples
///
/// ```
/// use weekchart_core::{RecordingCanvas, Size};
/// use weekchart_widgets::{sample_week, WeeklyChart};
///
/// let mut chart = WeeklyChart::new();
/// chart.submit(sample_week());
/// assert!(chart.needs_paint());
///
/// let mut canvas = RecordingCanvas::new();
/// chart.render(&mut canvas, Size::new(800.0, 600.0));
/// chart.mark_painted();
/// assert_eq!(canvas.count_kind("circle"), 14);
/// ```
#[derive(Debug, Clone)]
pub struct WeeklyChart {
    entries: Vec<ChartEntry>,
    style: ChartStyle,
    needs_paint: bool,
    width: Option<f32>,
    height: Option<f32>,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
    bounds: Rect,
}

impl Default for WeeklyChart {
    fn default() -> Self {
        Self::with_style(ChartStyle::default())
    }
}

impl WeeklyChart {
    /// Create an empty chart with the stock style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty chart with a custom style.
    #[must_use]
    pub fn with_style(style: ChartStyle) -> Self {
        Self {
            entries: Vec::new(),
            style,
            needs_paint: true,
            width: None,
            height: None,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set preferred width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width.max(0.0));
        self
    }

    /// Set preferred height.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height.max(0.0));
        self
    }

    /// Set accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Replace the entry sequence and request a repaint.
    ///
    /// Any sequence is accepted. Only the first seven entries are plotted.
    pub fn submit(&mut self, entries: impl Into<Vec<ChartEntry>>) {
        self.entries = entries.into();
        if self.entries.len() > COLUMNS {
            log::warn!(
                "weekly chart got {} entries, plotting the first {COLUMNS}",
                self.entries.len()
            );
        }
        log::debug!("weekly chart submitted {} entries", self.entries.len());
        self.needs_paint = true;
    }

    /// All submitted entries.
    #[must_use]
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    /// Entries that get a column.
    #[must_use]
    pub fn plotted_entries(&self) -> &[ChartEntry] {
        &self.entries[..self.entries.len().min(COLUMNS)]
    }

    /// The fixed drawing style.
    #[must_use]
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Whether state changed since the last [`mark_painted`](Self::mark_painted).
    #[must_use]
    pub const fn needs_paint(&self) -> bool {
        self.needs_paint
    }

    /// Acknowledge the pending repaint.
    pub fn mark_painted(&mut self) {
        self.needs_paint = false;
    }

    /// Draw the chart into a surface of `size`, origin at the top-left.
    ///
    /// Order: panel, baseline, grid, day labels, category labels, series.
    pub fn render(&self, canvas: &mut dyn Canvas, size: Size) {
        let geometry = ChartGeometry::new(size, &self.style);
        self.paint_panel(canvas, &geometry);
        self.paint_baseline(canvas, &geometry);
        self.paint_grid(canvas, &geometry);
        self.paint_day_labels(canvas, &geometry);
        self.paint_category_labels(canvas, &geometry);
        self.paint_series(canvas, &geometry);
    }

    fn paint_panel(&self, canvas: &mut dyn Canvas, geometry: &ChartGeometry) {
        canvas.fill_rect(geometry.panel(), Brush::Solid(self.style.panel_color));
    }

    fn paint_baseline(&self, canvas: &mut dyn Canvas, geometry: &ChartGeometry) {
        let y = geometry.size.height;
        let style = StrokeStyle::new(self.style.baseline.color, self.style.baseline.width);
        canvas.stroke_line(
            Point::new(0.0, y),
            Point::new(geometry.size.width, y),
            &style,
        );
    }

    fn paint_grid(&self, canvas: &mut dyn Canvas, geometry: &ChartGeometry) {
        let grid = &self.style.grid;
        let style = StrokeStyle::new(grid.color, grid.width).dashed(&grid.dash);
        let plot = geometry.plot_area();

        for column in 0..COLUMNS {
            let x = geometry.column_center(column);
            canvas.stroke_line(
                Point::new(x, plot.y),
                Point::new(x, geometry.size.height),
                &style,
            );
        }

        for row in 0..ROWS {
            let y = geometry.row_y(row);
            canvas.stroke_line(
                Point::new(plot.x, y),
                Point::new(geometry.size.width, y),
                &style,
            );
        }
    }

    fn paint_day_labels(&self, canvas: &mut dyn Canvas, geometry: &ChartGeometry) {
        let labels = &self.style.day_labels;
        let text_style = labels.text_style();
        let y = (geometry.top + labels.size) / 2.0;

        for (column, day) in DAY_LABELS.iter().enumerate() {
            let x = geometry.column_center(column) - labels.offset;
            canvas.draw_text(day, Point::new(x, y), &text_style);
        }
    }

    fn paint_category_labels(&self, canvas: &mut dyn Canvas, geometry: &ChartGeometry) {
        let labels = &self.style.category_labels;
        let text_style = labels.text_style();
        let x = geometry.left - labels.offset;

        for (row, tier) in Tier::DESCENDING.iter().enumerate() {
            let y = geometry.row_y(row) + labels.size / 3.0;
            canvas.draw_text(tier.label(), Point::new(x, y), &text_style);
        }
    }

    fn paint_series(&self, canvas: &mut dyn Canvas, geometry: &ChartGeometry) {
        let entries = self.plotted_entries();
        if entries.is_empty() {
            return;
        }

        let series = &self.style.series;
        // The first point has no predecessor: its gradient starts at the
        // surface origin and uses its own color at both ends.
        let mut previous: Option<(Point, Color)> = None;

        for (column, entry) in entries.iter().enumerate() {
            let point = geometry.point(column, entry.y_value);
            let color = self.style.color_for(entry.y_value);
            let (from, from_color) = previous.unwrap_or((Point::ORIGIN, color));
            let gradient = LinearGradient::new(from, point, from_color, color);

            if previous.is_some() {
                canvas.stroke_line(
                    from,
                    point,
                    &StrokeStyle::new(gradient, series.line_width),
                );
            }
            canvas.fill_circle(
                point,
                series.halo_radius,
                Brush::Linear(gradient.with_alpha_scaled(series.halo_alpha)),
            );
            canvas.fill_circle(point, series.point_radius, Brush::Linear(gradient));

            previous = Some((point, color));
        }
    }
}

impl Widget for WeeklyChart {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = self.width.unwrap_or(DEFAULT_WIDTH);
        let height = self.height.unwrap_or(DEFAULT_HEIGHT);
        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let origin = self.bounds.origin();
        canvas.push_transform(Transform2D::translate(origin.x, origin.y));
        self.render(canvas, self.bounds.size());
        canvas.pop_transform();
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Image // Charts are treated as images for accessibility
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
