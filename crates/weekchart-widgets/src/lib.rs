//! Weekly gradient line chart widget.
//!
//! Seven daily samples plotted against a five-tier scale ("Low" to
//! "Extreme"), drawn as a gradient-colored line with haloed markers over a
//! dashed grid, with a dark label panel on the left.

mod entry;
mod layout;
mod style;
mod weekly_chart;

pub use entry::{sample_week, ChartEntry, Tier};
pub use layout::{ChartGeometry, COLUMNS, ROWS};
pub use style::{
    ChartStyle, GridStyle, InvalidStyle, LabelStyle, LineStyle, SeriesStyle, TierPalette,
};
pub use weekly_chart::{WeeklyChart, DAY_LABELS};
