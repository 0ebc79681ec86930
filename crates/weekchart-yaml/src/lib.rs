//! YAML configuration for the weekly gradient chart.
//!
//! Style files override [`ChartStyle`](weekchart_widgets::ChartStyle)
//! defaults key by key; entry files list the samples to plot.
//!
//! ```yaml
//! panel_color: "#222222"
//! grid: { color: "#3D3D3D", width: 2, dash: [8, 6] }
//! series: { halo_alpha: 0.5 }
//! tiers: { low: "#43E34F", extreme: "#8953F1" }
//! ```

mod entries;
mod error;
mod style;

pub use entries::{entries_to_yaml, load_entries, parse_entries};
pub use error::ConfigError;
pub use style::{load_style, parse_style, style_to_yaml};
