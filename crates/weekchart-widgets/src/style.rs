//! Drawing-style configuration for [`WeeklyChart`](crate::WeeklyChart).
//!
//! Every field has a default reproducing the stock dark look. Structs with a
//! single default are `#[serde(default)]`; the two label blocks share a type
//! but not defaults, so `weekchart-yaml` merges overrides onto
//! `ChartStyle::default()` rather than relying on field defaults.

use crate::entry::Tier;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use weekchart_core::{Color, TextAlign, TextStyle};

/// A style value outside its allowed range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for '{field}': {message}")]
pub struct InvalidStyle {
    /// Dotted path of the offending field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

impl InvalidStyle {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Solid stroke: color and width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x93, 0x93, 0x93),
            width: 2.0,
        }
    }
}

/// Dashed grid stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Alternating dash/gap lengths
    pub dash: Vec<f32>,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x3D, 0x3D, 0x3D),
            width: 2.0,
            dash: vec![8.0, 6.0],
        }
    }
}

/// Axis label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelStyle {
    /// Text color
    pub color: Color,
    /// Font size in pixels
    pub size: f32,
    /// Alignment relative to the anchor
    pub align: TextAlign,
    /// Distance the anchor sits left of its reference x
    pub offset: f32,
}

impl LabelStyle {
    /// Text style for the canvas.
    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            size: self.size,
            color: self.color,
            align: self.align,
            ..TextStyle::default()
        }
    }

    fn day_defaults() -> Self {
        Self {
            color: Color::WHITE,
            size: 25.0,
            align: TextAlign::Left,
            offset: 25.0,
        }
    }

    fn category_defaults() -> Self {
        Self {
            color: Color::from_rgb8(0x7E, 0x7E, 0x7E),
            size: 25.0,
            align: TextAlign::Right,
            offset: 20.0,
        }
    }
}

/// Data series look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeriesStyle {
    /// Connecting segment width
    pub line_width: f32,
    /// Solid marker radius
    pub point_radius: f32,
    /// Halo radius
    pub halo_radius: f32,
    /// Alpha fraction applied to halo colors
    pub halo_alpha: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            line_width: 3.0,
            point_radius: 10.0,
            halo_radius: 20.0,
            halo_alpha: 0.5,
        }
    }
}

/// One color per tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TierPalette {
    /// Color for [`Tier::Low`]
    pub low: Color,
    /// Color for [`Tier::Moderate`]
    pub moderate: Color,
    /// Color for [`Tier::High`]
    pub high: Color,
    /// Color for [`Tier::VeryHigh`]
    pub very_high: Color,
    /// Color for [`Tier::Extreme`]
    pub extreme: Color,
}

impl TierPalette {
    /// Color of one tier.
    #[must_use]
    pub const fn color(&self, tier: Tier) -> Color {
        match tier {
            Tier::Low => self.low,
            Tier::Moderate => self.moderate,
            Tier::High => self.high,
            Tier::VeryHigh => self.very_high,
            Tier::Extreme => self.extreme,
        }
    }
}

impl Default for TierPalette {
    fn default() -> Self {
        Self {
            low: Color::from_rgb8(0x43, 0xE3, 0x4F),
            moderate: Color::from_rgb8(0xF5, 0xDC, 0x4E),
            high: Color::from_rgb8(0xFE, 0x76, 0x50),
            very_high: Color::from_rgb8(0xF6, 0x38, 0x38),
            extreme: Color::from_rgb8(0x89, 0x53, 0xF1),
        }
    }
}

/// Full chart style. Fixed once a chart is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    /// Fill of the left label panel
    pub panel_color: Color,
    /// Bottom edge line
    pub baseline: LineStyle,
    /// Dashed grid
    pub grid: GridStyle,
    /// Weekday labels
    pub day_labels: LabelStyle,
    /// Category labels
    pub category_labels: LabelStyle,
    /// Data series
    pub series: SeriesStyle,
    /// Tier colors
    pub tiers: TierPalette,
    /// Color for values that sit on no tier
    pub untiered_color: Color,
    /// Gap above the plot area
    pub top_margin: f32,
    /// Width of the label panel
    pub left_panel_width: f32,
    /// Value plotted at the top margin
    pub max_value: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            panel_color: Color::from_rgb8(0x22, 0x22, 0x22),
            baseline: LineStyle::default(),
            grid: GridStyle::default(),
            day_labels: LabelStyle::day_defaults(),
            category_labels: LabelStyle::category_defaults(),
            series: SeriesStyle::default(),
            tiers: TierPalette::default(),
            untiered_color: Color::BLACK,
            top_margin: 80.0,
            left_panel_width: 180.0,
            max_value: 10.0,
        }
    }
}

impl ChartStyle {
    /// Color for a raw value: its tier color, or the untiered color.
    #[must_use]
    pub fn color_for(&self, value: f32) -> Color {
        self.tier_color(Tier::from_value(value))
    }

    /// Color for an optional tier.
    #[must_use]
    pub const fn tier_color(&self, tier: Option<Tier>) -> Color {
        match tier {
            Some(tier) => self.tiers.color(tier),
            None => self.untiered_color,
        }
    }

    /// Check every numeric field against its allowed range.
    pub fn validate(&self) -> Result<(), InvalidStyle> {
        positive("baseline.width", self.baseline.width)?;
        positive("grid.width", self.grid.width)?;
        if self.grid.dash.len() % 2 != 0 {
            return Err(InvalidStyle::new(
                "grid.dash",
                format!("needs dash/gap pairs, got {} values", self.grid.dash.len()),
            ));
        }
        if let Some(bad) = self.grid.dash.iter().find(|d| !(d.is_finite() && **d > 0.0)) {
            return Err(InvalidStyle::new(
                "grid.dash",
                format!("segment lengths must be positive, got {bad}"),
            ));
        }
        positive("day_labels.size", self.day_labels.size)?;
        positive("category_labels.size", self.category_labels.size)?;
        positive("series.line_width", self.series.line_width)?;
        positive("series.point_radius", self.series.point_radius)?;
        positive("series.halo_radius", self.series.halo_radius)?;
        if !(0.0..=1.0).contains(&self.series.halo_alpha) {
            return Err(InvalidStyle::new(
                "series.halo_alpha",
                format!("must be within [0, 1], got {}", self.series.halo_alpha),
            ));
        }
        non_negative("top_margin", self.top_margin)?;
        non_negative("left_panel_width", self.left_panel_width)?;
        positive("max_value", self.max_value)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), InvalidStyle> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidStyle::new(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), InvalidStyle> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InvalidStyle::new(
            field,
            format!("must be zero or more, got {value}"),
        ))
    }
}
