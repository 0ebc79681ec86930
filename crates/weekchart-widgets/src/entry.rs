//! Chart samples and the five-tier value scale.

use serde::{Deserialize, Serialize};

/// One plotted sample.
///
/// Entries are plain values: the host builds a whole sequence and hands it
/// to [`WeeklyChart::submit`](crate::WeeklyChart::submit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    /// Weekday ordinal (0 = Sunday). Carried for the caller; columns follow
    /// sequence position.
    pub x_index: u8,
    /// Magnitude on the 2/4/6/8/10 scale
    pub y_value: f32,
    /// Free-form caller label, not rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ChartEntry {
    /// Create an unlabeled entry.
    #[must_use]
    pub const fn new(x_index: u8, y_value: f32) -> Self {
        Self {
            x_index,
            y_value,
            label: None,
        }
    }

    /// Attach a caller label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Tier of this entry's value, if it sits exactly on one.
    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        Tier::from_value(self.y_value)
    }
}

/// One of the five discrete value buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Value 2
    Low,
    /// Value 4
    Moderate,
    /// Value 6
    High,
    /// Value 8
    VeryHigh,
    /// Value 10
    Extreme,
}

impl Tier {
    /// All tiers, top of the chart first.
    pub const DESCENDING: [Self; 5] = [
        Self::Extreme,
        Self::VeryHigh,
        Self::High,
        Self::Moderate,
        Self::Low,
    ];

    /// Map a value onto its tier.
    ///
    /// Only the integral values 2, 4, 6, 8 and 10 have a tier. Fractional,
    /// non-finite or other values return `None`.
    #[must_use]
    pub fn from_value(value: f32) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        match value as i64 {
            2 => Some(Self::Low),
            4 => Some(Self::Moderate),
            6 => Some(Self::High),
            8 => Some(Self::VeryHigh),
            10 => Some(Self::Extreme),
            _ => None,
        }
    }

    /// Scale value of this tier.
    #[must_use]
    pub const fn value(self) -> f32 {
        match self {
            Self::Low => 2.0,
            Self::Moderate => 4.0,
            Self::High => 6.0,
            Self::VeryHigh => 8.0,
            Self::Extreme => 10.0,
        }
    }

    /// Category label drawn in the panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The demo week: Tue-Fri low, a high start, a very high Saturday.
#[must_use]
pub fn sample_week() -> Vec<ChartEntry> {
    [6.0, 6.0, 2.0, 2.0, 2.0, 2.0, 8.0]
        .into_iter()
        .zip(0u8..)
        .map(|(y, x)| ChartEntry::new(x, y))
        .collect()
}
