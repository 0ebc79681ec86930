//! Style files: overrides merged onto the stock style.

use crate::error::ConfigError;
use serde_yaml_ng::Value;
use std::path::Path;
use weekchart_widgets::ChartStyle;

/// Parse a style document.
///
/// Every key is optional. Nested mappings merge key by key onto
/// [`ChartStyle::default`], so `day_labels: { size: 30 }` keeps the other
/// label fields. Sequences (the grid dash) replace wholesale. The result is
/// validated before it is returned.
///
/// # Examples
///
/// ```
/// let style = weekchart_yaml::parse_style("grid: { dash: [4, 4] }").unwrap();
/// assert_eq!(style.grid.dash, vec![4.0, 4.0]);
/// assert_eq!(style.left_panel_width, 180.0);
/// ```
pub fn parse_style(yaml: &str) -> Result<ChartStyle, ConfigError> {
    let overrides: Value = serde_yaml_ng::from_str(yaml)?;
    let overrides = match overrides {
        Value::Null => return Ok(ChartStyle::default()),
        Value::Mapping(_) => overrides,
        _ => return Err(ConfigError::Shape { expected: "a mapping" }),
    };

    let mut merged = serde_yaml_ng::to_value(ChartStyle::default())?;
    merge(&mut merged, overrides);
    let style: ChartStyle = serde_yaml_ng::from_value(merged)?;
    style.validate()?;
    Ok(style)
}

/// Read and parse a style file.
pub fn load_style(path: impl AsRef<Path>) -> Result<ChartStyle, ConfigError> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let style = parse_style(&yaml)?;
    log::debug!("loaded chart style from {}", path.display());
    Ok(style)
}

/// Serialize a style as a complete YAML document.
pub fn style_to_yaml(style: &ChartStyle) -> Result<String, ConfigError> {
    Ok(serde_yaml_ng::to_string(style)?)
}

fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekchart_widgets::LabelStyle;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_style("").unwrap(), ChartStyle::default());
        assert_eq!(parse_style("# nothing\n").unwrap(), ChartStyle::default());
    }

    #[test]
    fn test_partial_label_override_keeps_its_own_defaults() {
        let style = parse_style("category_labels: { size: 30 }").unwrap();
        let defaults = ChartStyle::default();
        assert_eq!(
            style.category_labels,
            LabelStyle {
                size: 30.0,
                ..defaults.category_labels
            }
        );
        assert_eq!(style.day_labels, defaults.day_labels);
    }

    #[test]
    fn test_colors_and_alpha() {
        let yaml = r##"
panel_color: "#101010"
tiers:
  extreme: "#ff00ff"
series:
  halo_alpha: 0.3
"##;
        let style = parse_style(yaml).unwrap();
        assert_eq!(style.panel_color.to_hex(), "#101010");
        assert_eq!(style.tiers.extreme.to_hex(), "#ff00ff");
        assert_eq!(style.tiers.low.to_hex(), "#43e34f");
        assert_eq!(style.series.halo_alpha, 0.3);
    }

    #[test]
    fn test_dash_replaced_not_merged() {
        let style = parse_style("grid: { dash: [] }").unwrap();
        assert!(style.grid.dash.is_empty());
    }

    #[test]
    fn test_bad_color_is_yaml_error() {
        let err = parse_style("panel_color: \"#zz0000\"").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
        assert!(err.to_string().contains("invalid hex characters"));
    }

    #[test]
    fn test_unknown_key_is_yaml_error() {
        let err = parse_style("panel_colour: \"#000000\"").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        let err = parse_style("series: { halo_alpha: 2 }").unwrap_err();
        match err {
            ConfigError::Invalid(invalid) => assert_eq!(invalid.field, "series.halo_alpha"),
            other => panic!("Expected Invalid, got {other}"),
        }
    }

    #[test]
    fn test_non_mapping_root() {
        let err = parse_style("- 1\n- 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::Shape { .. }));
    }

    #[test]
    fn test_round_trip_through_yaml() {
        let mut style = ChartStyle::default();
        style.top_margin = 64.0;
        let yaml = style_to_yaml(&style).unwrap();
        assert_eq!(parse_style(&yaml).unwrap(), style);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_style("/nonexistent/weekchart/style.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
