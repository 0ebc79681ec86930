//! Entry lists as YAML sequences.

use crate::error::ConfigError;
use serde_yaml_ng::Value;
use std::path::Path;
use weekchart_widgets::ChartEntry;

/// Parse a sequence of `{ x_index, y_value, label? }` mappings.
///
/// JSON is valid YAML, so JSON entry files parse too.
pub fn parse_entries(yaml: &str) -> Result<Vec<ChartEntry>, ConfigError> {
    let doc: Value = serde_yaml_ng::from_str(yaml)?;
    match doc {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(_) => Ok(serde_yaml_ng::from_value(doc)?),
        _ => Err(ConfigError::Shape {
            expected: "a sequence of entries",
        }),
    }
}

/// Read and parse an entry file.
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<ChartEntry>, ConfigError> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_entries(&yaml)?;
    log::debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Serialize entries as a YAML sequence.
pub fn entries_to_yaml(entries: &[ChartEntry]) -> Result<String, ConfigError> {
    Ok(serde_yaml_ng::to_string(entries)?)
}
