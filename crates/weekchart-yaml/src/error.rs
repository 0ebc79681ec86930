//! Error types for configuration loading.

use std::path::PathBuf;
use thiserror::Error;
use weekchart_widgets::InvalidStyle;

/// Error type for style and entry files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML syntax or shape error (bad colors and unknown keys land here)
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Well-formed value outside its allowed range
    #[error(transparent)]
    Invalid(#[from] InvalidStyle),

    /// Top-level document is not the expected shape
    #[error("expected {expected} at document root")]
    Shape {
        /// What the root should have been
        expected: &'static str,
    },

    /// File could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}
