//! Error types for kinema

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scenario loading
pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Errors that can occur while loading a [`crate::Scenario`]
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// The scenario file could not be read
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML, a missing field, or a unit symbol that does not match the field's unit
    #[error("Invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),
}
