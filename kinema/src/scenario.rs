//! Scenario configuration.
//!
//! A [`Scenario`] is the distance/duration pair the calculator runs on. The `speed` binary always uses
//! [`Scenario::default`]; the TOML loaders are for library callers.
//!
//! ```toml
//! [distance]
//! value = 12.0
//! unit = "m"
//!
//! [duration]
//! value = 4.0
//! unit = "s"
//! ```

use kinema_core::length::{Meter, Meters};
use kinema_core::time::{Second, Seconds};
use kinema_core::velocity::Velocity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Result, ScenarioError};
use crate::speed::calculate_speed;

/// Distance and duration of one trip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(with = "kinema_core::serde_with_unit")]
    pub distance: Meters,
    #[serde(with = "kinema_core::serde_with_unit")]
    pub duration: Seconds,
}

impl Default for Scenario {
    /// 12 m in 4 s.
    fn default() -> Self {
        Self {
            distance: Meters::new(12.0),
            duration: Seconds::new(4.0),
        }
    }
}

impl Scenario {
    /// Scenario covering `distance` in `duration`.
    pub fn new(distance: Meters, duration: Seconds) -> Self {
        Self { distance, duration }
    }

    /// Parse a scenario from TOML text.
    ///
    /// Both tables are required. A `unit` key is optional, but when present it must be `"m"` for the distance and
    /// `"s"` for the duration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a scenario from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the scenario file
    ///
    /// # Returns
    /// * `Ok(Scenario)` if the file was read and parsed
    /// * `Err(ScenarioError::Io)` if it cannot be read
    /// * `Err(ScenarioError::Parse)` if its content is invalid
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let scenario = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            distance = scenario.distance.value(),
            duration = scenario.duration.value(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// Render back to TOML, in the same layout [`Scenario::from_toml_str`] reads.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Run the speed calculator on this scenario.
    pub fn speed(&self) -> Velocity<Meter, Second> {
        calculate_speed(self.distance, self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_twelve_meters_in_four_seconds() {
        let scenario = Scenario::default();
        assert_eq!(scenario.distance.value(), 12.0);
        assert_eq!(scenario.duration.value(), 4.0);
        assert_eq!(scenario.speed().value(), 3.0);
    }

    #[test]
    fn parse_with_units() {
        let toml = r#"
[distance]
value = 100.0
unit = "m"

[duration]
value = 8.0
unit = "s"
"#;

        let scenario = Scenario::from_toml_str(toml).unwrap();
        assert_eq!(scenario, Scenario::new(Meters::new(100.0), Seconds::new(8.0)));
        assert_eq!(scenario.speed().value(), 12.5);
    }

    #[test]
    fn parse_without_units_and_integer_values() {
        let toml = r#"
distance = { value = 12 }
duration = { value = 4 }
"#;

        let scenario = Scenario::from_toml_str(toml).unwrap();
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn wrong_unit_is_rejected() {
        let toml = r#"
distance = { value = 12.0, unit = "s" }
duration = { value = 4.0, unit = "s" }
"#;

        let err = Scenario::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
        assert!(err.to_string().contains("unit mismatch: expected 'm', found 's'"));
    }

    #[test]
    fn missing_duration_is_rejected() {
        let err = Scenario::from_toml_str("distance = { value = 12.0 }").unwrap_err();
        assert!(err.to_string().contains("duration"));
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let toml = r#"
speed = 9.0
distance = { value = 12.0 }
duration = { value = 4.0 }
"#;

        let err = Scenario::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
        assert!(err.to_string().contains("unknown field `speed`"));
    }

    #[test]
    fn unknown_quantity_key_is_rejected() {
        let toml = r#"
distance = { value = 12.0, foo = 1 }
duration = { value = 4.0 }
"#;

        assert!(Scenario::from_toml_str(toml).is_err());
    }

    #[test]
    fn zero_duration_is_accepted() {
        let toml = r#"
distance = { value = 12.0 }
duration = { value = 0.0 }
"#;

        let scenario = Scenario::from_toml_str(toml).unwrap();
        assert_eq!(scenario.speed().value(), f64::INFINITY);
    }

    #[test]
    fn toml_roundtrip() {
        let original = Scenario::new(Meters::new(42.5), Seconds::new(2.5));
        let text = original.to_toml_string().unwrap();
        assert!(text.contains("unit = \"m\""));
        assert!(text.contains("unit = \"s\""));
        assert_eq!(Scenario::from_toml_str(&text).unwrap(), original);
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "distance = {{ value = 30.0, unit = \"m\" }}").unwrap();
        writeln!(file, "duration = {{ value = 6.0, unit = \"s\" }}").unwrap();

        let scenario = Scenario::from_file(file.path()).unwrap();
        assert_eq!(scenario.speed().value(), 5.0);
    }

    #[test]
    fn from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = Scenario::from_file(&path).unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
