//! Viewer settings: time unit of the sheet and takt time.
//!
//! Defaults match the sidebar of the board (seconds, 3.5 min takt, summary
//! shown) and may be overridden by a TOML file:
//!
//! ```toml
//! time_unit = "minutes"
//! takt_minutes = 4.0
//! show_table = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::model::TimeUnit;
use crate::error::ConfigError;

/// File looked up in the working directory by the viewer.
pub const DEFAULT_SETTINGS_FILE: &str = "yamazumi.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Unit of the `Tempo` column.
    pub time_unit: TimeUnit,
    /// Takt time in minutes; 0 disables the takt line and deltas.
    pub takt_minutes: f64,
    /// Show the per-station summary table under the chart.
    pub show_table: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_unit: TimeUnit::Seconds,
            takt_minutes: 3.5,
            show_table: true,
        }
    }
}

impl Settings {
    /// Takt time as the aggregator expects it.
    pub fn takt_seconds(&self) -> f64 {
        self.takt_minutes * 60.0
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Read `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            log::info!("Reading settings from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.takt_minutes < 0.0 || self.takt_minutes.is_nan() {
            return Err(ConfigError::NegativeTakt(self.takt_minutes));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let s = Settings::from_toml("time_unit = \"minutes\"").unwrap();
        assert_eq!(s.time_unit, TimeUnit::Minutes);
        assert_eq!(s.takt_minutes, 3.5);
        assert!(s.show_table);
        assert_eq!(s.takt_seconds(), 210.0);
    }

    #[test]
    fn negative_takt_is_rejected() {
        let err = Settings::from_toml("takt_minutes = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::NegativeTakt(_)));
    }

    #[test]
    fn unknown_unit_fails_to_parse() {
        let err = Settings::from_toml("time_unit = \"hours\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let s = Settings::load_or_default(Path::new("/nonexistent/yamazumi.toml")).unwrap();
        assert_eq!(s, Settings::default());
    }
}
