//! TOML configuration.
//!
//! Read from `~/.config/kerbside/config.toml` (or the platform equivalent)
//! unless a path is given explicitly. Every key is optional:
//!
//! ```toml
//! [schedule]
//! fortnightly_reference_date = "2025-01-09"
//! cache_capacity = 4
//!
//! [display]
//! location = "Tredynog (Tredunnock)"
//! calendar_months = 3
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::cache::{BoundedYearCache, UnboundedYearCache};
use crate::ports::YearTableCache;
use crate::rules::{CollectionRules, FORTNIGHTLY_REFERENCE_DATE};
use crate::service::ScheduleService;

const APP_DIR: &str = "kerbside";
const CONFIG_FILE: &str = "config.toml";

#[derive(thiserror::Error, Debug)]
/// Errors raised while loading or validating the configuration.
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// Fortnightly cycles must be anchored on a Thursday.
    #[error("Fortnightly reference date {0} is not a Thursday")]
    ReferenceNotThursday(NaiveDate),
    /// Month count outside the supported range.
    #[error("calendar_months must be between 1 and 12, got {0}")]
    CalendarMonths(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Schedule rule settings.
pub struct ScheduleConfig {
    /// Thursday every fortnightly collection is counted from.
    #[serde(default = "default_reference_date")]
    pub fortnightly_reference_date: NaiveDate,
    /// Number of year tables kept in memory; unbounded when absent.
    #[serde(default)]
    pub cache_capacity: Option<usize>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            fortnightly_reference_date: default_reference_date(),
            cache_capacity: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Presentation settings.
pub struct DisplayConfig {
    /// Area name shown under the title.
    #[serde(default = "default_location")]
    pub location: String,
    /// Months shown side by side in the calendar view.
    #[serde(default = "default_calendar_months")]
    pub calendar_months: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            calendar_months: default_calendar_months(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Complete application configuration.
pub struct Config {
    /// Collection rule settings.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Presentation settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Platform default location of the configuration file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed input and the validation
    /// errors of [`Config::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
    /// errors of [`Config::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load the platform default file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Config::load`] for an existing but unreadable or invalid file.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReferenceNotThursday`] or [`ConfigError::CalendarMonths`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reference = self.schedule.fortnightly_reference_date;
        if reference.weekday() != Weekday::Thu {
            return Err(ConfigError::ReferenceNotThursday(reference));
        }
        if !(1..=12).contains(&self.display.calendar_months) {
            return Err(ConfigError::CalendarMonths(self.display.calendar_months));
        }
        Ok(())
    }

    /// Collection rules described by this configuration.
    #[must_use]
    pub fn rules(&self) -> CollectionRules {
        CollectionRules::new(self.schedule.fortnightly_reference_date)
    }

    /// Year table cache sized by this configuration.
    #[must_use]
    pub fn cache(&self) -> Arc<dyn YearTableCache> {
        match self.schedule.cache_capacity {
            Some(capacity) => Arc::new(BoundedYearCache::new(capacity)),
            None => Arc::new(UnboundedYearCache::new()),
        }
    }

    /// Schedule service wired with [`Config::rules`] and [`Config::cache`].
    #[must_use]
    pub fn service(&self) -> ScheduleService {
        ScheduleService::new(self.rules(), self.cache())
    }
}

fn default_reference_date() -> NaiveDate {
    FORTNIGHTLY_REFERENCE_DATE
}

fn default_location() -> String {
    String::from("Tredynog (Tredunnock)")
}

fn default_calendar_months() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").expect("empty config is valid");
        assert_eq!(config, Config::default(), "all defaults");
        assert_eq!(
            config.rules().reference_date(),
            FORTNIGHTLY_REFERENCE_DATE,
            "default anchor"
        );
        assert_eq!(config.display.calendar_months, 3, "three months");
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_toml_str(
            r#"
            [schedule]
            fortnightly_reference_date = "2025-01-16"
            cache_capacity = 2

            [display]
            location = "Llanhennock"
            calendar_months = 6
            "#,
        )
        .expect("valid config");

        assert_eq!(
            config.schedule.fortnightly_reference_date,
            NaiveDate::from_ymd_opt(2025, 1, 16).expect("valid date"),
            "anchor override"
        );
        assert_eq!(config.schedule.cache_capacity, Some(2), "bounded cache");
        assert_eq!(config.display.location, "Llanhennock", "location override");
        assert_eq!(config.display.calendar_months, 6, "month override");
    }

    #[test]
    fn non_thursday_reference_is_rejected() {
        let result = Config::from_toml_str(
            r#"
            [schedule]
            fortnightly_reference_date = "2025-01-10"
            "#,
        );
        assert!(
            matches!(result, Err(ConfigError::ReferenceNotThursday(_))),
            "Friday anchor rejected"
        );
    }

    #[test]
    fn month_count_is_bounded() {
        let result = Config::from_toml_str("[display]\ncalendar_months = 0\n");
        assert!(
            matches!(result, Err(ConfigError::CalendarMonths(0))),
            "zero months rejected"
        );
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::from_toml_str("[schedule\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))), "parse error");
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let result = Config::load(Path::new("/nonexistent/kerbside/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })), "io error");
    }
}
