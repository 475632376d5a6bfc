use anyhow::Result;
use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_STEM, DEFAULT_ICON, DEFAULT_LOG_LEVEL, DEFAULT_TIME_FORMAT, DEFAULT_TIMEZONE,
    DISPLAY_ALLOW_OVERFLOW_KEY, DISPLAY_COLLAPSED_KEY, DISPLAY_ICON_KEY,
    DISPLAY_TABLE_COLUMN_MODE_KEY, DISPLAY_TIME_FORMAT_KEY, DISPLAY_TIMEZONE_KEY, ENV_PREFIX,
    LOGGING_LEVEL_KEY,
};
use crate::types::DisplayMode;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// chrono format string used for closing times.
    pub time_format: String,
    /// Initial value of the overflow checkbox on new forms.
    pub allow_overflow: bool,
    pub collapsed: bool,
    pub icon: String,
    pub table_column_mode: DisplayMode,
    /// IANA time zone used to compute "now".
    pub timezone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            allow_overflow: true,
            collapsed: true,
            icon: DEFAULT_ICON.to_string(),
            table_column_mode: DisplayMode::Compact,
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `openhours.toml` into a `Settings`.
    ///
    /// Environment variables use the `OPENHOURS_` prefix and `__` between
    /// nested keys, e.g. `OPENHOURS_DISPLAY__TABLE_COLUMN_MODE=status`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_STEM).required(false))
            // Environment
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// Builder holding only the built-in defaults.
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default(DISPLAY_TIME_FORMAT_KEY, DEFAULT_TIME_FORMAT)?
            .set_default(DISPLAY_ALLOW_OVERFLOW_KEY, true)?
            .set_default(DISPLAY_COLLAPSED_KEY, true)?
            .set_default(DISPLAY_ICON_KEY, DEFAULT_ICON)?
            .set_default(
                DISPLAY_TABLE_COLUMN_MODE_KEY,
                DisplayMode::Compact.as_str(),
            )?
            .set_default(DISPLAY_TIMEZONE_KEY, DEFAULT_TIMEZONE)?
            .set_default(LOGGING_LEVEL_KEY, DEFAULT_LOG_LEVEL)?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        mode = %settings.display.table_column_mode,
        timezone = %settings.display.timezone,
        "Configuration loaded"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_defaults() -> Settings {
        Settings::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = from_defaults();
        assert_eq!(settings.display.icon, DEFAULT_ICON);
        assert_eq!(settings.display.time_format, "%H:%M");
        assert!(settings.display.allow_overflow);
        assert!(settings.display.collapsed);
        assert_eq!(settings.display.table_column_mode, DisplayMode::Compact);
    }

    #[test]
    fn test_default_impl_matches_loaded_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.display.timezone, "UTC");
        assert_eq!(settings.logging.level, "info");

        let loaded = from_defaults();
        assert_eq!(loaded.display.timezone, settings.display.timezone);
        assert_eq!(loaded.display.icon, settings.display.icon);
        assert_eq!(loaded.logging.level, settings.logging.level);
    }
}
