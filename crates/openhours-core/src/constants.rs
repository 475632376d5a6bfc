/// Configuration sources shared across crates
pub const ENV_PREFIX: &str = "OPENHOURS";
pub const CONFIG_FILE_STEM: &str = "openhours";

pub const DISPLAY_SECTION: &str = "display";
pub const DISPLAY_TIME_FORMAT_KEY: &str = const_str::concat!(DISPLAY_SECTION, ".time_format");
pub const DISPLAY_ALLOW_OVERFLOW_KEY: &str =
    const_str::concat!(DISPLAY_SECTION, ".allow_overflow");
pub const DISPLAY_COLLAPSED_KEY: &str = const_str::concat!(DISPLAY_SECTION, ".collapsed");
pub const DISPLAY_ICON_KEY: &str = const_str::concat!(DISPLAY_SECTION, ".icon");
pub const DISPLAY_TABLE_COLUMN_MODE_KEY: &str =
    const_str::concat!(DISPLAY_SECTION, ".table_column_mode");
pub const DISPLAY_TIMEZONE_KEY: &str = const_str::concat!(DISPLAY_SECTION, ".timezone");

pub const LOGGING_SECTION: &str = "logging";
pub const LOGGING_LEVEL_KEY: &str = const_str::concat!(LOGGING_SECTION, ".level");

/// Display defaults
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";
pub const DEFAULT_ICON: &str = "heroicon-o-clock";
pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Minutes in one day; also the value of `24:00`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;
