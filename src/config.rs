//! Startup configuration
//!
//! Read once when a root logger is constructed. Unrecognized values
//! resolve silently to defaults; configuration can never fail.

use crate::core::level::Level;
use crate::output::Encoding;

/// Environment variable naming the minimum severity (`DEBUG`..`FATAL`,
/// case-insensitive).
pub const LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable selecting the encoding (`console` for the human
/// format; anything else is JSON).
pub const FORMAT_ENV: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub level: Level,
    pub encoding: Encoding,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            level: Level::from_env_str(&std::env::var(LEVEL_ENV).unwrap_or_default()),
            encoding: Encoding::from_format_str(&std::env::var(FORMAT_ENV).unwrap_or_default()),
        }
    }
}
