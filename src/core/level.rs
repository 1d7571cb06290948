//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity level, ordered from least to most severe.
///
/// `Fatal` terminates the process after the record is written; `Panic`
/// raises a catchable unwind instead of exiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Panic => "PANIC",
        }
    }

    /// Lowercase name used by the JSON encoding.
    pub fn to_lower_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Panic => "panic",
        }
    }

    /// Resolve a configuration-supplied level name.
    ///
    /// Unrecognized or empty input resolves to `Info` rather than erroring;
    /// misconfiguration must never keep the process from logging.
    pub fn from_env_str(s: &str) -> Self {
        s.parse().unwrap_or(Level::Info)
    }

    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            0 => Level::Debug,
            1 => Level::Info,
            2 => Level::Warn,
            3 => Level::Error,
            4 => Level::Fatal,
            _ => Level::Panic,
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
            Level::Fatal => BrightRed,
            Level::Panic => Magenta,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "PANIC" => Ok(Level::Panic),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
        assert!(Level::Fatal < Level::Panic);
    }

    #[test]
    fn test_level_parse_case_insensitive() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("fAtAl".parse::<Level>().unwrap(), Level::Fatal);
    }

    #[test]
    fn test_level_env_defaults_to_info() {
        assert_eq!(Level::from_env_str(""), Level::Info);
        assert_eq!(Level::from_env_str("verbose"), Level::Info);
        assert_eq!(Level::from_env_str("ERROR"), Level::Error);
    }

    #[test]
    fn test_level_u8_roundtrip() {
        for level in [
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Fatal,
            Level::Panic,
        ] {
            assert_eq!(Level::from_u8(level as u8), level);
        }
    }
}
