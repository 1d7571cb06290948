//! Process-scoped default logger
//!
//! A single root logger constructed once and reached through an explicit
//! accessor. Every wrapper here is `#[track_caller]`, so records are
//! attributed to the user's call site, not to this module.

use crate::core::field::Field;
use crate::core::level::Level;
use crate::core::logger::Logger;
use std::panic::Location;
use std::sync::OnceLock;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Install a custom default logger. Returns `false` if one was already
/// installed (including implicitly via [`logger`]).
pub fn init(logger: Logger) -> bool {
    DEFAULT.set(logger).is_ok()
}

/// The process-wide default logger, constructed from the environment on
/// first use.
pub fn logger() -> &'static Logger {
    DEFAULT.get_or_init(Logger::new)
}

/// Derive a child of the default logger with extra context fields.
pub fn with(fields: impl IntoIterator<Item = Field>) -> Logger {
    logger().with(fields)
}

#[track_caller]
pub fn log(level: Level, msg: &str, fields: &[Field]) {
    logger().log_at(level, msg, fields, Location::caller());
}

#[track_caller]
pub fn debug(msg: &str, fields: &[Field]) {
    logger().log_at(Level::Debug, msg, fields, Location::caller());
}

#[track_caller]
pub fn info(msg: &str, fields: &[Field]) {
    logger().log_at(Level::Info, msg, fields, Location::caller());
}

#[track_caller]
pub fn warn(msg: &str, fields: &[Field]) {
    logger().log_at(Level::Warn, msg, fields, Location::caller());
}

#[track_caller]
pub fn error(msg: &str, fields: &[Field]) {
    logger().log_at(Level::Error, msg, fields, Location::caller());
}

/// Log at fatal level on the default logger, then terminate the process.
#[track_caller]
pub fn fatal(msg: &str, fields: &[Field]) -> ! {
    logger().log_at(Level::Fatal, msg, fields, Location::caller());
    std::process::exit(1)
}
