//! Record passed from the logger to the encoder

use crate::core::field::Field;
use crate::core::level::Level;
use chrono::{DateTime, Utc};
use std::fmt;
use std::panic::Location;

/// Source location a record is attributed to.
///
/// Captured via `#[track_caller]` at the logging call site, so wrapper
/// layers annotated the same way are transparent to attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    file: &'static str,
    line: u32,
}

impl Caller {
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for Caller {
    fn from(loc: &'static Location<'static>) -> Self {
        Self {
            file: loc.file(),
            line: loc.line(),
        }
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One fully merged log record, ready for encoding.
///
/// Borrows the message and merged fields; records are encoded and written
/// in the same call, never stored.
#[derive(Debug)]
pub struct Record<'a> {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub caller: Option<Caller>,
    pub msg: &'a str,
    pub fields: &'a [Field],
}

impl<'a> Record<'a> {
    pub fn new(level: Level, msg: &'a str, fields: &'a [Field], caller: Option<Caller>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            caller,
            msg,
            fields,
        }
    }
}
