//! # ctxlog
//!
//! Structured logging with hierarchical, immutable contexts, field
//! deduplication, dynamic severity filtering, and pluggable output
//! encoding.
//!
//! ## Features
//!
//! - **Hierarchical Contexts**: `with()` derives child loggers whose
//!   fields override inherited ones by key, without mutating the parent
//! - **Shared Severity**: one atomic threshold per logger lineage,
//!   adjustable at runtime from any descendant
//! - **Two Encodings**: machine-readable JSON (default) or a colorized
//!   console format, selected once at startup
//! - **Thread Safe**: contexts are immutable; the sink serializes writes
//!
//! ## Example
//!
//! ```
//! use ctxlog::{field, Config, Logger};
//! use ctxlog::output::MemorySink;
//! use std::sync::Arc;
//!
//! let logger = Logger::with_config(Config::default(), Arc::new(MemorySink::new()));
//! let request_log = logger.with([field::string("request_id", "abc-123")]);
//! request_log.info("request accepted", &[field::int64("bytes", 512)]);
//! ```

pub mod config;
pub mod core;
pub mod global;
pub mod macros;
pub mod output;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::core::{field, Context, Field, FieldValue, Level, Logger, LoggerError, Result, Threshold};
    pub use crate::output::{Caller, Emitter, EmitterOptions, Encoding, MemorySink, Record, Sink, StdoutSink};
}

pub use config::Config;
pub use core::field;
pub use core::{Context, Field, FieldValue, Level, Logger, LoggerError, Result, Threshold};
pub use output::{Caller, Emitter, EmitterOptions, Encoding, MemorySink, Record, Sink, StdoutSink};
