//! Record emitter
//!
//! Formats a leveled message plus merged fields through the configured
//! encoding and writes the result to the sink. The encoding is fixed for
//! the emitter's lifetime; only caller capture is adjustable per logger.

use super::encoding::Encoding;
use super::record::{Caller, Record};
use super::sink::Sink;
use crate::core::field::Field;
use crate::core::level::Level;
use std::sync::Arc;

/// Per-logger adjustments to the emitter, applied by
/// [`Logger::with_options`](crate::Logger::with_options).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmitterOptions {
    caller: Option<bool>,
}

impl EmitterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable caller-location attribution.
    #[must_use = "builder methods return a new value"]
    pub fn with_caller(mut self, enabled: bool) -> Self {
        self.caller = Some(enabled);
        self
    }
}

pub struct Emitter {
    encoding: Encoding,
    sink: Arc<dyn Sink>,
    with_caller: bool,
}

impl Emitter {
    pub fn new(encoding: Encoding, sink: Arc<dyn Sink>) -> Self {
        Self {
            encoding,
            sink,
            with_caller: true,
        }
    }

    /// Clone this emitter with options applied; shares the sink.
    #[must_use]
    pub fn reconfigure(&self, options: EmitterOptions) -> Self {
        Self {
            encoding: self.encoding,
            sink: Arc::clone(&self.sink),
            with_caller: options.caller.unwrap_or(self.with_caller),
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Format and write one record. Called only after the severity gate
    /// has passed. Write failures are reported to stderr and swallowed.
    pub fn emit(&self, level: Level, msg: &str, fields: &[Field], caller: Option<Caller>) {
        let caller = if self.with_caller { caller } else { None };
        let record = Record::new(level, msg, fields, caller);
        let line = self.encoding.encode(&record);

        if let Err(e) = self.sink.write_line(&line) {
            eprintln!("[ctxlog] sink write failed: {}", e);
        }
    }

    pub fn flush(&self) {
        if let Err(e) = self.sink.flush() {
            eprintln!("[ctxlog] sink flush failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field;
    use crate::output::sink::MemorySink;

    #[test]
    fn test_emit_writes_one_line() {
        let sink = Arc::new(MemorySink::new());
        let emitter = Emitter::new(Encoding::Json, sink.clone());

        emitter.emit(Level::Info, "hello", &[field::string("k", "v")], None);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(parsed["msg"], "hello");
        assert_eq!(parsed["k"], "v");
    }

    #[test]
    fn test_reconfigure_disables_caller() {
        let sink = Arc::new(MemorySink::new());
        let emitter = Emitter::new(Encoding::Json, sink.clone())
            .reconfigure(EmitterOptions::new().with_caller(false));

        emitter.emit(
            Level::Info,
            "no caller",
            &[],
            Some(std::panic::Location::caller().into()),
        );

        let parsed: serde_json::Value = serde_json::from_str(&sink.lines()[0]).unwrap();
        assert!(parsed.get("logger").is_none());
    }
}
