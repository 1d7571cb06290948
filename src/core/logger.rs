//! Logger façade
//!
//! A `Logger` combines a shared severity threshold, an owned immutable
//! context snapshot, and a shared record emitter. Child loggers created
//! via [`Logger::with`] share the threshold and emitter by reference and
//! carry an extended context of their own.

use super::context::Context;
use super::field::Field;
use super::level::Level;
use super::threshold::Threshold;
use crate::config::Config;
use crate::output::{Emitter, EmitterOptions, Sink, StdoutSink};
use std::panic::Location;
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    emitter: Arc<Emitter>,
    threshold: Arc<Threshold>,
    context: Context,
}

impl Logger {
    /// Root logger writing to stdout, configured once from the
    /// environment (`LOG_LEVEL`, `LOG_FORMAT`).
    ///
    /// Each call creates an independent severity threshold; loggers from
    /// different roots do not share level mutations.
    pub fn new() -> Self {
        Self::with_config(Config::from_env(), Arc::new(StdoutSink::new()))
    }

    /// Root logger with an explicit configuration and sink.
    pub fn with_config(config: Config, sink: Arc<dyn Sink>) -> Self {
        Self {
            emitter: Arc::new(Emitter::new(config.encoding, sink)),
            threshold: Arc::new(Threshold::new(config.level)),
            context: Context::new(),
        }
    }

    /// Log at an arbitrary level with call-site fields.
    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, fields: &[Field]) {
        self.log_at(level, msg, fields, Location::caller());
    }

    /// Explicit-location entry point for wrappers that add a call frame.
    ///
    /// Convenience layers (like [`crate::global`]) annotate their own
    /// functions `#[track_caller]` and forward the captured location here,
    /// so records are attributed to the user's call site rather than the
    /// wrapper.
    pub fn log_at(
        &self,
        level: Level,
        msg: &str,
        fields: &[Field],
        location: &'static Location<'static>,
    ) {
        // Gate first: a disabled call performs no merge and no encoding.
        if self.threshold.enabled(level) {
            let merged = self.context.merge(fields);
            self.emitter.emit(level, msg, &merged, Some(location.into()));
        }

        // Fatal exits and Panic unwinds whether or not the record was
        // written, matching the level contract rather than the gate.
        match level {
            Level::Fatal => {
                self.emitter.flush();
                std::process::exit(1);
            }
            Level::Panic => {
                self.emitter.flush();
                panic!("{}", msg);
            }
            _ => {}
        }
    }

    #[track_caller]
    pub fn debug(&self, msg: &str, fields: &[Field]) {
        self.log_at(Level::Debug, msg, fields, Location::caller());
    }

    #[track_caller]
    pub fn info(&self, msg: &str, fields: &[Field]) {
        self.log_at(Level::Info, msg, fields, Location::caller());
    }

    #[track_caller]
    pub fn warn(&self, msg: &str, fields: &[Field]) {
        self.log_at(Level::Warn, msg, fields, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, msg: &str, fields: &[Field]) {
        self.log_at(Level::Error, msg, fields, Location::caller());
    }

    /// Log at fatal level, then terminate the process.
    #[track_caller]
    pub fn fatal(&self, msg: &str, fields: &[Field]) -> ! {
        self.log_at(Level::Fatal, msg, fields, Location::caller());
        std::process::exit(1)
    }

    /// Log at panic level, then raise a catchable unwind.
    #[track_caller]
    pub fn panic(&self, msg: &str, fields: &[Field]) -> ! {
        self.log_at(Level::Panic, msg, fields, Location::caller());
        panic!("{}", msg)
    }

    /// Derive a child logger with `fields` merged into the context.
    ///
    /// The child shares this logger's sink and severity threshold by
    /// reference; the receiver's context is untouched.
    #[must_use]
    pub fn with(&self, fields: impl IntoIterator<Item = Field>) -> Logger {
        Logger {
            emitter: Arc::clone(&self.emitter),
            threshold: Arc::clone(&self.threshold),
            context: self.context.extend(fields),
        }
    }

    /// Derive a logger with an adjusted emitter configuration, keeping
    /// the same context and severity threshold.
    #[must_use]
    pub fn with_options(&self, options: EmitterOptions) -> Logger {
        Logger {
            emitter: Arc::new(self.emitter.reconfigure(options)),
            threshold: Arc::clone(&self.threshold),
            context: self.context.clone(),
        }
    }

    /// Mutate the shared threshold; visible immediately to every logger
    /// in this lineage.
    pub fn set_level(&self, level: Level) {
        self.threshold.set(level);
    }

    pub fn level(&self) -> Level {
        self.threshold.get()
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.threshold.enabled(level)
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn flush(&self) {
        self.emitter.flush();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field;
    use crate::output::{Encoding, MemorySink};

    fn test_logger(level: Level) -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let config = Config {
            level,
            encoding: Encoding::Json,
        };
        (Logger::with_config(config, sink.clone()), sink)
    }

    fn parse(line: &str) -> serde_json::Value {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn test_info_emits_record() {
        let (logger, sink) = test_logger(Level::Info);
        logger.info("server ready", &[field::int64("port", 8080)]);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let record = parse(&lines[0]);
        assert_eq!(record["level"], "info");
        assert_eq!(record["msg"], "server ready");
        assert_eq!(record["port"], 8080);
    }

    #[test]
    fn test_disabled_levels_emit_nothing() {
        let (logger, sink) = test_logger(Level::Error);

        for _ in 0..10 {
            logger.debug("quiet", &[]);
            logger.info("quiet", &[]);
            logger.warn("quiet", &[]);
        }

        assert!(sink.is_empty());
    }

    #[test]
    fn test_caller_attribution_points_here() {
        let (logger, sink) = test_logger(Level::Info);
        logger.info("located", &[]);

        let record = parse(&sink.lines()[0]);
        let caller = record["logger"].as_str().unwrap();
        assert!(caller.contains("logger.rs"), "caller was {}", caller);
    }

    #[test]
    fn test_with_extends_and_isolates() {
        let (parent, sink) = test_logger(Level::Info);
        let parent = parent.with([field::string("test", "pArEnT")]);

        parent.info("parent logger", &[]);
        let child = parent.with([field::string("test", "cHiLd"), field::string("hello", "world")]);
        child.info("child log", &[]);
        parent.info("after child", &[]);

        let lines = sink.lines();
        assert_eq!(lines.len(), 3);

        let first = parse(&lines[0]);
        assert_eq!(first["test"], "pArEnT");
        assert!(first.get("hello").is_none());

        let second = parse(&lines[1]);
        assert_eq!(second["test"], "cHiLd");
        assert_eq!(second["hello"], "world");

        let third = parse(&lines[2]);
        assert_eq!(third["test"], "pArEnT");
        assert!(third.get("hello").is_none());
    }

    #[test]
    fn test_call_site_fields_override_context() {
        let (logger, sink) = test_logger(Level::Info);
        let logger = logger.with([field::string("test", "pArEnT")]);

        logger.info("overridden", &[field::string("test", "parent")]);

        let record = parse(&sink.lines()[0]);
        assert_eq!(record["test"], "parent");
    }

    #[test]
    fn test_shared_threshold_across_lineage() {
        let (parent, sink) = test_logger(Level::Info);
        let child = parent.with([field::string("who", "child")]);
        let sibling = parent.with([field::string("who", "sibling")]);

        child.set_level(Level::Error);

        parent.info("dropped", &[]);
        sibling.info("dropped", &[]);
        assert!(sink.is_empty());

        sibling.error("kept", &[]);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_independent_roots_do_not_share_threshold() {
        let (a, _sink_a) = test_logger(Level::Info);
        let (b, sink_b) = test_logger(Level::Info);

        a.set_level(Level::Error);

        b.info("still enabled", &[]);
        assert_eq!(sink_b.len(), 1);
    }

    #[test]
    fn test_with_options_keeps_context_and_threshold() {
        let (logger, sink) = test_logger(Level::Info);
        let logger = logger.with([field::string("svc", "api")]);
        let quiet = logger.with_options(EmitterOptions::new().with_caller(false));

        quiet.info("no caller", &[]);
        let record = parse(&sink.lines()[0]);
        assert!(record.get("logger").is_none());
        assert_eq!(record["svc"], "api");

        // Threshold still shared with the original
        quiet.set_level(Level::Error);
        logger.info("dropped", &[]);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_panic_level_unwinds_after_writing() {
        let (logger, sink) = test_logger(Level::Info);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.panic("unrecoverable", &[field::string("why", "test")]);
        }));

        assert!(result.is_err());
        let record = parse(&sink.lines()[0]);
        assert_eq!(record["level"], "panic");
        assert_eq!(record["msg"], "unrecoverable");
        assert_eq!(record["why"], "test");
    }

    #[test]
    fn test_panic_level_unwinds_even_when_gated() {
        let (logger, sink) = test_logger(Level::Info);
        logger.set_level(Level::Panic);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger.log(Level::Panic, "still panics", &[]);
        }));

        assert!(result.is_err());
        // Panic is the top of the ordered set, so the record still passes
        // the gate here; the unwind must happen regardless.
        assert_eq!(sink.len(), 1);
    }
}
