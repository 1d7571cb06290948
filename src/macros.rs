//! Logging macros for format-style messages.
//!
//! These forward `format!` arguments to a logger with no call-site
//! fields. They expand at the call site, so caller attribution stays
//! accurate.
//!
//! # Examples
//!
//! ```
//! use ctxlog::{info, Logger};
//! use ctxlog::output::MemorySink;
//! use ctxlog::Config;
//! use std::sync::Arc;
//!
//! let logger = Logger::with_config(Config::default(), Arc::new(MemorySink::new()));
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &format!($($arg)+), &[])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::core::{Level, Logger};
    use crate::output::MemorySink;
    use std::sync::Arc;

    fn logger_with_sink() -> (Logger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let config = Config {
            level: Level::Debug,
            ..Config::default()
        };
        (Logger::with_config(config, sink.clone()), sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = logger_with_sink();
        log!(logger, Level::Info, "formatted: {}", 42);
        assert!(sink.lines()[0].contains("formatted: 42"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = logger_with_sink();
        debug!(logger, "count: {}", 5);
        info!(logger, "items: {}", 100);
        warn!(logger, "retry {} of {}", 1, 3);
        error!(logger, "code: {}", 500);
        assert_eq!(sink.len(), 4);
    }
}
