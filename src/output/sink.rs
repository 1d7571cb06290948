//! Record sinks
//!
//! A sink is the single shared destination records are written to.
//! Concurrent emissions serialize at the sink: the mutex guards the write,
//! not the formatting that precedes it.

use crate::core::error::Result;
use parking_lot::Mutex;
use std::io::Write;

pub trait Sink: Send + Sync {
    /// Write one encoded record as a complete line.
    fn write_line(&self, line: &str) -> Result<()>;

    fn flush(&self) -> Result<()>;
}

/// Standard output sink, write-serialized across threads.
#[derive(Default)]
pub struct StdoutSink {
    lock: Mutex<()>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut out = std::io::stdout();
        writeln!(out, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let _guard = self.lock.lock();
        std::io::stdout().flush()?;
        Ok(())
    }
}

/// In-memory sink capturing complete lines.
///
/// Used by the test suite and by callers embedding the logger that want
/// to inspect output.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
