//! Output layer: encodings, sinks, and the record emitter

pub mod emitter;
pub mod encoding;
pub mod record;
pub mod sink;

pub use emitter::{Emitter, EmitterOptions};
pub use encoding::Encoding;
pub use record::{Caller, Record};
pub use sink::{MemorySink, Sink, StdoutSink};
