//! Core logger types: levels, fields, contexts, threshold, façade

pub mod context;
pub mod error;
pub mod field;
pub mod level;
pub mod logger;
pub mod threshold;

pub use context::Context;
pub use error::{LoggerError, Result};
pub use field::{Field, FieldValue};
pub use level::Level;
pub use logger::Logger;
pub use threshold::Threshold;
