//! Output encodings for log records
//!
//! Two interchangeable encodings, fixed per process at startup:
//! - `Json`: machine-parseable single-line object (default)
//! - `Console`: human-oriented colorized line

use super::record::Record;
use colored::Colorize;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Human-readable console format
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] src/main.rs:10 - ready port=8080`
    Console,

    /// Machine-readable JSON format (default)
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","logger":"src/main.rs:10","level":"info","msg":"ready","port":8080}`
    #[default]
    Json,
}

impl Encoding {
    /// Resolve the configured format name. `"console"` (any case) selects
    /// the console encoding; anything else, including empty, is JSON.
    pub fn from_format_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("console") {
            Encoding::Console
        } else {
            Encoding::Json
        }
    }

    pub fn encode(&self, record: &Record<'_>) -> String {
        match self {
            Encoding::Console => self.encode_console(record),
            Encoding::Json => self.encode_json(record),
        }
    }

    fn encode_json(&self, record: &Record<'_>) -> String {
        let mut obj = serde_json::Map::new();

        obj.insert(
            "timestamp".to_string(),
            serde_json::Value::String(record.timestamp.format(TIMESTAMP_FORMAT).to_string()),
        );
        if let Some(caller) = record.caller {
            obj.insert(
                "logger".to_string(),
                serde_json::Value::String(caller.to_string()),
            );
        }
        obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.to_lower_str().to_string()),
        );
        obj.insert(
            "msg".to_string(),
            serde_json::Value::String(record.msg.to_string()),
        );

        // Merged fields are flattened into the top-level object. Collisions
        // with the reserved keys are the caller's responsibility.
        for field in record.fields {
            obj.insert(field.key().to_string(), field.value().to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(obj)).unwrap_or_default()
    }

    fn encode_console(&self, record: &Record<'_>) -> String {
        let level_str = format!("{:5}", record.level.to_str())
            .color(record.level.color_code())
            .to_string();

        let mut line = format!(
            "[{}] [{}]",
            record.timestamp.format(TIMESTAMP_FORMAT),
            level_str
        );
        if let Some(caller) = record.caller {
            line.push_str(&format!(" {}", caller));
        }
        line.push_str(&format!(" - {}", Self::sanitize(record.msg)));

        for field in record.fields {
            line.push_str(&format!(
                " {}={}",
                field.key(),
                Self::sanitize(&field.value().to_string())
            ));
        }

        line
    }

    /// Escape control characters so a message cannot fake additional
    /// console lines. JSON escapes these natively.
    fn sanitize(s: &str) -> String {
        s.replace('\n', "\\n").replace('\r', "\\r").replace('\t', "\\t")
    }
}
