//! Typed key/value fields attached to log records
//!
//! A [`Field`] is immutable once constructed. Equality for merge purposes
//! is by key only; the constructors in this module are the public way to
//! build one.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Value carried by a [`Field`]. Closed set of kinds, each with its own
/// JSON encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    Bytes(Vec<u8>),
    Strings(Vec<String>),
    Bool(bool),
    Int(i64),
    Float(f64),
    Time(DateTime<Utc>),
    Duration(Duration),
    Error(String),
    Any(serde_json::Value),
}

impl FieldValue {
    /// Convert to a `serde_json::Value` for the structured encoding.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Str(s) => serde_json::Value::String(s.clone()),
            FieldValue::Bytes(b) => {
                serde_json::Value::String(String::from_utf8_lossy(b).into_owned())
            }
            FieldValue::Strings(v) => serde_json::Value::Array(
                v.iter()
                    .map(|s| serde_json::Value::String(s.clone()))
                    .collect(),
            ),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Time(t) => {
                serde_json::Value::String(t.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
            }
            FieldValue::Duration(d) => serde_json::Number::from_f64(d.as_secs_f64())
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Error(e) => serde_json::Value::String(e.clone()),
            FieldValue::Any(v) => v.clone(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => write!(f, "{}", s),
            FieldValue::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            FieldValue::Strings(v) => write!(f, "[{}]", v.join(",")),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Time(t) => write!(f, "{}", t.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            FieldValue::Duration(d) => write!(f, "{}s", d.as_secs_f64()),
            FieldValue::Error(e) => write!(f, "{}", e),
            FieldValue::Any(v) => write!(f, "{}", v),
        }
    }
}

/// One structured attribute of a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: FieldValue,
}

impl Field {
    pub fn new(key: impl Into<String>, value: FieldValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

pub fn string(key: impl Into<String>, value: impl Into<String>) -> Field {
    Field::new(key, FieldValue::Str(value.into()))
}

pub fn bytes(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Field {
    Field::new(key, FieldValue::Bytes(value.into()))
}

pub fn strings<I, S>(key: impl Into<String>, values: I) -> Field
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Field::new(
        key,
        FieldValue::Strings(values.into_iter().map(Into::into).collect()),
    )
}

pub fn boolean(key: impl Into<String>, value: bool) -> Field {
    Field::new(key, FieldValue::Bool(value))
}

pub fn int(key: impl Into<String>, value: i32) -> Field {
    Field::new(key, FieldValue::Int(value as i64))
}

pub fn int64(key: impl Into<String>, value: i64) -> Field {
    Field::new(key, FieldValue::Int(value))
}

pub fn float64(key: impl Into<String>, value: f64) -> Field {
    Field::new(key, FieldValue::Float(value))
}

pub fn time(key: impl Into<String>, value: DateTime<Utc>) -> Field {
    Field::new(key, FieldValue::Time(value))
}

pub fn duration(key: impl Into<String>, value: Duration) -> Field {
    Field::new(key, FieldValue::Duration(value))
}

/// Error field under the conventional `"error"` key.
pub fn error(err: &dyn std::error::Error) -> Field {
    named_error("error", err)
}

pub fn named_error(key: impl Into<String>, err: &dyn std::error::Error) -> Field {
    Field::new(key, FieldValue::Error(err.to_string()))
}

/// Field carrying any serializable value.
///
/// A value that fails to serialize degrades to JSON null; field
/// construction never fails at runtime.
pub fn any<T: Serialize>(key: impl Into<String>, value: &T) -> Field {
    let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
    Field::new(key, FieldValue::Any(json))
}
