//! Immutable logging context with key-unique fields
//!
//! A [`Context`] is the field set a logger carries into every record it
//! emits. Extension never mutates in place: it produces a new context,
//! leaving ancestors and siblings untouched. The backing storage is an
//! index-stable vector deduplicated at construction, so merge is an
//! append-then-override pass rather than a map rebuild.

use super::field::Field;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Context {
    fields: Arc<Vec<Field>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a field sequence; later duplicates win.
    pub fn from_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        Context::new().extend(fields)
    }

    /// Produce a new context with `extra` merged in, call-site fields
    /// winning on key collision. The receiver is unchanged.
    #[must_use]
    pub fn extend(&self, extra: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: Arc::new(Self::merged_vec(&self.fields, extra)),
        }
    }

    /// Compute the deduplicated field set for one log call: inherited
    /// context plus call-site fields, last occurrence winning per key.
    ///
    /// Runs on every emission, so it must not touch the stored context.
    #[must_use]
    pub fn merge(&self, extra: &[Field]) -> Vec<Field> {
        Self::merged_vec(&self.fields, extra.iter().cloned())
    }

    fn merged_vec(base: &[Field], extra: impl IntoIterator<Item = Field>) -> Vec<Field> {
        let mut out = base.to_vec();
        for field in extra {
            match out.iter_mut().find(|f| f.key() == field.key()) {
                Some(slot) => *slot = field,
                None => out.push(field),
            }
        }
        out
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key() == key)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
