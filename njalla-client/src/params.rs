//! Request parameter builder
//!
//! Resource operations build their `params` object explicitly. Optional
//! fields go through [`Params::insert_opt`], which only writes a key when the
//! value is set, so an unset field never reaches the wire as `null` or `0`.

use serde_json::{Map, Value};

/// The `params` object of a request envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    /// An empty parameter object (`{}`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    #[must_use]
    pub fn insert(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Set `key` only when `value` is `Some`.
    #[must_use]
    pub fn insert_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.insert(key, v),
            None => self,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
