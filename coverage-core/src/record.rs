//! Metadata records attached to environment transitions.
//!
//! A [`Record`] is the key-value metadata returned next to every observation by
//! [`Env::reset`](crate::Env::reset) and [`Env::step`](crate::Env::step).
//! Most environments return an empty record; drivers are free to insert their
//! own values, for example the episode index during evaluation.
//!
//! ```rust
//! use coverage_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("episode", RecordValue::Integer(3));
//! record.insert("return", RecordValue::Scalar(7.0));
//!
//! assert_eq!(record.get_integer("episode").unwrap(), 3);
//! ```
use crate::error::CoreError;
use std::collections::HashMap;

/// Possible types of values in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value, e.g. an average return.
    Scalar(f32),

    /// An integer value, e.g. a step or episode counter.
    Integer(i64),
}

/// A container of key-value pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Inserts a key-value pair, overwriting an existing value of the same key.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Gets a scalar value from the record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RecordKeyError`] if the key does not exist and
    /// [`CoreError::RecordValueTypeError`] if the value is not a scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, CoreError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(CoreError::RecordValueTypeError("Scalar".to_string())),
            None => Err(CoreError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets an integer value from the record.
    pub fn get_integer(&self, k: &str) -> Result<i64, CoreError> {
        match self.0.get(k) {
            Some(RecordValue::Integer(v)) => Ok(*v),
            Some(_) => Err(CoreError::RecordValueTypeError("Integer".to_string())),
            None => Err(CoreError::RecordKeyError(k.to_string())),
        }
    }

    /// Returns `true` if the record has no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of values in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
