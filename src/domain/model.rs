use crate::utils::error::{ExportError, Result};
use serde::Serialize;
use std::fmt;

/// A single exported value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            // Debug keeps the shortest round-trip form and the trailing `.0` on whole numbers.
            FieldValue::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

/// Field name to value pairs, kept in insertion order with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, rejecting a key that is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Result<()> {
        let key = key.into();
        if self.get(&key).is_some() {
            return Err(ExportError::DuplicateField { key });
        }
        self.fields.push((key, value.into()));
        Ok(())
    }

    /// Builder form of [`Record::insert`] for literal records.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already present.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let key = key.into();
        assert!(self.get(&key).is_none(), "duplicate field in record literal: {}", key);
        self.fields.push((key, value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON object with the fields in insertion order. Non-finite floats
    /// become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(self.fields.len());
        for (key, value) in &self.fields {
            let json = match value {
                FieldValue::Text(s) => serde_json::Value::String(s.clone()),
                FieldValue::Integer(n) => serde_json::Value::from(*n),
                FieldValue::Float(x) => serde_json::Number::from_f64(*x)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
            };
            map.insert(key.clone(), json);
        }
        serde_json::Value::Object(map)
    }
}
