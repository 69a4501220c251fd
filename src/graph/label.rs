//! Auxiliary label values for vertices and edges
//!
//! A label is an optional, caller-managed value attached to a graph entity,
//! independent of topology. The store treats it as an opaque slot; callers
//! pick the variant that fits their bookkeeping (the street layer stores
//! road distances as `Float`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied label value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LabelValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl LabelValue {
    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            LabelValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LabelValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            LabelValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            LabelValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            LabelValue::String(_) => "String",
            LabelValue::Integer(_) => "Integer",
            LabelValue::Float(_) => "Float",
            LabelValue::Boolean(_) => "Boolean",
        }
    }
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::String(s) => write!(f, "\"{}\"", s),
            LabelValue::Integer(i) => write!(f, "{}", i),
            LabelValue::Float(fl) => write!(f, "{}", fl),
            LabelValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

// Convenience conversions
impl From<String> for LabelValue {
    fn from(s: String) -> Self {
        LabelValue::String(s)
    }
}

impl From<&str> for LabelValue {
    fn from(s: &str) -> Self {
        LabelValue::String(s.to_string())
    }
}

impl From<i64> for LabelValue {
    fn from(i: i64) -> Self {
        LabelValue::Integer(i)
    }
}

impl From<i32> for LabelValue {
    fn from(i: i32) -> Self {
        LabelValue::Integer(i as i64)
    }
}

impl From<f64> for LabelValue {
    fn from(f: f64) -> Self {
        LabelValue::Float(f)
    }
}

impl From<bool> for LabelValue {
    fn from(b: bool) -> Self {
        LabelValue::Boolean(b)
    }
}
