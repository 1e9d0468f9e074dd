//! The variant value tree that paths are resolved against.
//!
//! Decoders hand us `serde_json::Value` (or anything serde can turn into one,
//! YAML included). This module defines a tree that mirrors JSON types but keeps
//! three sequence shapes apart, so indexed access can be resolved against each
//! of them in a fixed order:
//!
//! 1. [`Value::MapSequence`]: a sequence whose elements are all maps
//! 2. [`Value::Sequence`]: a sequence of arbitrary values
//! 3. [`Value::StringSequence`]: a sequence of strings
//!
//! Decoded JSON arrays always land in the generic [`Value::Sequence`]; the other
//! two shapes are produced by callers that build documents in code.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Insertion-ordered mapping from string keys to values.
pub type Map = IndexMap<String, Value>;

/// A node in a document tree.
///
/// Integers and floats are kept apart so typed accessors can tell `12` from
/// `12.0`. Objects use [`IndexMap`] to preserve key order through a
/// decode/modify/encode cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Map(Map),
    /// Ordered sequence of maps.
    MapSequence(Vec<Map>),
    /// Ordered sequence of arbitrary values.
    Sequence(Vec<Value>),
    /// Ordered sequence of strings.
    StringSequence(Vec<String>),
}

impl Value {
    /// Stable, lowercase name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Map(_) => "map",
            Value::MapSequence(_) => "map sequence",
            Value::Sequence(_) => "sequence",
            Value::StringSequence(_) => "string sequence",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Floats as-is; integers are widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }
}

// ============================================================================
// serde_json interop
// ============================================================================

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                // u64 beyond i64::MAX and all non-integers.
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Sequence(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Integer(n) => serde_json::Value::Number(Number::from(n)),
            // JSON has no NaN/Infinity.
            Value::Float(f) => {
                Number::from_f64(f).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::String(s) => serde_json::Value::String(s),
            Value::Map(map) => map_to_json(map),
            Value::MapSequence(seq) => {
                serde_json::Value::Array(seq.into_iter().map(map_to_json).collect())
            }
            Value::Sequence(seq) => {
                serde_json::Value::Array(seq.into_iter().map(serde_json::Value::from).collect())
            }
            Value::StringSequence(seq) => {
                serde_json::Value::Array(seq.into_iter().map(serde_json::Value::String).collect())
            }
        }
    }
}

fn map_to_json(map: Map) -> serde_json::Value {
    serde_json::Value::Object(
        map.into_iter()
            .map(|(k, v)| (k, serde_json::Value::from(v)))
            .collect(),
    )
}

// ============================================================================
// Constructors
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<Vec<Map>> for Value {
    fn from(seq: Vec<Map>) -> Self {
        Value::MapSequence(seq)
    }
}

impl From<Vec<Value>> for Value {
    fn from(seq: Vec<Value>) -> Self {
        Value::Sequence(seq)
    }
}

impl From<Vec<String>> for Value {
    fn from(seq: Vec<String>) -> Self {
        Value::StringSequence(seq)
    }
}
