//! Read-only traversal: resolve a [`Path`] to the single value it names.
//!
//! The walk keeps a cursor, starting at the document, and for each segment:
//!
//! 1. A `null` cursor ends the walk as an absence.
//! 2. A cursor that is not a map is a [`PathError::TypeMismatch`].
//! 3. A missing key ends the walk as an absence.
//! 4. An indexed segment resolves against the sequence found at the key, trying
//!    map sequences, generic sequences and string sequences in that order.
//!    An index past the end is a [`PathError::IndexOutOfRange`]; indexing
//!    anything else, `null` included, is a
//!    [`PathError::UnsupportedSequenceType`].
//!
//! Absence is `Ok(None)`, never an error, so callers can tell "field missing"
//! from "field present but malformed".

use crate::error::{PathError, Result};
use crate::segment::Path;
use crate::types::{Map, Value};

/// A borrowed view of whatever a path resolved to.
///
/// Elements of [`Value::MapSequence`] and [`Value::StringSequence`] are not
/// stored as [`Value`]s, so they come back as [`Resolved::Map`] and
/// [`Resolved::Str`] respectively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Value(&'a Value),
    Map(&'a Map),
    Str(&'a str),
}

impl<'a> Resolved<'a> {
    pub fn type_name(self) -> &'static str {
        match self {
            Resolved::Value(v) => v.type_name(),
            Resolved::Map(_) => "map",
            Resolved::Str(_) => "string",
        }
    }

    pub fn as_map(self) -> Option<&'a Map> {
        match self {
            Resolved::Value(v) => v.as_map(),
            Resolved::Map(map) => Some(map),
            Resolved::Str(_) => None,
        }
    }

    pub fn as_str(self) -> Option<&'a str> {
        match self {
            Resolved::Value(v) => v.as_str(),
            Resolved::Map(_) => None,
            Resolved::Str(s) => Some(s),
        }
    }

    pub fn as_i64(self) -> Option<i64> {
        match self {
            Resolved::Value(v) => v.as_i64(),
            _ => None,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Resolved::Value(v) => v.as_bool(),
            _ => None,
        }
    }

    pub fn as_f64(self) -> Option<f64> {
        match self {
            Resolved::Value(v) => v.as_f64(),
            _ => None,
        }
    }

    /// Clone the resolved node out of the document.
    pub fn to_value(self) -> Value {
        match self {
            Resolved::Value(v) => v.clone(),
            Resolved::Map(map) => Value::Map(map.clone()),
            Resolved::Str(s) => Value::String(s.to_owned()),
        }
    }
}

impl PartialEq<Value> for Resolved<'_> {
    fn eq(&self, other: &Value) -> bool {
        match (*self, other) {
            (Resolved::Value(v), other) => v == other,
            (Resolved::Map(map), Value::Map(other)) => map == other,
            (Resolved::Str(s), Value::String(other)) => s == other,
            _ => false,
        }
    }
}

/// Resolve `path` against `doc`.
///
/// Returns `Ok(Some(_))` when the path names a value, `Ok(None)` when a key on
/// the way is missing or `null`, and an error when the document's shape
/// contradicts the path.
///
/// # Examples
///
/// ```
/// use nested_field::{get, Path, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"jenkins": {"clouds": [{"name": "one"}, {"name": "two"}]}}));
///
/// let name = get(&doc, &Path::from_dotted("jenkins.clouds[1].name").unwrap()).unwrap();
/// assert_eq!(name.unwrap(), Value::from("two"));
///
/// let missing = get(&doc, &Path::from_dotted("jenkins.agents").unwrap()).unwrap();
/// assert!(missing.is_none());
/// ```
pub fn get<'a>(doc: &'a Value, path: &Path) -> Result<Option<Resolved<'a>>> {
    walk(Resolved::Value(doc), path)
}

/// Like [`get`], for callers that hold the root map directly.
pub fn get_in<'a>(doc: &'a Map, path: &Path) -> Result<Option<Resolved<'a>>> {
    walk(Resolved::Map(doc), path)
}

fn walk<'a>(root: Resolved<'a>, path: &Path) -> Result<Option<Resolved<'a>>> {
    let mut cursor = root;

    for (depth, segment) in path.segments().iter().enumerate() {
        let map = match cursor {
            Resolved::Value(Value::Null) => return Ok(None),
            Resolved::Value(Value::Map(map)) | Resolved::Map(map) => map,
            other => {
                return Err(failed(PathError::TypeMismatch {
                    path: path.prefix(depth),
                    expected: "a map",
                    found: other.type_name(),
                }))
            }
        };

        let Some(value) = map.get(segment.key()) else {
            return Ok(None);
        };

        cursor = match segment.index() {
            None => Resolved::Value(value),
            Some(index) => match index_into(value, index, path, depth)? {
                Some(element) => element,
                None => return Ok(None),
            },
        };
    }

    Ok(Some(cursor))
}

fn index_into<'a>(
    value: &'a Value,
    index: usize,
    path: &Path,
    depth: usize,
) -> Result<Option<Resolved<'a>>> {
    let (element, len) = match value {
        Value::MapSequence(seq) => (seq.get(index).map(Resolved::Map), seq.len()),
        Value::Sequence(seq) => (seq.get(index).map(Resolved::Value), seq.len()),
        Value::StringSequence(seq) => (
            seq.get(index).map(|s| Resolved::Str(s.as_str())),
            seq.len(),
        ),
        other => {
            return Err(failed(PathError::UnsupportedSequenceType {
                path: path.prefix(depth + 1),
                found: other.type_name(),
            }))
        }
    };

    match element {
        Some(element) => Ok(Some(element)),
        None => Err(failed(PathError::IndexOutOfRange {
            path: path.prefix(depth + 1),
            index,
            len,
        })),
    }
}

fn failed(err: PathError) -> PathError {
    tracing::debug!(error = %err, "nested field lookup failed");
    err
}
