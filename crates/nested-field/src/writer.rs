//! In-place mutation: assign a value at the location a [`Path`] names.
//!
//! Every segment but the last is walked; the last one is the assignment
//! target. While walking:
//!
//! - a plain segment descends into an existing map, or into a fresh empty map
//!   inserted under a missing key,
//! - an indexed segment descends into a sequence element, as long as the index
//!   is in range and the element is a map,
//! - an index on anything that is not a sequence (a map, a scalar, `null` or a
//!   missing key) is a [`PathError::UnsupportedSequenceType`],
//! - any other shape is a [`PathError::TypeMismatch`] and the walk stops.
//!
//! The document is never copied. Maps created on the way are woven into the
//! caller's tree. Every failure is detected before the first map is created,
//! so a failed call leaves the document as it was.

use crate::error::{PathError, Result};
use crate::segment::{Path, Segment};
use crate::types::{Map, Value};

/// Assign `target` at `path` inside `doc`, creating intermediate maps as needed.
///
/// The last segment is normally used as a literal key: `set(doc, v, ["a", "b[0]"])`
/// inserts `"b[0]"` into `a`. The exception is a last segment that is indexed
/// while `a.b` already holds a sequence: then the element at that index is
/// replaced, which requires the index to be in range.
///
/// # Examples
///
/// ```
/// use nested_field::{get, set, Map, Path, Value};
///
/// let mut doc = Map::new();
/// doc.insert("name".into(), Value::from("rick"));
///
/// let path = Path::parse(["job", "luck"]).unwrap();
/// set(&mut doc, Value::from("good"), &path).unwrap();
///
/// let root = Value::Map(doc);
/// assert_eq!(get(&root, &path).unwrap().unwrap(), Value::from("good"));
/// assert_eq!(get(&root, &Path::parse(["name"]).unwrap()).unwrap().unwrap(), Value::from("rick"));
/// ```
pub fn set(doc: &mut Map, target: Value, path: &Path) -> Result<()> {
    let (last, parents) = path.split_last();

    let mut cursor = doc;
    for (depth, segment) in parents.iter().enumerate() {
        cursor = descend(cursor, segment, path, depth).map_err(failed)?;
    }

    assign(cursor, target, last, path).map_err(failed)
}

/// Like [`set`], for callers holding the document as a [`Value`].
///
/// The root must be a map.
pub fn set_value(doc: &mut Value, target: Value, path: &Path) -> Result<()> {
    match doc {
        Value::Map(map) => set(map, target, path),
        other => Err(failed(not_a_map(path, 0, other.type_name()))),
    }
}

/// Step from `map` into the child named by `segment`.
///
/// Plain segments descend into maps, creating missing ones. Indexed segments
/// resolve exactly as the reader does, so anything `set` walks through, `get`
/// walks through too.
fn descend<'a>(
    map: &'a mut Map,
    segment: &Segment,
    path: &Path,
    depth: usize,
) -> Result<&'a mut Map> {
    let Some(index) = segment.index() else {
        if !map.contains_key(segment.key()) {
            ensure_creatable(path, depth)?;
        }
        let child = map.entry(segment.key().to_owned()).or_insert_with(|| {
            tracing::trace!(path = %path.prefix(depth + 1), "creating intermediate map");
            Value::Map(Map::new())
        });
        return match child {
            Value::Map(child) => Ok(child),
            other => Err(not_a_map(path, depth + 1, other.type_name())),
        };
    };

    // There is no sequence to create an element in.
    let Some(child) = map.get_mut(segment.key()) else {
        return Err(unsupported(path, depth, "nothing"));
    };

    match child {
        Value::MapSequence(seq) => {
            let len = seq.len();
            seq.get_mut(index)
                .ok_or_else(|| out_of_range(path, depth, index, len))
        }
        Value::Sequence(seq) => {
            let len = seq.len();
            match seq.get_mut(index) {
                Some(Value::Map(element)) => Ok(element),
                Some(other) => Err(not_a_map(path, depth + 1, other.type_name())),
                None => Err(out_of_range(path, depth, index, len)),
            }
        }
        Value::StringSequence(seq) => match seq.get(index) {
            Some(_) => Err(not_a_map(path, depth + 1, "string")),
            None => Err(out_of_range(path, depth, index, seq.len())),
        },
        other => Err(unsupported(path, depth, other.type_name())),
    }
}

/// Write `target` into `map` under the final segment.
fn assign(map: &mut Map, target: Value, last: &Segment, path: &Path) -> Result<()> {
    let depth = path.len() - 1;
    let Some(index) = last.index() else {
        map.insert(last.raw().to_owned(), target);
        return Ok(());
    };

    match map.get_mut(last.key()) {
        Some(Value::Sequence(seq)) => {
            let len = seq.len();
            let slot = seq
                .get_mut(index)
                .ok_or_else(|| out_of_range(path, depth, index, len))?;
            *slot = target;
        }
        Some(Value::MapSequence(seq)) => {
            let len = seq.len();
            let slot = seq
                .get_mut(index)
                .ok_or_else(|| out_of_range(path, depth, index, len))?;
            match target {
                Value::Map(element) => *slot = element,
                other => return Err(wrong_element(path, "a map", &other)),
            }
        }
        Some(Value::StringSequence(seq)) => {
            let len = seq.len();
            let slot = seq
                .get_mut(index)
                .ok_or_else(|| out_of_range(path, depth, index, len))?;
            match target {
                Value::String(element) => *slot = element,
                other => return Err(wrong_element(path, "a string", &other)),
            }
        }
        _ => {
            map.insert(last.raw().to_owned(), target);
            return Ok(());
        }
    }

    tracing::trace!(path = %path, index, "replaced sequence element");
    Ok(())
}

/// Every key below a freshly created map is missing, so an indexed parent
/// segment further down cannot resolve. Report it before creating anything.
fn ensure_creatable(path: &Path, depth: usize) -> Result<()> {
    let (_, parents) = path.split_last();
    match parents.iter().skip(depth + 1).position(Segment::is_indexed) {
        Some(offset) => Err(unsupported(path, depth + 1 + offset, "nothing")),
        None => Ok(()),
    }
}

fn out_of_range(path: &Path, depth: usize, index: usize, len: usize) -> PathError {
    PathError::IndexOutOfRange {
        path: path.prefix(depth + 1),
        index,
        len,
    }
}

fn wrong_element(path: &Path, expected: &'static str, found: &Value) -> PathError {
    PathError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: found.type_name(),
    }
}

fn not_a_map(path: &Path, consumed: usize, found: &'static str) -> PathError {
    PathError::TypeMismatch {
        path: path.prefix(consumed),
        expected: "a map",
        found,
    }
}

fn unsupported(path: &Path, depth: usize, found: &'static str) -> PathError {
    PathError::UnsupportedSequenceType {
        path: path.prefix(depth + 1),
        found,
    }
}

fn failed(err: PathError) -> PathError {
    tracing::debug!(error = %err, "nested field assignment failed");
    err
}
