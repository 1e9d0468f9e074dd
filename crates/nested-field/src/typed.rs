//! Typed accessors: [`get`](crate::get) followed by a type check.
//!
//! A found value of the wrong type becomes [`PathError::TypeAssertion`];
//! absence stays `Ok(None)` and reader errors pass through unchanged.

use crate::error::{PathError, Result};
use crate::reader::{get, Resolved};
use crate::segment::Path;
use crate::types::Value;

/// Resolve `path` and require a string.
///
/// ```
/// use nested_field::{get_str, Path, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"name": "rick", "age": 12}));
/// assert_eq!(get_str(&doc, &"name".parse::<Path>().unwrap()).unwrap(), Some("rick"));
/// assert!(get_str(&doc, &"age".parse::<Path>().unwrap()).is_err());
/// ```
pub fn get_str<'a>(doc: &'a Value, path: &Path) -> Result<Option<&'a str>> {
    typed(doc, path, "string", Resolved::as_str)
}

/// Resolve `path` and require an integer.
pub fn get_i64(doc: &Value, path: &Path) -> Result<Option<i64>> {
    typed(doc, path, "integer", Resolved::as_i64)
}

/// Resolve `path` and require a boolean.
pub fn get_bool(doc: &Value, path: &Path) -> Result<Option<bool>> {
    typed(doc, path, "bool", Resolved::as_bool)
}

/// Resolve `path` and require a number. Integers are widened to `f64`.
pub fn get_f64(doc: &Value, path: &Path) -> Result<Option<f64>> {
    typed(doc, path, "float", Resolved::as_f64)
}

fn typed<'a, T>(
    doc: &'a Value,
    path: &Path,
    expected: &'static str,
    cast: impl FnOnce(Resolved<'a>) -> Option<T>,
) -> Result<Option<T>> {
    let Some(resolved) = get(doc, path)? else {
        return Ok(None);
    };
    match cast(resolved) {
        Some(value) => Ok(Some(value)),
        None => Err(PathError::TypeAssertion {
            path: path.to_string(),
            expected,
            found: resolved.type_name(),
        }),
    }
}
