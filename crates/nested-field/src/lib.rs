//! # nested-field
//!
//! Read and write values at arbitrary depth in dynamically-typed trees, such as
//! decoded JSON or YAML documents, by supplying an ordered list of path
//! segments. A segment may carry an array index: `clouds[1]`.
//!
//! ## Quick start
//!
//! ```rust
//! use nested_field::{get, get_str, set_value, Path, Value};
//! use serde_json::json;
//!
//! let mut doc = Value::from(json!({
//!     "jenkins": {"clouds": [{"name": "one"}, {"name": "two"}]}
//! }));
//!
//! let name: Path = "jenkins.clouds[1].name".parse().unwrap();
//! assert_eq!(get_str(&doc, &name).unwrap(), Some("two"));
//!
//! // Out-of-range indices are errors, missing keys are not.
//! assert!(get(&doc, &"jenkins.clouds[9].name".parse::<Path>().unwrap()).is_err());
//! assert_eq!(get(&doc, &"jenkins.agents".parse::<Path>().unwrap()).unwrap(), None);
//!
//! let first: Path = "jenkins.clouds[0].name".parse().unwrap();
//! set_value(&mut doc, Value::from("good"), &first).unwrap();
//! assert_eq!(get_str(&doc, &first).unwrap(), Some("good"));
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the `Value` tree and its serde/`serde_json` conversions
//! - [`segment`]: `Segment` and `Path` parsing (`key`, `key[N]`, dotted paths)
//! - [`reader`]: `get`: read-only traversal
//! - [`writer`]: `set`: in-place assignment, creating intermediate maps
//! - [`typed`]: `get_str`, `get_i64`, `get_bool`, `get_f64`
//! - [`error`]: `PathError`

pub mod error;
pub mod reader;
pub mod segment;
pub mod typed;
pub mod types;
pub mod writer;

pub use error::PathError;
pub use reader::{get, get_in, Resolved};
pub use segment::{Path, Segment};
pub use typed::{get_bool, get_f64, get_i64, get_str};
pub use types::{Map, Value};
pub use writer::{set, set_value};
