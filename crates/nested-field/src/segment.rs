//! Path segments and paths.
//!
//! A segment is either a plain key (`name`) or an indexed key (`clouds[1]`).
//! An indexed segment names a key whose value is a sequence, and the element
//! of that sequence to continue with.
//!
//! Parsing rules:
//!
//! - A segment is indexed iff it ends with `[` + one or more ASCII digits + `]`.
//!   The key is everything before the first `[`.
//! - A segment without a trailing `]`, or without any `[`, is plain and its key
//!   is the raw text.
//! - A segment that has a `[` and ends with `]` but whose bracket contents are
//!   not a non-negative integer (`a[]`, `a[x]`, `a[-1]`, `a[1][2]`, overflow)
//!   is rejected with [`PathError::MalformedIndex`].

use crate::error::{PathError, Result};
use std::fmt;
use std::str::FromStr;

/// One parsed path element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    raw: String,
    key: String,
    index: Option<usize>,
}

impl Segment {
    /// Classify `raw` as plain or indexed and extract its key and index.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_field::Segment;
    ///
    /// let seg = Segment::parse("clouds[10]").unwrap();
    /// assert_eq!(seg.key(), "clouds");
    /// assert_eq!(seg.index(), Some(10));
    ///
    /// let plain = Segment::parse("name").unwrap();
    /// assert_eq!(plain.index(), None);
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let Some(open) = raw.find('[') else {
            return Ok(Self::plain(raw));
        };
        if !raw.ends_with(']') {
            return Ok(Self::plain(raw));
        }

        // `open` can't be the last byte: the segment ends with `]`.
        let digits = &raw[open + 1..raw.len() - 1];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PathError::MalformedIndex {
                segment: raw.to_owned(),
            });
        }
        let index = digits
            .parse::<usize>()
            .map_err(|_| PathError::MalformedIndex {
                segment: raw.to_owned(),
            })?;

        Ok(Self {
            raw: raw.to_owned(),
            key: raw[..open].to_owned(),
            index: Some(index),
        })
    }

    fn plain(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            key: raw.to_owned(),
            index: None,
        }
    }

    /// The segment exactly as supplied, including any `[N]` suffix.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The key to look up in the parent map (index suffix stripped).
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Segment {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// An ordered, non-empty list of segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Build a path from already-parsed segments.
    pub fn new(segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(PathError::EmptyPath);
        }
        Ok(Self { segments })
    }

    /// Parse each raw segment in order.
    ///
    /// ```
    /// use nested_field::Path;
    ///
    /// let path = Path::parse(["jenkins", "clouds[1]", "name"]).unwrap();
    /// assert_eq!(path.len(), 3);
    /// ```
    pub fn parse<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = raw
            .into_iter()
            .map(|s| Segment::parse(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(segments)
    }

    /// Parse dotted notation such as `jenkins.clouds[1].name`.
    ///
    /// Keys that themselves contain `.` can't be expressed this way; use
    /// [`Path::parse`] for those.
    pub fn from_dotted(dotted: &str) -> Result<Self> {
        if dotted.is_empty() {
            return Err(PathError::EmptyPath);
        }
        Self::parse(dotted.split('.'))
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a path is never built without segments.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The final segment and everything before it.
    pub fn split_last(&self) -> (&Segment, &[Segment]) {
        match self.segments.split_last() {
            Some(split) => split,
            None => unreachable!("Path is constructed non-empty"),
        }
    }

    /// Render the first `n` segments as dotted text, for error messages.
    /// An empty prefix renders as `<root>`.
    pub fn prefix(&self, n: usize) -> String {
        let n = n.min(self.segments.len());
        if n == 0 {
            return "<root>".to_owned();
        }
        self.segments[..n]
            .iter()
            .map(Segment::raw)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix(self.segments.len()))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_dotted(s)
    }
}
