//! URL path as an ordered list of segments.

use std::fmt::{self, Write};
use std::ops::Deref;

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// A URL path, stored as its `/`-separated segments.
///
/// A leading empty segment marks an absolute path: `/a/b` is `["", "a", "b"]`
/// while `a/b` is `["a", "b"]`.
///
/// # Examples
///
/// ```
/// use urlkit::Path;
///
/// let mut path = Path::parse("/a/./b/../c");
/// assert!(path.is_absolute());
/// assert_eq!(path.canonify().to_string(), "/a/c");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Create an empty path, neither absolute nor relative.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a path string on `/`.
    ///
    /// Empty segments produced by repeated or trailing slashes are dropped,
    /// except a leading one which records that the path is absolute. The
    /// empty string gives the empty path.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::new();
        }

        let segments = path
            .split(SEPARATOR)
            .enumerate()
            .filter(|(i, segment)| *i == 0 || !segment.is_empty())
            .map(|(_, segment)| segment.to_string())
            .collect();

        Self { segments }
    }

    /// Build a path from segments, stored as given.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The segments, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Consume the path and return its segments.
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }

    /// True if the first segment is empty, i.e. the path started with `/`.
    pub fn is_absolute(&self) -> bool {
        self.segments.first().is_some_and(|s| s.is_empty())
    }

    /// True if the path has a non-empty first segment.
    pub fn is_relative(&self) -> bool {
        self.segments.first().is_some_and(|s| !s.is_empty())
    }

    /// Append a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// The last segment, if it is non-empty.
    pub fn filename(&self) -> Option<&str> {
        self.segments
            .last()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Resolve `.` and `..` segments in place.
    ///
    /// `.` and empty segments are dropped, `..` removes the previous segment
    /// and is ignored when there is none. An absolute path stays absolute.
    pub fn canonify(&mut self) -> &mut Self {
        let root = usize::from(self.is_absolute());
        let mut canon: Vec<String> = Vec::with_capacity(self.segments.len());
        canon.extend(self.segments.drain(..root));

        for segment in self.segments.drain(..) {
            match segment.as_str() {
                "" | "." => {}
                ".." => {
                    if canon.len() > root {
                        canon.pop();
                    }
                }
                _ => canon.push(segment),
            }
        }

        self.segments = canon;
        self
    }

    /// Canonified copy of this path.
    pub fn canonical(&self) -> Self {
        let mut path = self.clone();
        path.canonify();
        path
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_char(SEPARATOR)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl Deref for Path {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.segments
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&String> for Path {
    fn from(path: &String) -> Self {
        Self::parse(path)
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<Vec<&str>> for Path {
    fn from(segments: Vec<&str>) -> Self {
        Self::from_segments(segments)
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}
