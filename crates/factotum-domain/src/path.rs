//! Dotted-path addressing for JSON trees.
//!
//! A path is a `.`-separated list of segments. A segment is either a plain
//! object key, or the bracket form `key[selector]` meaning "descend into the
//! array at `key`, then select the first element whose `name` field equals
//! `selector`".

use std::fmt;

use thiserror::Error;

/// Errors produced while parsing a dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathParseError {
    /// The path string was empty.
    #[error("empty path")]
    Empty,

    /// A `.`-separated segment was empty (leading, trailing, or doubled dot).
    #[error("empty segment at position {0}")]
    EmptySegment(usize),

    /// A segment contained brackets that do not form `key[selector]`.
    #[error("malformed bracket selector in segment '{0}'")]
    MalformedBrackets(String),
}

/// One step of a [`DataPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Descend into the object field with this name.
    Key(String),

    /// Descend into the array at `key`, then select the first element whose
    /// `name` field equals `name`.
    IndexByName {
        /// Object field holding the array.
        key: String,
        /// Value the element's `name` field must equal.
        name: String,
    },
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::IndexByName { key, name } => write!(f, "{}[{}]", key, name),
        }
    }
}

/// A parsed dotted path such as `cities.lisbon.ecosystem.techCompanies[Remote]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPath(Vec<PathSegment>);

impl DataPath {
    /// Parse a dotted path string.
    ///
    /// Malformed bracket segments (stray brackets, text after the closing
    /// bracket, empty key or selector) are an explicit error rather than a
    /// silent mismatch at resolution time.
    ///
    /// # Examples
    ///
    /// ```
    /// use factotum_domain::{DataPath, PathSegment};
    ///
    /// let path = DataPath::parse("cities.lisbon.stemGraduates").unwrap();
    /// assert_eq!(path.segments().len(), 3);
    ///
    /// let path = DataPath::parse("cables[EllaLink]").unwrap();
    /// assert!(matches!(&path.segments()[0], PathSegment::IndexByName { .. }));
    /// ```
    pub fn parse(input: &str) -> Result<Self, PathParseError> {
        if input.is_empty() {
            return Err(PathParseError::Empty);
        }

        let mut segments = Vec::new();
        for (position, raw) in input.split('.').enumerate() {
            if raw.is_empty() {
                return Err(PathParseError::EmptySegment(position));
            }
            segments.push(parse_segment(raw)?);
        }

        Ok(Self(segments))
    }

    /// The segments of the path, in resolution order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for DataPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

fn parse_segment(raw: &str) -> Result<PathSegment, PathParseError> {
    let Some(open) = raw.find('[') else {
        if raw.contains(']') {
            return Err(PathParseError::MalformedBrackets(raw.to_string()));
        }
        return Ok(PathSegment::Key(raw.to_string()));
    };

    // Exactly one bracket pair, closing at the very end of the segment.
    let key = &raw[..open];
    let rest = &raw[open + 1..];
    if key.is_empty() || !rest.ends_with(']') {
        return Err(PathParseError::MalformedBrackets(raw.to_string()));
    }

    let name = &rest[..rest.len() - 1];
    if name.is_empty() || name.contains('[') || name.contains(']') {
        return Err(PathParseError::MalformedBrackets(raw.to_string()));
    }

    Ok(PathSegment::IndexByName {
        key: key.to_string(),
        name: name.to_string(),
    })
}
