//! Path portion of an address location.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::PATH_SEPARATOR;
use crate::error::{AddressError, AddressErrorKind};
use crate::grammar::Grammar;
use crate::segment::{SegmentClass, SegmentKind, classify};

/// A validated, slash-separated path.
///
/// A path always begins with `/`. The root `/` on its own has no segments.
/// Every other segment must be non-empty and match the path grammar; the
/// wildcard `*` is recognized but rejected, because addresses name concrete
/// endpoints.
///
/// # Examples
///
/// ```
/// use fame_address::Path;
///
/// let path = Path::parse("/api/v1/service").unwrap();
/// assert_eq!(path.segments(), &["api", "v1", "service"]);
///
/// let root = Path::parse("/").unwrap();
/// assert!(root.is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<String>,
    normalized: String,
}

impl Path {
    /// Parses a path under the standard grammar.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` with kind:
    /// - `MissingPathRoot` if the input does not start with `/`
    /// - `EmptyPathSegment` on `//` or a trailing `/` after a segment
    /// - `WildcardNotAllowed` if a segment is exactly `*`
    /// - `InvalidPathSegment` for any other malformed segment, including `**`
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        Self::parse_with(input, &Grammar::STANDARD)
    }

    /// Parses a path under a custom grammar.
    ///
    /// # Errors
    ///
    /// See [`Path::parse`].
    pub fn parse_with(input: &str, grammar: &Grammar) -> Result<Self, AddressError> {
        Self::parse_inner(input, grammar).map_err(|kind| AddressError::new(input, kind))
    }

    pub(crate) fn parse_inner(input: &str, grammar: &Grammar) -> Result<Self, AddressErrorKind> {
        let rest = input
            .strip_prefix(PATH_SEPARATOR)
            .ok_or(AddressErrorKind::MissingPathRoot)?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for (index, segment) in rest.split(PATH_SEPARATOR).enumerate() {
                if segment.is_empty() {
                    return Err(AddressErrorKind::EmptyPathSegment { index });
                }
                match classify(segment, SegmentKind::PathLabel, grammar) {
                    SegmentClass::Valid => segments.push(segment.to_string()),
                    SegmentClass::Wildcard => {
                        return Err(AddressErrorKind::WildcardNotAllowed {
                            segment: segment.to_string(),
                            index,
                        });
                    }
                    SegmentClass::Invalid(reason) => {
                        return Err(AddressErrorKind::InvalidPathSegment {
                            segment: segment.to_string(),
                            index,
                            reason,
                        });
                    }
                }
            }
        }

        Ok(Self {
            segments,
            normalized: input.to_string(),
        })
    }

    /// Returns the root path `/`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
            normalized: PATH_SEPARATOR.to_string(),
        }
    }

    /// Returns the segments after the root.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the root path `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns true if this path starts with the given prefix path.
    ///
    /// Every path starts with the root.
    #[must_use]
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Returns the path as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for Path {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for Path {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
