//! Host portion of an address location.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host  = label *( "." label )
//! label = 1*( ALPHA / DIGIT / "-" )
//! ```
//!
//! Purely numeric labels are ordinary labels, so `127.0.0.1` is a four-label
//! host. Hosts are kept exactly as written; no case folding is applied.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::HOST_SEPARATOR;
use crate::error::{AddressError, AddressErrorKind};
use crate::grammar::Grammar;
use crate::segment::{SegmentClass, SegmentKind, classify};

/// A validated, dot-separated host name.
///
/// # Examples
///
/// ```
/// use fame_address::Host;
///
/// let host = Host::parse("child.fame.fabric").unwrap();
/// assert_eq!(host.labels(), &["child", "fame", "fabric"]);
///
/// let parent = Host::parse("fame.fabric").unwrap();
/// assert!(host.is_subdomain_of(&parent));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Host {
    labels: Vec<String>,
    normalized: String,
}

impl Host {
    /// Parses a host under the standard grammar.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` with kind:
    /// - `EmptyHostSegment` if any label is empty (including empty input)
    /// - `InvalidHostSegment` if any label contains a disallowed character
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        Self::parse_with(input, &Grammar::STANDARD)
    }

    /// Parses a host under a custom grammar.
    ///
    /// # Errors
    ///
    /// See [`Host::parse`].
    pub fn parse_with(input: &str, grammar: &Grammar) -> Result<Self, AddressError> {
        Self::parse_inner(input, grammar).map_err(|kind| AddressError::new(input, kind))
    }

    pub(crate) fn parse_inner(input: &str, grammar: &Grammar) -> Result<Self, AddressErrorKind> {
        let mut labels = Vec::new();
        for (index, label) in input.split(HOST_SEPARATOR).enumerate() {
            if label.is_empty() {
                return Err(AddressErrorKind::EmptyHostSegment { index });
            }
            if let SegmentClass::Invalid(reason) = classify(label, SegmentKind::HostLabel, grammar) {
                return Err(AddressErrorKind::InvalidHostSegment {
                    segment: label.to_string(),
                    index,
                    reason,
                });
            }
            labels.push(label.to_string());
        }

        Ok(Self {
            labels,
            normalized: input.to_string(),
        })
    }

    /// Returns the labels, leftmost first.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if this host lies strictly beneath `parent`.
    ///
    /// `child.fame.fabric` is a subdomain of `fame.fabric`; a host is not a
    /// subdomain of itself.
    #[must_use]
    pub fn is_subdomain_of(&self, parent: &Host) -> bool {
        self.labels.len() > parent.labels.len() && self.labels.ends_with(&parent.labels)
    }

    /// Returns the host as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for Host {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for Host {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Host {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Host {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
