//! Participant token of an address.

use std::fmt;
use std::str::FromStr;

use crate::error::{AddressError, AddressErrorKind, SegmentError};
use crate::grammar::Grammar;
use crate::segment::{SegmentClass, SegmentKind, classify};

/// A validated participant: the identity portion before `@`.
///
/// The participant is validated as a single token; it is not split on `.`.
///
/// # Examples
///
/// ```
/// use fame_address::Participant;
///
/// let p = Participant::parse("worker-1").unwrap();
/// assert_eq!(p.as_str(), "worker-1");
///
/// assert!(Participant::parse("alice!").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Participant(String);

impl Participant {
    /// Parses a participant under the standard grammar.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` with kind `InvalidParticipant` if the token is
    /// empty or contains a character outside the participant class.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        Self::parse_with(input, &Grammar::STANDARD)
    }

    /// Parses a participant under a custom grammar.
    ///
    /// # Errors
    ///
    /// See [`Participant::parse`].
    pub fn parse_with(input: &str, grammar: &Grammar) -> Result<Self, AddressError> {
        Self::parse_inner(input, grammar).map_err(|kind| AddressError::new(input, kind))
    }

    pub(crate) fn parse_inner(input: &str, grammar: &Grammar) -> Result<Self, AddressErrorKind> {
        let reason = match classify(input, SegmentKind::Participant, grammar) {
            SegmentClass::Valid => return Ok(Self(input.to_string())),
            SegmentClass::Invalid(reason) => reason,
            // Participants never classify as wildcards; reject rather than admit one.
            SegmentClass::Wildcard => SegmentError::InvalidChar {
                char: '*',
                position: 0,
            },
        };
        Err(AddressErrorKind::InvalidParticipant {
            participant: input.to_string(),
            reason,
        })
    }

    /// Returns the participant as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Participant {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Participant {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Participant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Participant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
