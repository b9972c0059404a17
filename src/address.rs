//! The address value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::constants::PARTICIPANT_SEPARATOR;
use crate::error::AddressError;
use crate::grammar::Grammar;
use crate::location::AddressComponents;
use crate::parser::{parse_address_components_with, split_address};

/// A validated FAME address: `participant@location`.
///
/// The value holds the canonical string and the grammar it was validated
/// under. Equality, ordering and hashing are defined over the string alone.
/// Parsing applies no normalization, so the string form of a parsed address
/// is exactly its input.
///
/// # Examples
///
/// ```
/// use fame_address::FameAddress;
///
/// let addr = FameAddress::parse("alice@fame.fabric/api").unwrap();
/// assert_eq!(addr.participant(), "alice");
/// assert_eq!(addr.location(), "fame.fabric/api");
/// assert_eq!(addr.to_string(), "alice@fame.fabric/api");
/// ```
#[derive(Debug, Clone)]
pub struct FameAddress {
    normalized: String,
    /// Byte offset of the '@' separating participant from location
    separator: usize,
    grammar: Grammar,
}

impl FameAddress {
    /// Parses and validates an address under the standard grammar.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` for any grammar violation; see
    /// [`parse_address`](crate::parse_address).
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        Self::parse_with(input, &Grammar::STANDARD)
    }

    /// Parses and validates an address under a custom grammar.
    ///
    /// # Errors
    ///
    /// See [`FameAddress::parse`].
    pub fn parse_with(input: &str, grammar: &Grammar) -> Result<Self, AddressError> {
        let (participant, _) = split_address(input, grammar)?;
        Ok(Self {
            normalized: input.to_string(),
            separator: participant.as_str().len(),
            grammar: *grammar,
        })
    }

    /// Joins parts the caller has already validated.
    pub(crate) fn from_validated(participant: &str, location: &str) -> Self {
        debug_assert!(
            !participant.contains(PARTICIPANT_SEPARATOR),
            "participant {participant:?} contains '@'"
        );
        let mut normalized = String::with_capacity(participant.len() + 1 + location.len());
        normalized.push_str(participant);
        normalized.push(PARTICIPANT_SEPARATOR);
        normalized.push_str(location);
        Self {
            normalized,
            separator: participant.len(),
            grammar: Grammar::STANDARD,
        }
    }

    /// Records the grammar the parts were validated under.
    pub(crate) fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Returns the participant portion.
    #[must_use]
    pub fn participant(&self) -> &str {
        &self.normalized[..self.separator]
    }

    /// Returns the location portion.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.normalized[self.separator + 1..]
    }

    /// Returns the grammar this address was validated under.
    ///
    /// Addresses assembled by the formatters carry the standard grammar.
    #[must_use]
    pub const fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Decomposes the address into typed components under its own grammar.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` if the address was assembled by
    /// [`format_address`](crate::format_address) from parts that do not
    /// satisfy the standard grammar. Addresses obtained from
    /// [`FameAddress::parse_with`] or the builder always decompose.
    pub fn components(&self) -> Result<AddressComponents, AddressError> {
        self.components_with(&self.grammar)
    }

    /// Decomposes the address into typed components under `grammar`.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` if the address does not satisfy `grammar`.
    pub fn components_with(&self, grammar: &Grammar) -> Result<AddressComponents, AddressError> {
        parse_address_components_with(&self.normalized, grammar)
    }

    /// Returns the canonical string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Consumes the address, returning the canonical string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.normalized
    }
}

/// Parses `raw` into a [`FameAddress`].
///
/// # Errors
///
/// See [`FameAddress::parse`].
///
/// # Examples
///
/// ```
/// use fame_address::make_fame_address;
///
/// let addr = make_fame_address("alice@/").unwrap();
/// assert_eq!(addr.to_string(), "alice@/");
/// ```
pub fn make_fame_address(raw: &str) -> Result<FameAddress, AddressError> {
    FameAddress::parse(raw)
}

impl PartialEq for FameAddress {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for FameAddress {}

impl Hash for FameAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl PartialOrd for FameAddress {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FameAddress {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

impl fmt::Display for FameAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for FameAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for FameAddress {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for FameAddress {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<&AddressComponents> for FameAddress {
    fn from(components: &AddressComponents) -> Self {
        components.to_address()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FameAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FameAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
