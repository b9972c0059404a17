//! Configurable character sets for address segments.
//!
//! Every segment kind accepts ASCII letters and digits. On top of that each
//! kind admits a small set of connector characters, held in a [`CharClass`].
//! The defaults are:
//!
//! | Segment | Connectors |
//! |---------|------------|
//! | Participant | `-` `_` `.` |
//! | Host label | `-` |
//! | Path segment | `-` `_` `.` |
//!
//! The separators `@` and `/` and the wildcard character `*` are reserved and
//! can never be admitted.

use std::fmt;

use crate::constants::RESERVED_CHARS;

/// A set of characters accepted inside one kind of segment.
///
/// ASCII alphanumerics are always members. Additional members are printable
/// ASCII connector characters, stored as a bitset so the class is `Copy` and
/// usable in `const` contexts.
///
/// # Examples
///
/// ```
/// use fame_address::CharClass;
///
/// let class = CharClass::ALPHANUMERIC.with('-');
/// assert!(class.contains('a'));
/// assert!(class.contains('-'));
/// assert!(!class.contains('_'));
///
/// // Reserved characters are silently refused.
/// assert!(!class.with('/').contains('/'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharClass {
    connectors: u128,
}

impl CharClass {
    /// ASCII letters and digits only.
    pub const ALPHANUMERIC: Self = Self { connectors: 0 };

    /// Identifier characters: alphanumerics plus `-`, `_` and `.`.
    pub const IDENTIFIER: Self = Self::ALPHANUMERIC.with('-').with('_').with('.');

    /// DNS-label characters: alphanumerics plus `-`.
    pub const DNS_LABEL: Self = Self::ALPHANUMERIC.with('-');

    /// Returns a class that also admits `c`.
    ///
    /// Characters that are not printable ASCII, or that are reserved by the
    /// address grammar, are ignored.
    #[must_use]
    pub const fn with(self, c: char) -> Self {
        if !c.is_ascii_graphic() || c.is_ascii_alphanumeric() || is_reserved(c) {
            return self;
        }
        Self {
            connectors: self.connectors | (1u128 << c as u32),
        }
    }

    /// Returns a class that also admits every character in `chars`.
    #[must_use]
    pub const fn with_all(self, chars: &[char]) -> Self {
        let mut class = self;
        let mut i = 0;
        while i < chars.len() {
            class = class.with(chars[i]);
            i += 1;
        }
        class
    }

    /// Returns a class that no longer admits the connector `c`.
    ///
    /// Alphanumerics cannot be removed.
    #[must_use]
    pub const fn without(self, c: char) -> Self {
        if !c.is_ascii() {
            return self;
        }
        Self {
            connectors: self.connectors & !(1u128 << c as u32),
        }
    }

    /// Returns true if `c` is a member of this class.
    #[must_use]
    pub const fn contains(self, c: char) -> bool {
        if c.is_ascii_alphanumeric() {
            return true;
        }
        c.is_ascii() && self.connectors & (1u128 << c as u32) != 0
    }

    /// Returns the admitted connector characters in ASCII order.
    #[must_use]
    pub fn connectors(self) -> String {
        (0u8..128)
            .map(char::from)
            .filter(|&c| !c.is_ascii_alphanumeric() && self.contains(c))
            .collect()
    }
}

const fn is_reserved(c: char) -> bool {
    let mut i = 0;
    while i < RESERVED_CHARS.len() {
        if RESERVED_CHARS[i] == c {
            return true;
        }
        i += 1;
    }
    false
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[A-Za-z0-9{}]", self.connectors())
    }
}

/// Character-set configuration for the address grammar.
///
/// The plain entry points ([`parse_address`](crate::parse_address) and
/// friends) use [`Grammar::STANDARD`]. Pass a custom grammar to the `_with`
/// variants to widen or narrow what a deployment accepts.
///
/// # Examples
///
/// ```
/// use fame_address::{parse_address_with, CharClass, Grammar};
///
/// let grammar = Grammar::new()
///     .with_participant(CharClass::IDENTIFIER.with('~'));
///
/// let (participant, _) = parse_address_with("~alice@/", &grammar).unwrap();
/// assert_eq!(participant, "~alice");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Grammar {
    /// Characters accepted in the participant token.
    ///
    /// Default: [`CharClass::IDENTIFIER`]
    pub participant: CharClass,

    /// Characters accepted in each host label.
    ///
    /// Default: [`CharClass::DNS_LABEL`]
    pub host_label: CharClass,

    /// Characters accepted in each path segment.
    ///
    /// Default: [`CharClass::IDENTIFIER`]
    pub path_segment: CharClass,
}

impl Grammar {
    /// The grammar used by the plain entry points.
    pub const STANDARD: Self = Self {
        participant: CharClass::IDENTIFIER,
        host_label: CharClass::DNS_LABEL,
        path_segment: CharClass::IDENTIFIER,
    };

    /// Creates the standard grammar.
    #[must_use]
    pub const fn new() -> Self {
        Self::STANDARD
    }

    /// Sets the participant character class.
    #[must_use]
    pub const fn with_participant(mut self, class: CharClass) -> Self {
        self.participant = class;
        self
    }

    /// Sets the host label character class.
    #[must_use]
    pub const fn with_host_label(mut self, class: CharClass) -> Self {
        self.host_label = class;
        self
    }

    /// Sets the path segment character class.
    #[must_use]
    pub const fn with_path_segment(mut self, class: CharClass) -> Self {
        self.path_segment = class;
        self
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CharClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.connectors())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CharClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut class = Self::ALPHANUMERIC;
        for c in s.chars() {
            if !c.is_ascii_graphic() || is_reserved(c) {
                return Err(serde::de::Error::custom(format!(
                    "character '{c}' cannot be used as a segment connector"
                )));
            }
            class = class.with(c);
        }
        Ok(class)
    }
}
