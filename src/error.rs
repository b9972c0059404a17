//! Error types for address parsing and formatting.

use std::fmt;

/// Errors that can occur when parsing or formatting an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressError {
    /// The input that was rejected
    pub input: String,
    /// The specific error that occurred
    pub kind: AddressErrorKind,
}

impl AddressError {
    pub(crate) fn new(input: &str, kind: AddressErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// Returns the error kind.
    #[must_use]
    pub const fn kind(&self) -> &AddressErrorKind {
        &self.kind
    }
}

/// Specific address error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressErrorKind {
    /// No '@' between participant and location
    MissingSeparator,
    /// Nothing follows the '@'
    EmptyLocation,
    /// Participant token does not match the participant grammar
    InvalidParticipant {
        /// The rejected participant
        participant: String,
        /// Reason for invalidity
        reason: SegmentError,
    },
    /// A host label contains a disallowed character
    InvalidHostSegment {
        /// The rejected label
        segment: String,
        /// Index of the label within the host
        index: usize,
        /// Reason for invalidity
        reason: SegmentError,
    },
    /// Adjacent, leading or trailing '.' in the host
    EmptyHostSegment {
        /// Index of the empty label within the host
        index: usize,
    },
    /// A path segment is neither a valid identifier nor a recognized wildcard
    InvalidPathSegment {
        /// The rejected segment
        segment: String,
        /// Index of the segment within the path (root excluded)
        index: usize,
        /// Reason for invalidity
        reason: SegmentError,
    },
    /// A path does not begin with '/'
    MissingPathRoot,
    /// Adjacent '/' or a trailing '/' after a segment
    EmptyPathSegment {
        /// Index of the empty segment within the path (root excluded)
        index: usize,
    },
    /// A path segment is the wildcard token, which physical addresses forbid
    WildcardNotAllowed {
        /// The wildcard segment
        segment: String,
        /// Index of the segment within the path (root excluded)
        index: usize,
    },
    /// Neither host nor path was supplied when formatting from components
    MissingLocationComponents,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid address '{}': {}", self.input, self.kind)
    }
}

impl fmt::Display for AddressErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => {
                write!(f, "missing '@' between participant and location")
            }
            Self::EmptyLocation => write!(f, "location after '@' cannot be empty"),
            Self::InvalidParticipant {
                participant,
                reason,
            } => write!(f, "bad participant '{participant}': {reason}"),
            Self::InvalidHostSegment {
                segment,
                index,
                reason,
            } => write!(f, "bad host segment '{segment}' at index {index}: {reason}"),
            Self::EmptyHostSegment { index } => {
                write!(
                    f,
                    "empty host segment at index {index} (consecutive dots or leading/trailing dot)"
                )
            }
            Self::InvalidPathSegment {
                segment,
                index,
                reason,
            } => write!(f, "bad path segment '{segment}' at index {index}: {reason}"),
            Self::MissingPathRoot => write!(f, "path must start with '/'"),
            Self::EmptyPathSegment { index } => {
                write!(
                    f,
                    "empty path segment at index {index} (consecutive or trailing slash)"
                )
            }
            Self::WildcardNotAllowed { segment, index } => {
                write!(
                    f,
                    "wildcard '{segment}' at index {index} not allowed in a physical address"
                )
            }
            Self::MissingLocationComponents => {
                write!(f, "at least one of host or path must be provided")
            }
        }
    }
}

impl std::error::Error for AddressError {}

/// Why a single segment failed its grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Segment is empty
    Empty,
    /// Character outside the segment's character class
    InvalidChar {
        /// The invalid character
        char: char,
        /// Character offset within the segment
        position: usize,
    },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "segment cannot be empty"),
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
        }
    }
}

impl std::error::Error for SegmentError {}
