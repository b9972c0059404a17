//! Classification of single address segments.
//!
//! A segment is one token of an address: the participant, one `.`-delimited
//! host label, or one `/`-delimited path segment. Classification is a total
//! function; it never fails and never allocates.

use crate::constants::WILDCARD;
use crate::error::SegmentError;
use crate::grammar::Grammar;

/// Which part of an address a segment comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// The participant token before '@'
    Participant,
    /// One '.'-delimited label of a host
    HostLabel,
    /// One '/'-delimited segment of a path
    PathLabel,
}

/// The result of classifying a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentClass {
    /// Matches the grammar for its kind
    Valid,
    /// The recognized wildcard token; only path segments classify this way
    Wildcard,
    /// Does not match the grammar
    Invalid(SegmentError),
}

impl SegmentClass {
    /// Returns true for [`SegmentClass::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Classifies a segment of the given kind.
///
/// Only path segments recognize the wildcard, and only the exact token `*`.
/// The token `**` is not part of the grammar, so it classifies as
/// [`SegmentClass::Invalid`] like any other malformed segment. A `*` in a
/// host label or participant is an ordinary invalid character.
///
/// # Examples
///
/// ```
/// use fame_address::{classify, Grammar, SegmentClass, SegmentKind};
///
/// let g = Grammar::STANDARD;
/// assert_eq!(classify("api", SegmentKind::PathLabel, &g), SegmentClass::Valid);
/// assert_eq!(classify("*", SegmentKind::PathLabel, &g), SegmentClass::Wildcard);
/// assert!(matches!(classify("**", SegmentKind::PathLabel, &g), SegmentClass::Invalid(_)));
/// assert!(matches!(classify("*", SegmentKind::HostLabel, &g), SegmentClass::Invalid(_)));
/// ```
#[must_use]
pub fn classify(segment: &str, kind: SegmentKind, grammar: &Grammar) -> SegmentClass {
    if segment.is_empty() {
        return SegmentClass::Invalid(SegmentError::Empty);
    }

    if kind == SegmentKind::PathLabel && segment == WILDCARD {
        return SegmentClass::Wildcard;
    }

    let class = match kind {
        SegmentKind::Participant => grammar.participant,
        SegmentKind::HostLabel => grammar.host_label,
        SegmentKind::PathLabel => grammar.path_segment,
    };

    match segment.chars().enumerate().find(|&(_, c)| !class.contains(c)) {
        Some((position, char)) => SegmentClass::Invalid(SegmentError::InvalidChar { char, position }),
        None => SegmentClass::Valid,
    }
}

/// Returns true if `s` is a valid participant under the standard grammar.
#[must_use]
pub fn is_valid_participant(s: &str) -> bool {
    classify(s, SegmentKind::Participant, &Grammar::STANDARD).is_valid()
}

/// Returns true if `s` is a valid host label under the standard grammar.
#[must_use]
pub fn is_valid_host_label(s: &str) -> bool {
    classify(s, SegmentKind::HostLabel, &Grammar::STANDARD).is_valid()
}

/// Returns true if `s` is a valid, non-wildcard path segment under the
/// standard grammar.
#[must_use]
pub fn is_valid_path_segment(s: &str) -> bool {
    classify(s, SegmentKind::PathLabel, &Grammar::STANDARD).is_valid()
}
