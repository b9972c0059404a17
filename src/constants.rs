//! Separators and reserved tokens of the address grammar.

/// Separates the participant from the location.
pub const PARTICIPANT_SEPARATOR: char = '@';

/// Separates host labels.
pub const HOST_SEPARATOR: char = '.';

/// Separates path segments and marks the start of a path.
pub const PATH_SEPARATOR: char = '/';

/// The single-segment wildcard token.
///
/// Recognized by the path grammar but rejected in physical addresses.
pub const WILDCARD: &str = "*";

/// The multi-segment wildcard token.
///
/// Not part of the physical address grammar at all; it is rejected as an
/// ordinary malformed segment rather than as a wildcard.
pub const DOUBLE_WILDCARD: &str = "**";

/// Characters that no character class may admit.
pub const RESERVED_CHARS: [char; 3] = [PARTICIPANT_SEPARATOR, PATH_SEPARATOR, '*'];
