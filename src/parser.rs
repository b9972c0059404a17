//! Address parsing entry points.

use tracing::{debug, trace};

use crate::constants::PARTICIPANT_SEPARATOR;
use crate::error::{AddressError, AddressErrorKind};
use crate::grammar::Grammar;
use crate::location::{AddressComponents, Location};
use crate::participant::Participant;

/// Parses an address into its participant and location strings.
///
/// The location is fully validated but returned unchanged, without being
/// decomposed. Use [`parse_address_components`] for the typed form.
///
/// # Errors
///
/// Returns `AddressError` if:
/// - There is no `@` (`MissingSeparator`)
/// - Nothing follows the `@` (`EmptyLocation`)
/// - The participant is malformed (`InvalidParticipant`)
/// - Any host label or path segment is malformed
///
/// # Examples
///
/// ```
/// use fame_address::parse_address;
///
/// let (participant, location) = parse_address("worker@/api/v1/service").unwrap();
/// assert_eq!(participant, "worker");
/// assert_eq!(location, "/api/v1/service");
/// ```
pub fn parse_address(raw: &str) -> Result<(String, String), AddressError> {
    parse_address_with(raw, &Grammar::STANDARD)
}

/// Like [`parse_address`], under a custom grammar.
///
/// # Errors
///
/// See [`parse_address`].
pub fn parse_address_with(raw: &str, grammar: &Grammar) -> Result<(String, String), AddressError> {
    let (participant, location) = split_address(raw, grammar)?;
    Ok((participant.to_string(), location.to_string()))
}

/// Parses an address into a participant and a typed host and/or path.
///
/// # Errors
///
/// Same as [`parse_address`]. Path segments distinguish the wildcard `*`
/// (`WildcardNotAllowed`) from other malformed tokens such as `**`
/// (`InvalidPathSegment`).
///
/// # Examples
///
/// ```
/// use fame_address::{parse_address_components, AddressErrorKind};
///
/// let parts = parse_address_components("alice@/").unwrap();
/// assert!(parts.host().is_none());
/// assert_eq!(parts.path().unwrap().as_str(), "/");
///
/// let err = parse_address_components("alice@/api/*").unwrap_err();
/// assert!(matches!(err.kind, AddressErrorKind::WildcardNotAllowed { .. }));
/// ```
pub fn parse_address_components(raw: &str) -> Result<AddressComponents, AddressError> {
    parse_address_components_with(raw, &Grammar::STANDARD)
}

/// Like [`parse_address_components`], under a custom grammar.
///
/// # Errors
///
/// See [`parse_address_components`].
pub fn parse_address_components_with(
    raw: &str,
    grammar: &Grammar,
) -> Result<AddressComponents, AddressError> {
    let (participant, location) = split_address(raw, grammar)?;
    Ok(AddressComponents::new(participant, location))
}

pub(crate) fn split_address(
    raw: &str,
    grammar: &Grammar,
) -> Result<(Participant, Location), AddressError> {
    match split_inner(raw, grammar) {
        Ok(parts) => {
            trace!(address = raw, "parsed address");
            Ok(parts)
        }
        Err(kind) => {
            debug!(input = raw, error = %kind, "rejected address");
            Err(AddressError::new(raw, kind))
        }
    }
}

fn split_inner(raw: &str, grammar: &Grammar) -> Result<(Participant, Location), AddressErrorKind> {
    let (participant, location) = raw
        .split_once(PARTICIPANT_SEPARATOR)
        .ok_or(AddressErrorKind::MissingSeparator)?;

    if location.is_empty() {
        return Err(AddressErrorKind::EmptyLocation);
    }

    let participant = Participant::parse_inner(participant, grammar)?;
    let location = Location::parse_inner(location, grammar)?;
    Ok((participant, location))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SegmentError;
    use crate::grammar::CharClass;

    fn kind_of(raw: &str) -> AddressErrorKind {
        parse_address_components(raw).unwrap_err().kind
    }

    #[test]
    fn parse_root_path() {
        let (p, l) = parse_address("alice@/").unwrap();
        assert_eq!((p.as_str(), l.as_str()), ("alice", "/"));
    }

    #[test]
    fn parse_host_path() {
        let (p, l) = parse_address("alice@fame.fabric/api").unwrap();
        assert_eq!((p.as_str(), l.as_str()), ("alice", "fame.fabric/api"));
    }

    #[test]
    fn missing_separator() {
        assert_eq!(kind_of("alice"), AddressErrorKind::MissingSeparator);
    }

    #[test]
    fn empty_location_checked_before_participant() {
        assert_eq!(kind_of("alice@"), AddressErrorKind::EmptyLocation);
        assert_eq!(kind_of("alice!@"), AddressErrorKind::EmptyLocation);
    }

    #[test]
    fn empty_participant() {
        assert_eq!(
            kind_of("@/"),
            AddressErrorKind::InvalidParticipant {
                participant: String::new(),
                reason: SegmentError::Empty,
            }
        );
    }

    #[test]
    fn first_at_splits() {
        assert!(matches!(
            kind_of("alice@host@other"),
            AddressErrorKind::InvalidHostSegment { .. }
        ));
    }

    #[test]
    fn error_keeps_input() {
        let err = parse_address("alice@/bad!path").unwrap_err();
        assert_eq!(err.input, "alice@/bad!path");
    }

    #[test]
    fn wildcard_after_host() {
        assert_eq!(
            kind_of("alice@fame.fabric/api/*"),
            AddressErrorKind::WildcardNotAllowed {
                segment: "*".to_string(),
                index: 1,
            }
        );
    }

    #[test]
    fn custom_grammar_narrows_host() {
        let grammar = Grammar::new().with_host_label(CharClass::ALPHANUMERIC);
        assert!(parse_address_with("alice@node-1.fabric", &grammar).is_err());
        assert!(parse_address("alice@node-1.fabric").is_ok());
    }

    #[test]
    fn custom_grammar_components() {
        let grammar = Grammar::new().with_path_segment(CharClass::IDENTIFIER.with('~'));
        let parts = parse_address_components_with("alice@/~home", &grammar).unwrap();
        assert_eq!(parts.path().unwrap().segments(), &["~home"]);
    }
}
