//! Typestate builder for constructing [`FameAddress`] instances.
//!
//! The builder uses phantom types so that an address can only be built once
//! a participant and at least one of host or path have been supplied.

use std::marker::PhantomData;

use crate::address::FameAddress;
use crate::error::AddressError;
use crate::grammar::Grammar;
use crate::host::Host;
use crate::location::{AddressComponents, Location};
use crate::participant::Participant;
use crate::path::Path;

/// Marker: No components set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: Participant has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasParticipant;

/// Marker: Participant and at least one location part are set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

/// A typestate builder for [`FameAddress`].
///
/// # Type State
///
/// - [`Empty`]: nothing set
/// - [`HasParticipant`]: participant set, location missing
/// - [`Ready`]: participant and host and/or path set; `build()` available
///
/// In [`Ready`] the other location part may still be added, so host and
/// path can be given in either order.
///
/// # Examples
///
/// ```
/// use fame_address::FameAddressBuilder;
///
/// let addr = FameAddressBuilder::new()
///     .try_participant("worker")?
///     .try_path("/service/v1")?
///     .try_host("child.fame.fabric")?
///     .build();
///
/// assert_eq!(addr.to_string(), "worker@child.fame.fabric/service/v1");
/// # Ok::<(), fame_address::AddressError>(())
/// ```
///
/// # Compile-Time Safety
///
/// ```compile_fail
/// use fame_address::{FameAddressBuilder, Participant};
///
/// // Error: no host or path supplied
/// let addr = FameAddressBuilder::new()
///     .participant(Participant::parse("alice").unwrap())
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct FameAddressBuilder<State = Empty> {
    grammar: Grammar,
    participant: Option<Participant>,
    location: Option<Location>,
    _state: PhantomData<State>,
}

impl FameAddressBuilder<Empty> {
    /// Creates a new builder using the standard grammar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grammar: Grammar::STANDARD,
            participant: None,
            location: None,
            _state: PhantomData,
        }
    }

    /// Sets the grammar used by the `try_*` methods.
    #[must_use]
    pub fn grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Sets the participant and advances to [`HasParticipant`].
    #[must_use]
    pub fn participant(self, participant: Participant) -> FameAddressBuilder<HasParticipant> {
        FameAddressBuilder {
            grammar: self.grammar,
            participant: Some(participant),
            location: None,
            _state: PhantomData,
        }
    }

    /// Parses and sets the participant.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` with kind `InvalidParticipant` if `s` is not a
    /// valid participant.
    pub fn try_participant(self, s: &str) -> Result<FameAddressBuilder<HasParticipant>, AddressError> {
        let participant = Participant::parse_with(s, &self.grammar)?;
        Ok(self.participant(participant))
    }
}

impl Default for FameAddressBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl FameAddressBuilder<HasParticipant> {
    /// Sets the host and advances to [`Ready`].
    #[must_use]
    pub fn host(self, host: Host) -> FameAddressBuilder<Ready> {
        self.advance(Location::Host(host))
    }

    /// Sets the path and advances to [`Ready`].
    #[must_use]
    pub fn path(self, path: Path) -> FameAddressBuilder<Ready> {
        self.advance(Location::Path(path))
    }

    /// Parses and sets the host.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` if `s` is not a valid host.
    pub fn try_host(self, s: &str) -> Result<FameAddressBuilder<Ready>, AddressError> {
        let host = Host::parse_with(s, &self.grammar)?;
        Ok(self.host(host))
    }

    /// Parses and sets the path.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` if `s` is not a valid path.
    pub fn try_path(self, s: &str) -> Result<FameAddressBuilder<Ready>, AddressError> {
        let path = Path::parse_with(s, &self.grammar)?;
        Ok(self.path(path))
    }

    fn advance(self, location: Location) -> FameAddressBuilder<Ready> {
        FameAddressBuilder {
            grammar: self.grammar,
            participant: self.participant,
            location: Some(location),
            _state: PhantomData,
        }
    }
}

impl FameAddressBuilder<Ready> {
    /// Sets or replaces the host, keeping any path.
    #[must_use]
    pub fn host(mut self, host: Host) -> Self {
        let path = self.location.take().and_then(|loc| loc.into_parts().1);
        self.location = Location::from_parts(Some(host), path);
        self
    }

    /// Sets or replaces the path, keeping any host.
    #[must_use]
    pub fn path(mut self, path: Path) -> Self {
        let host = self.location.take().and_then(|loc| loc.into_parts().0);
        self.location = Location::from_parts(host, Some(path));
        self
    }

    /// Parses and sets or replaces the host.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` if `s` is not a valid host.
    pub fn try_host(self, s: &str) -> Result<Self, AddressError> {
        let host = Host::parse_with(s, &self.grammar)?;
        Ok(self.host(host))
    }

    /// Parses and sets or replaces the path.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` if `s` is not a valid path.
    pub fn try_path(self, s: &str) -> Result<Self, AddressError> {
        let path = Path::parse_with(s, &self.grammar)?;
        Ok(self.path(path))
    }

    /// Returns the typed components that `build()` would assemble.
    ///
    /// # Panics
    ///
    /// Will not panic: the typestate guarantees participant and location are
    /// set in the [`Ready`] state.
    #[must_use]
    pub fn components(self) -> AddressComponents {
        let participant = self
            .participant
            .expect("participant set in HasParticipant state");
        let location = self.location.expect("location set in Ready state");
        AddressComponents::new(participant, location)
    }

    /// Builds the address.
    ///
    /// # Panics
    ///
    /// Will not panic; see [`FameAddressBuilder::components`].
    #[must_use]
    pub fn build(self) -> FameAddress {
        let grammar = self.grammar;
        self.components().to_address().with_grammar(grammar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressErrorKind;
    use crate::grammar::CharClass;

    fn alice() -> Participant {
        Participant::parse("alice").unwrap()
    }

    #[test]
    fn new_creates_empty_builder() {
        let builder = FameAddressBuilder::new();
        assert!(builder.participant.is_none());
        assert!(builder.location.is_none());
    }

    #[test]
    fn build_path_only() {
        let addr = FameAddressBuilder::new()
            .participant(alice())
            .path(Path::root())
            .build();
        assert_eq!(addr.to_string(), "alice@/");
    }

    #[test]
    fn build_host_only() {
        let addr = FameAddressBuilder::new()
            .participant(alice())
            .host(Host::parse("fame.fabric").unwrap())
            .build();
        assert_eq!(addr.to_string(), "alice@fame.fabric");
    }

    #[test]
    fn host_then_path() {
        let addr = FameAddressBuilder::new()
            .participant(alice())
            .host(Host::parse("fame.fabric").unwrap())
            .path(Path::parse("/api").unwrap())
            .build();
        assert_eq!(addr.to_string(), "alice@fame.fabric/api");
    }

    #[test]
    fn later_host_replaces_earlier() {
        let addr = FameAddressBuilder::new()
            .participant(alice())
            .try_host("a.fabric")
            .unwrap()
            .try_path("/x")
            .unwrap()
            .try_host("b.fabric")
            .unwrap()
            .build();
        assert_eq!(addr.to_string(), "alice@b.fabric/x");
    }

    #[test]
    fn try_path_rejects_wildcard() {
        let err = FameAddressBuilder::new()
            .participant(alice())
            .try_path("/api/*")
            .unwrap_err();
        assert!(matches!(err.kind, AddressErrorKind::WildcardNotAllowed { .. }));
    }

    #[test]
    fn try_participant_rejects_bang() {
        let err = FameAddressBuilder::new().try_participant("alice!").unwrap_err();
        assert!(matches!(err.kind, AddressErrorKind::InvalidParticipant { .. }));
    }

    #[test]
    fn grammar_applies_to_try_methods() {
        let grammar = Grammar::new().with_participant(CharClass::IDENTIFIER.with('+'));
        let addr = FameAddressBuilder::new()
            .grammar(grammar)
            .try_participant("a+b")
            .unwrap()
            .try_host("fame.fabric")
            .unwrap()
            .build();
        assert_eq!(addr.participant(), "a+b");
    }

    #[test]
    fn built_address_decomposes_under_builder_grammar() {
        let grammar = Grammar::new().with_participant(CharClass::IDENTIFIER.with('~'));
        let addr = FameAddressBuilder::new()
            .grammar(grammar)
            .try_participant("~bob")
            .unwrap()
            .try_host("fame.fabric")
            .unwrap()
            .build();
        assert_eq!(addr.to_string(), "~bob@fame.fabric");

        let parts = addr.components().unwrap();
        assert_eq!(parts.participant().as_str(), "~bob");
        assert_eq!(parts.host().unwrap().as_str(), "fame.fabric");
    }

    #[test]
    fn components_match_build() {
        let builder = FameAddressBuilder::new()
            .participant(alice())
            .try_host("fame.fabric")
            .unwrap();
        let parts = builder.clone().components();
        assert_eq!(parts.to_address(), builder.build());
    }
}
