//! Location shapes and decomposed address components.

use std::fmt;
use std::str::FromStr;

use crate::address::FameAddress;
use crate::constants::PATH_SEPARATOR;
use crate::error::{AddressError, AddressErrorKind};
use crate::grammar::Grammar;
use crate::host::Host;
use crate::participant::Participant;
use crate::path::Path;

/// The part of an address after `@`.
///
/// A location starting with `/` is path-only. Otherwise the first `/`, if
/// any, separates the host from the path, and the path keeps its leading
/// `/`.
///
/// # Examples
///
/// ```
/// use fame_address::Location;
///
/// let loc = Location::parse("fame.fabric/api").unwrap();
/// assert_eq!(loc.host().map(|h| h.as_str()), Some("fame.fabric"));
/// assert_eq!(loc.path().map(|p| p.as_str()), Some("/api"));
/// assert_eq!(loc.to_string(), "fame.fabric/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// Legacy path-only location, e.g. `/api/v1`
    Path(Path),
    /// Host-only location, e.g. `child.fame.fabric`
    Host(Host),
    /// Host followed by a path, e.g. `fame.fabric/api`
    HostPath(Host, Path),
}

impl Location {
    /// Parses a location under the standard grammar.
    ///
    /// # Errors
    ///
    /// Returns `AddressError` with kind `EmptyLocation` for empty input, or
    /// the host or path error of the first offending segment.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        Self::parse_with(input, &Grammar::STANDARD)
    }

    /// Parses a location under a custom grammar.
    ///
    /// # Errors
    ///
    /// See [`Location::parse`].
    pub fn parse_with(input: &str, grammar: &Grammar) -> Result<Self, AddressError> {
        Self::parse_inner(input, grammar).map_err(|kind| AddressError::new(input, kind))
    }

    pub(crate) fn parse_inner(input: &str, grammar: &Grammar) -> Result<Self, AddressErrorKind> {
        if input.is_empty() {
            return Err(AddressErrorKind::EmptyLocation);
        }

        if input.starts_with(PATH_SEPARATOR) {
            return Path::parse_inner(input, grammar).map(Self::Path);
        }

        match input.find(PATH_SEPARATOR) {
            None => Host::parse_inner(input, grammar).map(Self::Host),
            Some(slash_idx) => {
                let host = Host::parse_inner(&input[..slash_idx], grammar)?;
                let path = Path::parse_inner(&input[slash_idx..], grammar)?;
                Ok(Self::HostPath(host, path))
            }
        }
    }

    /// Builds a location from optional parts.
    ///
    /// Returns `None` when both parts are absent.
    #[must_use]
    pub fn from_parts(host: Option<Host>, path: Option<Path>) -> Option<Self> {
        match (host, path) {
            (Some(host), Some(path)) => Some(Self::HostPath(host, path)),
            (Some(host), None) => Some(Self::Host(host)),
            (None, Some(path)) => Some(Self::Path(path)),
            (None, None) => None,
        }
    }

    /// Returns the host, if this location has one.
    #[must_use]
    pub const fn host(&self) -> Option<&Host> {
        match self {
            Self::Host(host) | Self::HostPath(host, _) => Some(host),
            Self::Path(_) => None,
        }
    }

    /// Returns the path, if this location has one.
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(path) | Self::HostPath(_, path) => Some(path),
            Self::Host(_) => None,
        }
    }

    /// Splits the location into its optional host and path.
    #[must_use]
    pub fn into_parts(self) -> (Option<Host>, Option<Path>) {
        match self {
            Self::Path(path) => (None, Some(path)),
            Self::Host(host) => (Some(host), None),
            Self::HostPath(host, path) => (Some(host), Some(path)),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{path}"),
            Self::Host(host) => write!(f, "{host}"),
            Self::HostPath(host, path) => write!(f, "{host}{path}"),
        }
    }
}

impl FromStr for Location {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A fully decomposed address: participant plus typed location.
///
/// Produced by [`parse_address_components`](crate::parse_address_components).
/// The [`Location`] enum guarantees at least one of host and path is present.
///
/// # Examples
///
/// ```
/// use fame_address::parse_address_components;
///
/// let parts = parse_address_components("alice@fame.fabric/api").unwrap();
/// assert_eq!(parts.participant().as_str(), "alice");
/// assert_eq!(parts.host().map(|h| h.as_str()), Some("fame.fabric"));
/// assert_eq!(parts.path().map(|p| p.as_str()), Some("/api"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressComponents {
    participant: Participant,
    location: Location,
}

impl AddressComponents {
    /// Creates components from validated parts.
    #[must_use]
    pub const fn new(participant: Participant, location: Location) -> Self {
        Self {
            participant,
            location,
        }
    }

    /// Returns the participant.
    #[must_use]
    pub const fn participant(&self) -> &Participant {
        &self.participant
    }

    /// Returns the location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the host, if present.
    #[must_use]
    pub const fn host(&self) -> Option<&Host> {
        self.location.host()
    }

    /// Returns the path, if present.
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        self.location.path()
    }

    /// Reassembles the canonical address.
    #[must_use]
    pub fn to_address(&self) -> FameAddress {
        FameAddress::from_validated(self.participant.as_str(), &self.location.to_string())
    }

    /// Splits into participant, optional host and optional path.
    #[must_use]
    pub fn into_parts(self) -> (Participant, Option<Host>, Option<Path>) {
        let (host, path) = self.location.into_parts();
        (self.participant, host, path)
    }
}

impl fmt::Display for AddressComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.participant, self.location)
    }
}
