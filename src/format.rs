//! Address formatting.
//!
//! These functions assemble the canonical `participant@location` string
//! without re-validating segment grammar. They are meant for reassembling
//! parts taken from a previous parse. To build from unvalidated input, use
//! [`FameAddressBuilder`](crate::FameAddressBuilder) or parse the result.

use tracing::debug;

use crate::address::FameAddress;
use crate::error::{AddressError, AddressErrorKind};

/// Formats an address from a participant and a location string.
///
/// The participant must not contain `@`. Otherwise the result would equal a
/// parsed address that splits at the first `@` and so reports a different
/// participant. Debug builds assert this.
///
/// # Examples
///
/// ```
/// use fame_address::{format_address, parse_address};
///
/// let (participant, location) = parse_address("worker@child.fame.fabric/service").unwrap();
/// let addr = format_address(&participant, &location);
/// assert_eq!(addr.to_string(), "worker@child.fame.fabric/service");
/// ```
#[must_use]
pub fn format_address(participant: &str, location: &str) -> FameAddress {
    FameAddress::from_validated(participant, location)
}

/// Formats an address from a participant and separate host and path.
///
/// With both parts the location is `host` immediately followed by `path`;
/// the path is expected to begin with `/`, so no separator is inserted.
///
/// # Errors
///
/// Returns `AddressError` with kind `MissingLocationComponents` if both
/// `host` and `path` are `None`.
///
/// # Examples
///
/// ```
/// use fame_address::format_address_from_components;
///
/// let addr = format_address_from_components("alice", Some("fame.fabric"), Some("/api")).unwrap();
/// assert_eq!(addr.to_string(), "alice@fame.fabric/api");
///
/// assert!(format_address_from_components("alice", None, None).is_err());
/// ```
pub fn format_address_from_components(
    participant: &str,
    host: Option<&str>,
    path: Option<&str>,
) -> Result<FameAddress, AddressError> {
    let location = match (host, path) {
        (Some(host), Some(path)) => format!("{host}{path}"),
        (Some(host), None) => host.to_string(),
        (None, Some(path)) => path.to_string(),
        (None, None) => {
            let kind = AddressErrorKind::MissingLocationComponents;
            debug!(participant, error = %kind, "cannot format address");
            return Err(AddressError::new(participant, kind));
        }
    };
    Ok(FameAddress::from_validated(participant, &location))
}
