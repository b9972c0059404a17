//! Parser, validator and formatter for FAME fabric addresses.
//!
//! A FAME address names an endpoint in the messaging fabric. It joins a
//! participant identity to a location:
//!
//! ```text
//! participant@/path/segments          path-only (legacy)
//! participant@host.name               host-only
//! participant@host.name/path/segments host + path
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use fame_address::{parse_address, parse_address_components, format_address_from_components};
//!
//! let (participant, location) = parse_address("alice@fame.fabric/api").unwrap();
//! assert_eq!(participant, "alice");
//! assert_eq!(location, "fame.fabric/api");
//!
//! let parts = parse_address_components("alice@fame.fabric/api").unwrap();
//! assert_eq!(parts.host().map(|h| h.as_str()), Some("fame.fabric"));
//! assert_eq!(parts.path().map(|p| p.as_str()), Some("/api"));
//!
//! let addr = format_address_from_components("alice", Some("fame.fabric"), Some("/api")).unwrap();
//! assert_eq!(addr.to_string(), "alice@fame.fabric/api");
//! ```
//!
//! # Grammar
//!
//! ```text
//! address  = participant "@" location
//! location = path / host [ path ]
//! path     = "/" [ segment *( "/" segment ) ]
//! host     = label *( "." label )
//! segment  = 1*( ALPHA / DIGIT / "-" / "_" / "." )   ; "*" recognized, rejected
//! label    = 1*( ALPHA / DIGIT / "-" )
//! ```
//!
//! Character sets are configurable through [`Grammar`].
//!
//! # Wildcards
//!
//! Addresses are physical: they name concrete endpoints. A path segment of
//! exactly `*` is recognized as a wildcard and rejected with
//! [`AddressErrorKind::WildcardNotAllowed`]. The token `**` is not part of
//! the grammar and fails as an ordinary [`AddressErrorKind::InvalidPathSegment`].
//! Host labels never recognize wildcards.
//!
//! # Logging
//!
//! Rejected addresses are reported as `tracing` events at `DEBUG` level.
//! Install a subscriber to see them.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod builder;
mod constants;
mod error;
mod format;
mod grammar;
mod host;
#[cfg(kani)]
mod kani_impls;
mod location;
mod parser;
mod participant;
mod path;
pub mod prelude;
mod segment;

pub use address::{FameAddress, make_fame_address};
pub use builder::{Empty, FameAddressBuilder, HasParticipant, Ready};
pub use constants::{
    DOUBLE_WILDCARD, HOST_SEPARATOR, PARTICIPANT_SEPARATOR, PATH_SEPARATOR, RESERVED_CHARS,
    WILDCARD,
};
pub use error::{AddressError, AddressErrorKind, SegmentError};
pub use format::{format_address, format_address_from_components};
pub use grammar::{CharClass, Grammar};
pub use host::Host;
pub use location::{AddressComponents, Location};
pub use parser::{
    parse_address, parse_address_components, parse_address_components_with, parse_address_with,
};
pub use participant::Participant;
pub use path::Path;
pub use segment::{
    SegmentClass, SegmentKind, classify, is_valid_host_label, is_valid_participant,
    is_valid_path_segment,
};
