//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use fame_address::prelude::*;
//!
//! let addr = FameAddress::parse("alice@fame.fabric/api").unwrap();
//! let parts = parse_address_components(addr.as_str()).unwrap();
//! assert!(matches!(parts.location(), Location::HostPath(_, _)));
//! ```
//!
//! Builder state markers (`Empty`, `HasParticipant`, `Ready`) are left out;
//! they only appear in type positions.

pub use crate::{
    // Core types
    AddressComponents, FameAddress, Host, Location, Participant, Path,
    // Builder
    FameAddressBuilder,
    // Configuration
    CharClass, Grammar,
    // Errors
    AddressError, AddressErrorKind, SegmentError,
    // Operations
    format_address, format_address_from_components, make_fame_address, parse_address,
    parse_address_components,
};
