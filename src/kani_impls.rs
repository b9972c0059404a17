//! Kani Arbitrary implementations and proof harnesses.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{
    FameAddress, Grammar, Host, Location, Participant, Path, SegmentClass, SegmentKind, classify,
    format_address, parse_address, parse_address_components,
};

/// Identifier characters: letters, digits, hyphen, underscore, dot
const IDENTIFIER_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-_.";

/// DNS-label characters: letters, digits, hyphen
const LABEL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

fn arbitrary_from(chars: &[u8], max_len: usize) -> String {
    let len: usize = kani::any();
    let len = 1 + (len % max_len);
    (0..len)
        .map(|_| {
            let idx: usize = kani::any();
            chars[idx % chars.len()] as char
        })
        .collect()
}

fn arbitrary_ascii(max_len: usize) -> String {
    let len: usize = kani::any();
    let len = len % (max_len + 1);
    (0..len)
        .map(|_| {
            let b: u8 = kani::any();
            kani::assume(b.is_ascii());
            b as char
        })
        .collect()
}

impl kani::Arbitrary for Participant {
    fn any() -> Self {
        Participant::parse(&arbitrary_from(IDENTIFIER_CHARS, 6)).expect("valid by construction")
    }
}

impl kani::Arbitrary for Host {
    fn any() -> Self {
        let labels: usize = kani::any();
        let labels = 1 + (labels % 3);
        let host = (0..labels)
            .map(|_| arbitrary_from(LABEL_CHARS, 4))
            .collect::<Vec<_>>()
            .join(".");
        Host::parse(&host).expect("valid by construction")
    }
}

impl kani::Arbitrary for Path {
    fn any() -> Self {
        let segments: usize = kani::any();
        let segments = segments % 3;
        let path: String = (0..segments)
            .map(|_| format!("/{}", arbitrary_from(IDENTIFIER_CHARS, 4)))
            .collect();
        if path.is_empty() {
            Path::root()
        } else {
            Path::parse(&path).expect("valid by construction")
        }
    }
}

impl kani::Arbitrary for Location {
    fn any() -> Self {
        let has_host: bool = kani::any();
        let has_path: bool = kani::any();
        let host = has_host.then(kani::any::<Host>);
        let path = (has_path || !has_host).then(kani::any::<Path>);
        Location::from_parts(host, path).expect("at least one part by construction")
    }
}

impl kani::Arbitrary for FameAddress {
    fn any() -> Self {
        let participant: Participant = kani::any();
        let location: Location = kani::any();
        format_address(participant.as_str(), &location.to_string())
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: classification is total and only path segments yield Wildcard
#[kani::proof]
#[kani::unwind(6)]
fn proof_classify_total() {
    let s = arbitrary_ascii(4);
    let g = Grammar::STANDARD;
    let host = classify(&s, SegmentKind::HostLabel, &g);
    let participant = classify(&s, SegmentKind::Participant, &g);
    assert!(host != SegmentClass::Wildcard);
    assert!(participant != SegmentClass::Wildcard);
    if classify(&s, SegmentKind::PathLabel, &g) == SegmentClass::Wildcard {
        assert_eq!(s, "*");
    }
}

/// Proof: format(parse(s)) == s for generated addresses
#[kani::proof]
#[kani::unwind(12)]
fn proof_parse_roundtrip() {
    let addr: FameAddress = kani::any();
    let (participant, location) = parse_address(addr.as_str()).expect("valid by construction");
    assert_eq!(format_address(&participant, &location), addr);
}

/// Proof: components reassemble to the original address
#[kani::proof]
#[kani::unwind(12)]
fn proof_components_roundtrip() {
    let addr: FameAddress = kani::any();
    let parts = parse_address_components(addr.as_str()).expect("valid by construction");
    assert!(parts.host().is_some() || parts.path().is_some());
    assert_eq!(parts.to_address(), addr);
}

/// Proof: every path starts with itself and with the root
#[kani::proof]
#[kani::unwind(6)]
fn proof_starts_with_reflexive() {
    let path: Path = kani::any();
    assert!(path.starts_with(&path));
    assert!(path.starts_with(&Path::root()));
}
