//! Host-notation behaviour: path-only, host-only and host+path addresses.

use fame_address::{
    AddressErrorKind, FameAddress, Host, Path, format_address, format_address_from_components,
    make_fame_address, parse_address, parse_address_components,
};

const ROUNDTRIP_ADDRESSES: [&str; 7] = [
    "alice@/",
    "worker@/api/v1/service",
    "alice@fame.fabric",
    "worker@child.fame.fabric",
    "alice@fame.fabric/api",
    "worker@child.fame.fabric/service/v1/endpoint",
    "service@node-1.cluster.fame.fabric/health",
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn components(raw: &str) -> (String, Option<String>, Option<String>) {
    let parts = parse_address_components(raw).unwrap();
    (
        parts.participant().to_string(),
        parts.host().map(ToString::to_string),
        parts.path().map(ToString::to_string),
    )
}

fn kind(result: Result<impl std::fmt::Debug, fame_address::AddressError>) -> AddressErrorKind {
    result.unwrap_err().kind
}

#[test]
fn path_only_addresses() {
    assert_eq!(
        parse_address("alice@/").unwrap(),
        ("alice".to_string(), "/".to_string())
    );
    assert_eq!(
        parse_address("worker@/api/v1/service").unwrap(),
        ("worker".to_string(), "/api/v1/service".to_string())
    );

    assert_eq!(
        components("alice@/"),
        ("alice".to_string(), None, Some("/".to_string()))
    );
    assert_eq!(
        components("worker@/api/v1/service"),
        ("worker".to_string(), None, Some("/api/v1/service".to_string()))
    );
}

#[test]
fn host_only_addresses() {
    assert_eq!(
        parse_address("worker@child.fame.fabric").unwrap(),
        ("worker".to_string(), "child.fame.fabric".to_string())
    );
    assert_eq!(
        components("alice@fame.fabric"),
        ("alice".to_string(), Some("fame.fabric".to_string()), None)
    );
}

#[test]
fn host_with_path_addresses() {
    assert_eq!(
        parse_address("worker@child.fame.fabric/service/v1").unwrap(),
        ("worker".to_string(), "child.fame.fabric/service/v1".to_string())
    );
    assert_eq!(
        components("alice@fame.fabric/api"),
        (
            "alice".to_string(),
            Some("fame.fabric".to_string()),
            Some("/api".to_string())
        )
    );
    assert_eq!(
        components("worker@child.fame.fabric/service/v1"),
        (
            "worker".to_string(),
            Some("child.fame.fabric".to_string()),
            Some("/service/v1".to_string())
        )
    );
}

#[test]
fn format_address_all_shapes() {
    assert_eq!(format_address("alice", "/").to_string(), "alice@/");
    assert_eq!(format_address("worker", "/api/v1").to_string(), "worker@/api/v1");
    assert_eq!(format_address("alice", "fame.fabric").to_string(), "alice@fame.fabric");
    assert_eq!(
        format_address("alice", "fame.fabric/api").to_string(),
        "alice@fame.fabric/api"
    );
}

#[test]
fn format_from_components_all_shapes() {
    let cases = [
        ("alice", None, Some("/"), "alice@/"),
        ("worker", None, Some("/api/v1"), "worker@/api/v1"),
        ("alice", Some("fame.fabric"), None, "alice@fame.fabric"),
        ("worker", Some("child.fame.fabric"), None, "worker@child.fame.fabric"),
        ("alice", Some("fame.fabric"), Some("/api"), "alice@fame.fabric/api"),
        (
            "worker",
            Some("child.fame.fabric"),
            Some("/service/v1"),
            "worker@child.fame.fabric/service/v1",
        ),
    ];
    for (participant, host, path, expected) in cases {
        let addr = format_address_from_components(participant, host, path).unwrap();
        assert_eq!(addr.to_string(), expected);
    }
}

#[test]
fn format_from_components_requires_host_or_path() {
    init_tracing();
    assert_eq!(
        kind(format_address_from_components("alice", None, None)),
        AddressErrorKind::MissingLocationComponents
    );
}

#[test]
fn make_fame_address_all_shapes() {
    for raw in ["alice@/", "alice@fame.fabric", "alice@fame.fabric/api"] {
        let addr: FameAddress = make_fame_address(raw).unwrap();
        assert_eq!(addr.to_string(), raw);
    }
}

#[test]
fn validation_errors() {
    init_tracing();
    assert_eq!(kind(parse_address("alice@")), AddressErrorKind::EmptyLocation);
    assert_eq!(kind(parse_address("alice")), AddressErrorKind::MissingSeparator);
    assert!(matches!(
        kind(parse_address("alice!@/")),
        AddressErrorKind::InvalidParticipant { .. }
    ));
    assert!(matches!(
        kind(parse_address("alice@bad!host")),
        AddressErrorKind::InvalidHostSegment { .. }
    ));
    assert!(matches!(
        kind(parse_address("alice@/bad!path")),
        AddressErrorKind::InvalidPathSegment { .. }
    ));
    assert_eq!(
        kind(parse_address("alice@host..name")),
        AddressErrorKind::EmptyHostSegment { index: 1 }
    );
}

#[test]
fn wildcards_rejected_in_physical_addresses() {
    init_tracing();
    assert!(matches!(
        kind(parse_address_components("alice@/api/*")),
        AddressErrorKind::WildcardNotAllowed { .. }
    ));
    assert!(matches!(
        kind(parse_address_components("alice@/api/**")),
        AddressErrorKind::InvalidPathSegment { .. }
    ));
    assert!(matches!(
        kind(parse_address_components("alice@fame.fabric/api/*")),
        AddressErrorKind::WildcardNotAllowed { .. }
    ));
}

#[test]
fn wildcard_in_host_is_bad_host_segment() {
    assert!(matches!(
        kind(parse_address_components("alice@*.fabric")),
        AddressErrorKind::InvalidHostSegment { .. }
    ));
}

#[test]
fn complex_host_names() {
    for host in [
        "fame.fabric",
        "child.fame.fabric",
        "deep.child.fame.fabric",
        "node-1.cluster.fame.fabric",
        "127.0.0.1",
        "single",
    ] {
        assert_eq!(
            components(&format!("alice@{host}")),
            ("alice".to_string(), Some(host.to_string()), None)
        );
    }
}

#[test]
fn roundtrip_parsing_and_formatting() {
    for raw in ROUNDTRIP_ADDRESSES {
        let (participant, location) = parse_address(raw).unwrap();
        assert_eq!(format_address(&participant, &location).to_string(), raw);

        let parts = parse_address_components(raw).unwrap();
        let recreated = format_address_from_components(
            parts.participant().as_str(),
            parts.host().map(Host::as_str),
            parts.path().map(Path::as_str),
        )
        .unwrap();
        assert_eq!(recreated.to_string(), raw);
    }
}

#[test]
fn reparse_is_idempotent() {
    for raw in ROUNDTRIP_ADDRESSES {
        let addr = make_fame_address(raw).unwrap();
        let first = addr.components().unwrap();
        let again = make_fame_address(&first.to_address().to_string())
            .unwrap()
            .components()
            .unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn addresses_are_shareable_across_threads() {
    let handles: Vec<_> = ROUNDTRIP_ADDRESSES
        .into_iter()
        .map(|raw| std::thread::spawn(move || make_fame_address(raw).unwrap()))
        .collect();
    for (handle, raw) in handles.into_iter().zip(ROUNDTRIP_ADDRESSES) {
        assert_eq!(handle.join().unwrap().as_str(), raw);
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use fame_address::Grammar;

    #[test]
    fn address_serializes_as_string() {
        let addr = make_fame_address("alice@fame.fabric/api").unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"alice@fame.fabric/api\"");
        let back: FameAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn invalid_address_fails_to_deserialize() {
        let result: Result<FameAddress, _> = serde_json::from_str("\"alice@/api/*\"");
        assert!(result.is_err());
    }

    #[test]
    fn grammar_deserializes_connectors() {
        let grammar: Grammar = serde_json::from_str(r#"{"participant": "-_~"}"#).unwrap();
        assert!(grammar.participant.contains('~'));
        assert!(!grammar.participant.contains('.'));
        assert_eq!(grammar.host_label, Grammar::STANDARD.host_label);
    }

    #[test]
    fn grammar_rejects_reserved_connector() {
        let result: Result<Grammar, _> = serde_json::from_str(r#"{"path_segment": "*"}"#);
        assert!(result.is_err());
    }
}
