//! Wire scenarios
//!
//! An error built on one side of a boundary, encoded, transmitted as text
//! and decoded on the other side.

use errkind::shared::{
    append_details, decode, detail, encode, http_status, is_conflict, is_not_found, parse,
    status_of_str, CodecConfig, CodecError, ErrorCodec, ErrorKind, ErrorValue,
};
use pretty_assertions::assert_eq;
use assert_matches::assert_matches;

use crate::common::{Layered, Opaque};

#[test]
fn test_not_found_scenario() {
    let sent = ErrorValue::create(ErrorKind::NotFound, "user missing", [detail("userId", "42")]);
    let transmitted: String = encode(&sent);

    let received = parse(&transmitted).expect("structured error");
    assert_eq!(http_status(&received), 404);
    assert_eq!(received.detail("userId"), Some("42"));
    assert!(is_not_found(&received));
}

#[test]
fn test_from_http_status_conflict_scenario() {
    let err = ErrorValue::from_http_status(409, [detail("key", "email")]);
    assert!(is_conflict(&err));
    crate::assert_status!(&err, 409);
}

#[test]
fn test_every_constructor_maps_to_its_status() {
    let cases: [(fn(&str) -> ErrorValue, u16); 11] = [
        (|m| ErrorValue::internal(m, []), 500),
        (|m| ErrorValue::bad_request(m, []), 400),
        (|m| ErrorValue::unauthorized(m, []), 401),
        (|m| ErrorValue::forbidden(m, []), 403),
        (|m| ErrorValue::not_found(m, []), 404),
        (|m| ErrorValue::conflict(m, []), 409),
        (|m| ErrorValue::not_implemented(m, []), 501),
        (|m| ErrorValue::service_unavailable(m, []), 503),
        (|m| ErrorValue::version_not_supported(m, []), 505),
        (|m| ErrorValue::duplicate(m, []), 409),
        (|m| ErrorValue::not_supported(m, []), 505),
    ];
    for (construct, status) in cases {
        let err = construct("failure");
        crate::assert_status!(&err, status);
    }
}

#[test]
fn test_internal_errors_do_not_parse_as_classified() {
    let wire = encode(&ErrorValue::new("disk full"));
    assert!(parse(&wire).is_none());

    let rejected = decode(&wire).unwrap_err();
    assert_matches!(rejected, CodecError::Unclassified(_));
    let value = rejected.into_value();
    assert_eq!(value.kind(), ErrorKind::Internal);
    assert_eq!(value.message(), "disk full");
}

#[test]
fn test_opaque_error_carrying_wire_text() {
    let wire = encode(&ErrorValue::service_unavailable("replica lagging", []));
    let err = Layered::wrap("fetch failed", Opaque::new(wire));

    crate::assert_kind!(&err, ErrorKind::ServiceUnavailable);
    crate::assert_status!(&err, 503);
}

#[test]
fn test_enrichment_across_layers() {
    let repo_err = ErrorValue::not_found("order missing", [detail("orderId", "o-9")]);
    let service_err = Layered::wrap("load order", repo_err);

    let enriched = append_details(&service_err, [detail("tenant", "acme")]);
    assert_eq!(enriched.kind(), ErrorKind::NotFound);
    assert_eq!(enriched.detail("orderId"), Some("o-9"));
    assert_eq!(enriched.detail("tenant"), Some("acme"));
}

#[test]
fn test_enrichment_of_plain_error() {
    let enriched = append_details(&Opaque::new("connection reset"), [detail("attempt", 2)]);
    assert_eq!(enriched.kind(), ErrorKind::Internal);
    assert_eq!(enriched.message(), "connection reset");
    crate::assert_contains!(encode(&enriched), r#""name":"attempt""#);
}

#[test]
fn test_status_of_raw_payloads() {
    assert_eq!(status_of_str(""), 500);
    assert_eq!(status_of_str("null"), 500);
    assert_eq!(status_of_str(r#"{"code":2,"message":"login"}"#), 401);
    assert_eq!(status_of_str(r#"{"code":2,"message":""}"#), 500);
}

#[test]
fn test_configured_codec_round_trip() {
    let config = CodecConfig::from_toml_str("emit_internal_code = true\nmax_details = 2").unwrap();
    let codec = ErrorCodec::new(config);

    let err = ErrorValue::new("boom").with("a", 1).with("b", 2).with("c", 3);
    let wire = codec.encode(&err);
    crate::assert_contains!(wire, r#""code":0"#);
    crate::assert_contains!(wire, r#""name":"b""#);
    assert!(!wire.contains(r#""name":"c""#));
}
