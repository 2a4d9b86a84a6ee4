//! Property-based tests for the wire codec and classification

use errkind::shared::{
    append_details, encode, http_status, parse, status_of_str, Detail, ErrorKind, ErrorValue,
};
use proptest::prelude::*;

use crate::common::Opaque;

const STATUSES: [u16; 9] = [400, 401, 403, 404, 409, 500, 501, 503, 505];

fn any_kind() -> impl Strategy<Value = ErrorKind> {
    proptest::sample::select(ErrorKind::ALL.to_vec())
}

fn classified_kind() -> impl Strategy<Value = ErrorKind> {
    any_kind().prop_filter("internal is unclassified on the wire", |k| *k != ErrorKind::Internal)
}

fn any_details() -> impl Strategy<Value = Vec<Detail>> {
    proptest::collection::vec(("[a-zA-Z]{1,8}", ".*"), 0..5)
        .prop_map(|pairs| pairs.into_iter().map(Detail::from).collect())
}

proptest! {
    #[test]
    fn test_round_trip_preserves_kind_and_message(
        kind in classified_kind(),
        message in ".+",
        details in any_details(),
    ) {
        let err = ErrorValue::create(kind, message, details);
        let received = parse(&encode(&err)).unwrap();

        prop_assert_eq!(received.kind(), err.kind());
        prop_assert_eq!(received.message(), err.message());
        prop_assert_eq!(received.details(), err.details());
    }

    #[test]
    fn test_round_trip_is_stable(kind in classified_kind(), message in ".+") {
        let once = parse(&encode(&ErrorValue::create(kind, message, []))).unwrap();
        let twice = parse(&encode(&once)).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_status_is_always_in_table(payload in ".*") {
        prop_assert!(STATUSES.contains(&status_of_str(&payload)));
        prop_assert!(STATUSES.contains(&http_status(&Opaque(payload))));
    }

    #[test]
    fn test_status_of_any_code(code in any::<i64>(), message in ".*") {
        let err = ErrorValue::from_code(code, message, []);
        prop_assert!(STATUSES.contains(&err.http_status()));
    }

    #[test]
    fn test_append_details_never_panics(text in ".*", details in any_details()) {
        let count = details.len();
        let value = append_details(&Opaque(text), details);
        prop_assert!(value.details().len() >= count);
    }
}
