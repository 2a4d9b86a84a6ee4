//! HTTP boundary tests
//!
//! Errors returned from Axum handlers and read back by a client.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use errkind::shared::{detail, is_conflict, CodecConfig, ErrorCodec, ErrorKind, ErrorValue};

async fn read_body(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn handler(user_id: &str) -> Result<String, ErrorValue> {
    Err(ErrorValue::duplicate("user exists", [detail("userId", user_id)]))
}

#[tokio::test]
async fn test_handler_error_round_trip() {
    let response = handler("7").await.into_response();
    let status = response.status();
    assert_eq!(status, StatusCode::CONFLICT);

    let body = read_body(response).await;
    let received = ErrorValue::from_response(status, &body);
    assert_eq!(received.kind(), ErrorKind::DuplicateResource);
    assert!(is_conflict(&received));
    assert_eq!(received.detail("userId"), Some("7"));
}

#[tokio::test]
async fn test_configured_response() {
    let codec = ErrorCodec::new(CodecConfig::builder().emit_internal_code(true).build().unwrap());
    let response = codec.response(&ErrorValue::new("boom"));
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(read_body(response).await, r#"{"code":0,"message":"boom"}"#);
}

#[test]
fn test_non_json_response_body() {
    let received = ErrorValue::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
    assert_eq!(received.kind(), ErrorKind::Internal);
    assert_eq!(received.detail("body"), Some("<html>bad gateway</html>"));
}
