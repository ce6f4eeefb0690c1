//! Tests for domain error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "11111111-2222-3333-4444-555555555555";

#[fixture]
fn trace_id() -> TraceId {
    TRACE_ID.parse().expect("fixture trace id is a valid UUID")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("password is not correct"), ErrorCode::Unauthorized)]
#[case(Error::forbidden("only admins"), ErrorCode::Forbidden)]
#[case(Error::not_found("user could not be found"), ErrorCode::NotFound)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("db down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::InvalidRequest, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_in_scope(trace_id: TraceId) {
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_code_in_snake_case_and_omits_empty_fields() {
    let value = serde_json::to_value(Error::service_unavailable("db down"))
        .expect("error serialises");
    assert_eq!(
        value,
        json!({ "code": "service_unavailable", "message": "db down" })
    );
}

#[rstest]
fn serialises_trace_id_in_camel_case() {
    let value = serde_json::to_value(Error::conflict("taken").with_trace_id(TRACE_ID))
        .expect("error serialises");
    assert_eq!(value["traceId"], TRACE_ID);
}

#[rstest]
fn deserialise_rejects_blank_message() {
    let result = serde_json::from_value::<Error>(json!({
        "code": "not_found",
        "message": " ",
    }));
    assert!(result.is_err());
}

#[rstest]
fn deserialise_rejects_blank_trace_id() {
    let result = serde_json::from_value::<Error>(json!({
        "code": "not_found",
        "message": "missing",
        "traceId": "",
    }));
    assert!(result.is_err());
}

#[rstest]
fn deserialise_keeps_details() {
    let error: Error = serde_json::from_value(json!({
        "code": "invalid_request",
        "message": "Age is not valid",
        "details": { "field": "age", "code": "age_not_valid" },
    }))
    .expect("payload is valid");
    assert_eq!(error.details(), Some(&json!({ "field": "age", "code": "age_not_valid" })));
}
