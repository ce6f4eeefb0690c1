//! Handler tests for the meetup endpoints.

use super::*;
use crate::domain::{AdminGrant, MeetupId, NOT_ADMIN_MESSAGE};
use crate::inbound::http::api_scope;
use crate::inbound::http::test_utils::MockPorts;
use actix_web::http::StatusCode;
use actix_web::{App, test};
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

async fn send(ports: MockPorts, request: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(App::new().app_data(ports.into_state()).service(api_scope())).await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body: Value = test::read_body_json(response).await;
    (status, body)
}

#[fixture]
fn stored() -> Meetup {
    Meetup::new(
        MeetupId::random(),
        NewMeetup {
            name: "Rust night".into(),
            details: "Lightning talks".into(),
            start_date: Utc.with_ymd_and_hms(2026, 11, 3, 18, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 11, 3, 21, 0, 0).unwrap(),
            address: "Main St 1".into(),
            quota: 40,
            registered_user_count: 0,
        },
    )
}

fn create_body() -> Value {
    json!({
        "name": "Rust night",
        "details": "Lightning talks",
        "startDate": "2026-11-03T18:00:00Z",
        "endDate": "2026-11-03T21:00:00Z",
        "address": "Main St 1",
        "quota": 40,
    })
}

#[rstest]
#[actix_web::test]
async fn admin_creates_meetup() {
    let mut ports = MockPorts::default();
    ports
        .meetups
        .expect_authorize_creator()
        .withf(|username| username == "root")
        .returning(|username| Ok(AdminGrant::new(username)));
    ports
        .meetups
        .expect_create_meetup()
        .withf(|grant, draft| grant.username() == "root" && draft.quota == 40)
        .times(1)
        .returning(|_, draft| Ok(Meetup::new(MeetupId::random(), draft)));

    let (status, body) = send(
        ports,
        test::TestRequest::post()
            .uri("/api/v1/meetups/root")
            .set_json(create_body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Rust night");
    assert_eq!(body["participants"], json!([]));
}

#[rstest]
#[actix_web::test]
async fn refusal_happens_before_body_is_read() {
    let mut ports = MockPorts::default();
    ports
        .meetups
        .expect_authorize_creator()
        .returning(|_| Err(Error::forbidden(NOT_ADMIN_MESSAGE)));
    ports.meetups.expect_create_meetup().never();

    let (status, body) = send(
        ports,
        test::TestRequest::post()
            .uri("/api/v1/meetups/john")
            .insert_header(("content-type", "application/json"))
            .set_payload("not json at all"),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], NOT_ADMIN_MESSAGE);
}

#[rstest]
#[case::bad_json(json!("nope"), None)]
#[case::bad_date(json!({ "name": "x", "startDate": "tomorrow", "endDate": "2026-11-03T21:00:00Z" }), Some("startDate"))]
#[case::reversed(json!({ "name": "x", "startDate": "2026-11-03T21:00:00Z", "endDate": "2026-11-03T18:00:00Z" }), Some("endDate"))]
#[actix_web::test]
async fn admin_payload_errors_are_bad_requests(
    #[case] payload: Value,
    #[case] field: Option<&str>,
) {
    let mut ports = MockPorts::default();
    ports
        .meetups
        .expect_authorize_creator()
        .returning(|username| Ok(AdminGrant::new(username)));
    ports.meetups.expect_create_meetup().never();

    let (status, body) = send(
        ports,
        test::TestRequest::post()
            .uri("/api/v1/meetups/root")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    if let Some(field) = field {
        assert_eq!(body["details"]["field"], field);
    }
}

#[rstest]
#[actix_web::test]
async fn get_meetup_returns_details(stored: Meetup) {
    let id = stored.id;
    let mut ports = MockPorts::default();
    ports
        .meetups_query
        .expect_get_meetup()
        .withf(move |requested| *requested == id)
        .return_once(move |_| Ok(stored));

    let (status, body) = send(
        ports,
        test::TestRequest::get().uri(&format!("/api/v1/meetups/{id}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["startDate"], "2026-11-03T18:00:00Z");
}

#[rstest]
#[actix_web::test]
async fn malformed_meetup_id_is_rejected() {
    let mut ports = MockPorts::default();
    ports.meetups_query.expect_get_meetup().never();

    let (status, body) = send(ports, test::TestRequest::get().uri("/api/v1/meetups/42")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "invalid_uuid");
}

#[rstest]
#[actix_web::test]
async fn delete_confirms_with_id() {
    let id = MeetupId::random();
    let mut ports = MockPorts::default();
    ports
        .meetups
        .expect_delete_meetup()
        .withf(move |requested| *requested == id)
        .returning(|_| Ok(()));

    let (status, body) = send(
        ports,
        test::TestRequest::delete().uri(&format!("/api/v1/meetups/{id}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.to_string());
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|message| message.ends_with(&id.to_string()))
    );
}

#[rstest]
#[actix_web::test]
async fn delete_unknown_meetup_is_not_found() {
    let mut ports = MockPorts::default();
    ports
        .meetups
        .expect_delete_meetup()
        .returning(|_| Err(Error::not_found("Meetup ID does not exist.")));

    let (status, _) = send(
        ports,
        test::TestRequest::delete().uri(&format!("/api/v1/meetups/{}", MeetupId::random())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn list_meetups_returns_array(stored: Meetup) {
    let mut ports = MockPorts::default();
    ports
        .meetups_query
        .expect_list_meetups()
        .return_once(move || Ok(vec![stored]));

    let (status, body) = send(ports, test::TestRequest::get().uri("/api/v1/meetups")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}
