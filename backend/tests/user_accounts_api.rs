//! Registration, lookup, login and profile updates over HTTP.

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::json;

mod support;

use support::{call, in_memory_state, registration};

#[rstest]
#[actix_web::test]
async fn registered_user_can_log_in_by_username_or_email() {
    let state = in_memory_state();
    let created = call(
        &state,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(registration("john", false)),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert!(created.body.get("password").is_none());

    let by_username = call(
        &state,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "john", "password": "asdf1234.-" })),
    )
    .await;
    let by_email = call(
        &state,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "email": "john@mail.com", "password": "asdf1234.-" })),
    )
    .await;

    assert_eq!(by_username.status, StatusCode::OK);
    assert_eq!(by_email.status, StatusCode::OK);
    assert_eq!(by_username.body["id"], created.body["id"]);
    assert_eq!(by_email.body["id"], created.body["id"]);
}

#[rstest]
#[actix_web::test]
async fn duplicate_username_conflicts() {
    let state = in_memory_state();
    call(
        &state,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(registration("john", false)),
    )
    .await;

    let again = call(
        &state,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(registration("john", false)),
    )
    .await;

    assert_eq!(again.status, StatusCode::CONFLICT);
    assert_eq!(again.body["code"], "conflict");
}

#[rstest]
#[case::short_username(json!({ "username": "joe" }), "username_short")]
#[case::weak_password(json!({ "password": "asdf1234" }), "password_weak")]
#[case::bad_email(json!({ "email": "john@mail" }), "email_not_valid")]
#[case::negative_age(json!({ "age": -1 }), "age_not_valid")]
#[actix_web::test]
async fn invalid_registration_names_the_reason(
    #[case] overrides: serde_json::Value,
    #[case] code: &str,
) {
    let state = in_memory_state();
    let mut body = registration("john", false);
    if let (Some(target), Some(patch)) = (body.as_object_mut(), overrides.as_object()) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }

    let reply = call(
        &state,
        test::TestRequest::post().uri("/api/v1/users").set_json(body),
    )
    .await;

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["details"]["code"], code);
    assert!(reply.trace_id.is_some());
    assert_eq!(reply.body["traceId"].as_str(), reply.trace_id.as_deref());
}

#[rstest]
#[case::wrong_password(json!({ "username": "john", "password": "nope" }), StatusCode::UNAUTHORIZED, "Password is not correct.")]
#[case::unknown_username(json!({ "username": "jane", "password": "asdf1234.-" }), StatusCode::NOT_FOUND, "Username could not be found.")]
#[case::unknown_email(json!({ "email": "jane@mail.com", "password": "asdf1234.-" }), StatusCode::NOT_FOUND, "Email could not be found.")]
#[actix_web::test]
async fn failed_logins_explain_themselves(
    #[case] payload: serde_json::Value,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let state = in_memory_state();
    call(
        &state,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(registration("john", false)),
    )
    .await;

    let reply = call(
        &state,
        test::TestRequest::post().uri("/api/v1/login").set_json(payload),
    )
    .await;

    assert_eq!(reply.status, status);
    assert_eq!(reply.body["message"], message);
}

#[rstest]
#[actix_web::test]
async fn profile_update_renames_and_keeps_password() {
    let state = in_memory_state();
    call(
        &state,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(registration("john", false)),
    )
    .await;

    let updated = call(
        &state,
        test::TestRequest::put().uri("/api/v1/users/john").set_json(json!({
            "username": "johnny",
            "name": "John",
            "surname": "Jack",
            "email": "john@mail.com",
            "age": 31,
        })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["age"], 31);

    let old = call(&state, test::TestRequest::get().uri("/api/v1/users/john")).await;
    let login = call(
        &state,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "johnny", "password": "asdf1234.-" })),
    )
    .await;

    assert_eq!(old.status, StatusCode::NOT_FOUND);
    assert_eq!(login.status, StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn users_are_listed_in_registration_order() {
    let state = in_memory_state();
    for username in ["john", "root", "jane"] {
        call(
            &state,
            test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(registration(username, username == "root")),
        )
        .await;
    }

    let reply = call(&state, test::TestRequest::get().uri("/api/v1/users")).await;

    let names: Vec<&str> = reply
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|user| user["username"].as_str())
        .collect();
    assert_eq!(names, ["john", "root", "jane"]);
}

#[rstest]
#[actix_web::test]
async fn overlong_password_is_refused_not_truncated() {
    let state = in_memory_state();
    let mut body = registration("john", false);
    body["password"] = json!(format!("{}1!", "a".repeat(72)));

    let created = call(
        &state,
        test::TestRequest::post().uri("/api/v1/users").set_json(body),
    )
    .await;

    assert_eq!(created.status, StatusCode::BAD_REQUEST);
    assert_eq!(created.body["details"]["code"], "password_too_long");
}

#[rstest]
#[actix_web::test]
async fn password_extended_past_bcrypt_limit_does_not_log_in() {
    let state = in_memory_state();
    let password = format!("{}1!", "a".repeat(70));
    let mut body = registration("john", false);
    body["password"] = json!(password);
    let created = call(
        &state,
        test::TestRequest::post().uri("/api/v1/users").set_json(body),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let login = call(
        &state,
        test::TestRequest::post().uri("/api/v1/login").set_json(json!({
            "username": "john",
            "password": format!("{password}DIFFERENT"),
        })),
    )
    .await;

    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[rstest]
#[actix_web::test]
async fn long_profile_fields_are_accepted() {
    let state = in_memory_state();
    let username = "j".repeat(300);
    let mut body = registration(&username, false);
    body["email"] = json!("john@mail.com");
    body["name"] = json!("N".repeat(300));
    body["surname"] = json!("S".repeat(300));

    let created = call(
        &state,
        test::TestRequest::post().uri("/api/v1/users").set_json(body),
    )
    .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["username"], username);
}
