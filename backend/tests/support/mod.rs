//! Shared harness for HTTP integration tests against in-memory stores.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use backend::Trace;
use backend::domain::{MeetupService, UserAccountService};
use backend::inbound::http::api_scope;
use backend::inbound::http::state::HttpState;
use backend::outbound::crypto::BcryptCredentialHasher;
use backend::outbound::memory::{InMemoryMeetupRepository, InMemoryUserRepository};
use serde_json::{Value, json};

/// Lowest cost bcrypt accepts; keeps the suite fast.
const TEST_COST: u32 = 4;

pub fn in_memory_state() -> web::Data<HttpState> {
    let users = Arc::new(InMemoryUserRepository::new());
    let accounts = UserAccountService::new(
        users.clone(),
        Arc::new(BcryptCredentialHasher::new(TEST_COST)),
    );
    let meetups = MeetupService::new(Arc::new(InMemoryMeetupRepository::new()), users);
    web::Data::new(HttpState::from_services(
        Arc::new(accounts),
        Arc::new(meetups),
    ))
}

/// Status, `trace-id` header and JSON body (or `Null`) of a response.
pub struct Reply {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

/// Serve one request from a fresh app over `state`.
///
/// Apps are cheap; the stores live in `state`, so consecutive calls see each
/// other's writes.
pub async fn call(state: &web::Data<HttpState>, request: test::TestRequest) -> Reply {
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .wrap(Trace)
            .service(api_scope()),
    )
    .await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(backend::domain::TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    Reply {
        status,
        trace_id,
        body,
    }
}

pub fn registration(username: &str, is_admin: bool) -> Value {
    json!({
        "username": username,
        "name": "John",
        "surname": "Jack",
        "password": "asdf1234.-",
        "email": format!("{username}@mail.com"),
        "age": 30,
        "isAdmin": is_admin,
    })
}
