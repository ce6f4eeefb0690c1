//! OpenAPI document for the REST API.
//!
//! Served by Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::meetups::{CreateMeetupRequest, DeleteMeetupResponse, MeetupResponse};
use crate::inbound::http::users::{
    LoginRequest, RegisterUserRequest, UpdateProfileRequest, UserResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meetup backend API",
        description = "User registration and login, and admin-managed meetups."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user_profile,
        crate::inbound::http::users::login,
        crate::inbound::http::meetups::create_meetup,
        crate::inbound::http::meetups::list_meetups,
        crate::inbound::http::meetups::get_meetup,
        crate::inbound::http::meetups::delete_meetup,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        RegisterUserRequest,
        UpdateProfileRequest,
        LoginRequest,
        UserResponse,
        CreateMeetupRequest,
        MeetupResponse,
        DeleteMeetupResponse,
    )),
    tags(
        (name = "users", description = "Accounts and login"),
        (name = "meetups", description = "Meetup events"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected object schema for {name}"),
        }
    }

    #[rstest]
    #[case("Error", &["code", "message", "traceId", "details"])]
    #[case("UserResponse", &["id", "username", "email", "isAdmin"])]
    #[case("MeetupResponse", &["id", "startDate", "endDate", "participants"])]
    fn schemas_expose_wire_fields(#[case] schema: &str, #[case] fields: &[&str]) {
        let present = schema_fields(schema);
        for field in fields {
            assert!(
                present.iter().any(|name| name == field),
                "{schema} should have {field}"
            );
        }
    }

    #[rstest]
    fn user_schema_never_mentions_credentials() {
        let present = schema_fields("UserResponse");
        assert!(!present.iter().any(|name| name.contains("password")));
    }

    #[rstest]
    #[case("/api/v1/users")]
    #[case("/api/v1/users/{username}")]
    #[case("/api/v1/login")]
    #[case("/api/v1/meetups")]
    #[case("/api/v1/meetups/{adminUsername}")]
    #[case("/api/v1/meetups/{meetupId}")]
    #[case("/health/ready")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
