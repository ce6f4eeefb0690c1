//! Meetup handlers.
//!
//! ```text
//! POST   /api/v1/meetups/admin {"name":"Rust night","startDate":"2026-11-03T18:00:00Z",...}
//! GET    /api/v1/meetups
//! GET    /api/v1/meetups/3fa85f64-5717-4562-b3fc-2c963f66afa6
//! DELETE /api/v1/meetups/3fa85f64-5717-4562-b3fc-2c963f66afa6
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Error, Meetup, NewMeetup};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::bad_json;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, ensure_ordered, parse_meetup_id, parse_rfc3339_timestamp,
};

const MEETUP_ID: FieldName = FieldName::new("meetupId");

/// Body for `POST /api/v1/meetups/{adminUsername}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetupRequest {
    #[schema(example = "Rust night")]
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[schema(format = "date-time", example = "2026-11-03T18:00:00Z")]
    pub start_date: String,
    #[schema(format = "date-time", example = "2026-11-03T21:00:00Z")]
    pub end_date: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub quota: i32,
    #[serde(default)]
    pub registered_user_count: i32,
}

fn parse_create_meetup_request(payload: CreateMeetupRequest) -> Result<NewMeetup, Error> {
    let start_date = parse_rfc3339_timestamp(&payload.start_date, FieldName::new("startDate"))?;
    let end_date = parse_rfc3339_timestamp(&payload.end_date, FieldName::new("endDate"))?;
    ensure_ordered(start_date, end_date, FieldName::new("endDate"))?;

    Ok(NewMeetup {
        name: payload.name,
        details: payload.details,
        start_date,
        end_date,
        address: payload.address,
        quota: payload.quota,
        registered_user_count: payload.registered_user_count,
    })
}

/// Meetup as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetupResponse {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub quota: i32,
    pub registered_user_count: i32,
    /// Identifiers of participating users.
    pub participants: Vec<Uuid>,
}

impl From<Meetup> for MeetupResponse {
    fn from(meetup: Meetup) -> Self {
        Self {
            id: *meetup.id.as_uuid(),
            name: meetup.name,
            details: meetup.details,
            start_date: meetup.start_date,
            end_date: meetup.end_date,
            address: meetup.address,
            quota: meetup.quota,
            registered_user_count: meetup.registered_user_count,
            participants: meetup
                .participants
                .iter()
                .map(|id| *id.as_uuid())
                .collect(),
        }
    }
}

/// Confirmation body for `DELETE /api/v1/meetups/{meetupId}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMeetupResponse {
    pub message: String,
    pub id: Uuid,
}

/// Create a meetup. Only admins may do this.
///
/// The admin check runs before the body is decoded.
#[utoipa::path(
    post,
    path = "/api/v1/meetups/{adminUsername}",
    params(("adminUsername" = String, Path, description = "Username of the creating admin")),
    request_body = CreateMeetupRequest,
    responses(
        (status = 201, description = "Meetup created", body = MeetupResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 403, description = "Caller is not an admin", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["meetups"],
    operation_id = "createMeetup"
)]
#[post("/meetups/{admin_username}")]
pub async fn create_meetup(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let grant = state.meetups.authorize_creator(&path.into_inner()).await?;

    let payload: CreateMeetupRequest = serde_json::from_slice(&body).map_err(bad_json)?;
    let draft = parse_create_meetup_request(payload)?;
    let meetup = state.meetups.create_meetup(&grant, draft).await?;
    Ok(HttpResponse::Created().json(MeetupResponse::from(meetup)))
}

/// List all meetups.
#[utoipa::path(
    get,
    path = "/api/v1/meetups",
    responses(
        (status = 200, description = "Meetups", body = [MeetupResponse]),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["meetups"],
    operation_id = "listMeetups"
)]
#[get("/meetups")]
pub async fn list_meetups(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<MeetupResponse>>> {
    let meetups = state.meetups_query.list_meetups().await?;
    Ok(web::Json(
        meetups.into_iter().map(MeetupResponse::from).collect(),
    ))
}

/// Fetch one meetup.
#[utoipa::path(
    get,
    path = "/api/v1/meetups/{meetupId}",
    params(("meetupId" = Uuid, Path, description = "Meetup identifier")),
    responses(
        (status = 200, description = "Meetup", body = MeetupResponse),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Unknown meetup", body = Error)
    ),
    tags = ["meetups"],
    operation_id = "getMeetup"
)]
#[get("/meetups/{meetup_id}")]
pub async fn get_meetup(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MeetupResponse>> {
    let id = parse_meetup_id(&path.into_inner(), MEETUP_ID)?;
    let meetup = state.meetups_query.get_meetup(id).await?;
    Ok(web::Json(MeetupResponse::from(meetup)))
}

/// Delete a meetup and its participant links.
#[utoipa::path(
    delete,
    path = "/api/v1/meetups/{meetupId}",
    params(("meetupId" = Uuid, Path, description = "Meetup identifier")),
    responses(
        (status = 200, description = "Meetup deleted", body = DeleteMeetupResponse),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Unknown meetup", body = Error)
    ),
    tags = ["meetups"],
    operation_id = "deleteMeetup"
)]
#[delete("/meetups/{meetup_id}")]
pub async fn delete_meetup(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteMeetupResponse>> {
    let id = parse_meetup_id(&path.into_inner(), MEETUP_ID)?;
    state.meetups.delete_meetup(id).await?;
    Ok(web::Json(DeleteMeetupResponse {
        message: format!("Meetup deleted successfully. Deleted Meetup ID: {id}"),
        id: *id.as_uuid(),
    }))
}

#[cfg(test)]
mod tests;
