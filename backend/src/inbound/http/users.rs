//! User account handlers.
//!
//! ```text
//! POST /api/v1/users {"username":"john","name":"John","surname":"Jack",...}
//! GET  /api/v1/users/john
//! GET  /api/v1/users
//! POST /api/v1/login {"username":"john","password":"asdf1234.-"}
//! PUT  /api/v1/users/john {"username":"johnny",...}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    Error, LoginCredentials, LoginValidationError, User, UserCandidate, UserProfile,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Registration body for `POST /api/v1/users`.
///
/// Missing fields default to empty values so the validator can name the
/// first defect.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterUserRequest {
    #[schema(example = "john")]
    pub username: String,
    #[schema(example = "John")]
    pub name: String,
    #[schema(example = "Jack")]
    pub surname: String,
    #[schema(example = "asdf1234.-")]
    pub password: String,
    #[schema(example = "john@mail.com")]
    pub email: String,
    #[schema(example = 30)]
    pub age: i32,
    pub is_admin: bool,
}

impl From<RegisterUserRequest> for UserCandidate {
    fn from(value: RegisterUserRequest) -> Self {
        let RegisterUserRequest {
            username,
            name,
            surname,
            password,
            email,
            age,
            is_admin,
        } = value;
        UserCandidate::new(
            UserProfile {
                username,
                name,
                surname,
                email,
                age,
            },
            password,
            is_admin,
        )
    }
}

/// Profile body for `PUT /api/v1/users/{username}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: i32,
}

impl From<UpdateProfileRequest> for UserProfile {
    fn from(value: UpdateProfileRequest) -> Self {
        Self {
            username: value.username,
            name: value.name,
            surname: value.surname,
            email: value.email,
            age: value.age,
        }
    }
}

/// Login body for `POST /api/v1/login`; supply a username or an email.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    #[schema(example = "john")]
    pub username: String,
    pub email: String,
    #[schema(example = "asdf1234.-")]
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.email, &value.password)
    }
}

/// Public projection of an account. Credentials are never included.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: i32,
    pub is_admin: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        let profile = user.profile();
        Self {
            id: *user.id().as_uuid(),
            username: profile.username.clone(),
            name: profile.name.clone(),
            surname: profile.surname.clone(),
            email: profile.email.clone(),
            age: profile.age,
            is_admin: user.is_admin(),
        }
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::MissingIdentifier => {
            Error::invalid_request("username or email is required")
                .with_details(json!({ "field": "username", "code": "missing_identifier" }))
        }
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failed", body = Error),
        (status = 409, description = "Username already exists", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users_command
        .register(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

/// Fetch one account by username.
#[utoipa::path(
    get,
    path = "/api/v1/users/{username}",
    params(("username" = String, Path, description = "Account username")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "Unknown user", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{username}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.get_user(&path.into_inner()).await?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// List all accounts.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}

/// Log in with a username or an email.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Password is not correct", body = Error),
        (status = 404, description = "Username or email could not be found", body = Error)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let user = state.login.authenticate(&credentials).await?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// Replace the profile of an account.
#[utoipa::path(
    put,
    path = "/api/v1/users/{username}",
    params(("username" = String, Path, description = "Current username")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Validation failed", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 409, description = "Username already exists", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUserProfile"
)]
#[put("/users/{username}")]
pub async fn update_user_profile(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateProfileRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users_command
        .update_profile(&path.into_inner(), payload.into_inner().into())
        .await?;
    Ok(web::Json(UserResponse::from(&user)))
}
