//! HTTP inbound adapter exposing the REST endpoints under `/api/v1`.

pub mod error;
pub mod health;
pub mod meetups;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Versioned API scope with every user and meetup handler registered.
///
/// Extractor failures are rendered in the shared error schema. The caller
/// supplies `web::Data<HttpState>`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user_profile)
        .service(users::login)
        .service(meetups::list_meetups)
        .service(meetups::create_meetup)
        .service(meetups::get_meetup)
        .service(meetups::delete_meetup)
}
