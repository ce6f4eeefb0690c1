//! Domain primitives, rules and use-case services.
//!
//! Purpose: hold everything that decides whether a user record is acceptable,
//! how credentials are derived and checked, and who may create meetups.
//! Nothing here knows about HTTP or SQL; adapters reach the domain through
//! the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - validate_user / validate_password / validate_email: acceptance rules.
//! - UserAccountService, MeetupService: implementations of the driving ports.
//! - AdminGate / AdminGrant: meetup creation gate.

pub mod authorization;
pub mod credentials;
pub mod error;
pub mod meetup;
pub mod meetups;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_accounts;
pub mod validation;

pub use self::authorization::{AdminGate, AdminGrant, NOT_ADMIN_MESSAGE};
pub use self::credentials::{
    CredentialHash, LoginCredentials, LoginIdentifier, LoginValidationError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::meetup::{Meetup, MeetupId, NewMeetup};
pub use self::meetups::MeetupService;
pub use self::trace_id::TraceId;
pub use self::user::{NewUserRecord, User, UserCandidate, UserId, UserProfile};
pub use self::user_accounts::UserAccountService;
pub use self::validation::{InvalidReason, validate_email, validate_password, validate_user};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
