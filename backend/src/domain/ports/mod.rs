//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_hasher;
mod login_service;
mod meetup_repository;
mod meetups_command;
mod meetups_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHashError, CredentialHasher};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use meetup_repository::MockMeetupRepository;
pub use meetup_repository::{MeetupPersistenceError, MeetupRepository};
#[cfg(test)]
pub use meetups_command::MockMeetupsCommand;
pub use meetups_command::MeetupsCommand;
#[cfg(test)]
pub use meetups_query::MockMeetupsQuery;
pub use meetups_query::MeetupsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
