//! Diesel and pool failures mapped onto port error constructors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{MeetupPersistenceError, UserPersistenceError};

use super::pool::PoolError;

/// Map common Diesel failures through `query` and `connection` constructors.
pub(crate) fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        _ => query("database error"),
    }
}

pub(crate) fn map_user_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(error.into_message())
}

pub(crate) fn map_meetup_pool_error(error: PoolError) -> MeetupPersistenceError {
    MeetupPersistenceError::connection(error.into_message())
}

/// A unique violation on `users` can only come from the username index.
pub(crate) fn map_user_diesel_error(error: DieselError, username: &str) -> UserPersistenceError {
    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) = &error {
        return UserPersistenceError::duplicate_username(username);
    }
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

pub(crate) fn map_meetup_diesel_error(error: DieselError) -> MeetupPersistenceError {
    map_basic_diesel_error(
        error,
        MeetupPersistenceError::query,
        MeetupPersistenceError::connection,
    )
}
