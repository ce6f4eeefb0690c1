//! Driven port for meetup storage.
use async_trait::async_trait;

use crate::domain::{Meetup, MeetupId, NewMeetup};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by meetup repository adapters.
    pub enum MeetupPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "meetup repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "meetup repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetupRepository: Send + Sync {
    /// Insert a meetup with no participants.
    async fn create(&self, draft: NewMeetup) -> Result<Meetup, MeetupPersistenceError>;

    async fn list(&self) -> Result<Vec<Meetup>, MeetupPersistenceError>;

    async fn find_by_id(&self, id: MeetupId) -> Result<Option<Meetup>, MeetupPersistenceError>;

    /// Remove a meetup and its participant links.
    ///
    /// Returns `false` when nothing matched `id`.
    async fn delete(&self, id: MeetupId) -> Result<bool, MeetupPersistenceError>;
}
