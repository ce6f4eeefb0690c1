//! Driving port for reading meetups.

use async_trait::async_trait;

use crate::domain::{Error, Meetup, MeetupId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetupsQuery: Send + Sync {
    async fn list_meetups(&self) -> Result<Vec<Meetup>, Error>;

    /// Fetch one meetup; unknown ids are `not_found`.
    async fn get_meetup(&self, id: MeetupId) -> Result<Meetup, Error>;
}
