//! Driving port for meetup mutations.

use async_trait::async_trait;

use crate::domain::{AdminGrant, Error, Meetup, MeetupId, NewMeetup};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetupsCommand: Send + Sync {
    /// Confirm that `username` may create meetups.
    ///
    /// Unknown and non-admin accounts fail identically with `forbidden`.
    async fn authorize_creator(&self, username: &str) -> Result<AdminGrant, Error>;

    /// Store a meetup on behalf of an authorised admin.
    async fn create_meetup(&self, grant: &AdminGrant, draft: NewMeetup) -> Result<Meetup, Error>;

    /// Remove a meetup; unknown ids are `not_found`.
    async fn delete_meetup(&self, id: MeetupId) -> Result<(), Error>;
}
