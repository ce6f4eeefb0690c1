//! Meetup use cases.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::authorization::AdminGate;
use super::ports::{
    MeetupPersistenceError, MeetupRepository, MeetupsCommand, MeetupsQuery, UserRepository,
};
use super::{AdminGrant, Error, Meetup, MeetupId, NewMeetup};

pub const MEETUP_NOT_FOUND_MESSAGE: &str = "Meetup ID does not exist.";

fn map_meetup_persistence_error(error: MeetupPersistenceError) -> Error {
    match error {
        MeetupPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("meetup repository unavailable: {message}"))
        }
        MeetupPersistenceError::Query { message } => {
            Error::internal(format!("meetup repository error: {message}"))
        }
    }
}

/// Meetup service implementing [`MeetupsCommand`] and [`MeetupsQuery`].
pub struct MeetupService<M: ?Sized, U: ?Sized> {
    meetups: Arc<M>,
    admin_gate: AdminGate<U>,
}

impl<M: ?Sized, U: ?Sized> Clone for MeetupService<M, U> {
    fn clone(&self) -> Self {
        Self {
            meetups: Arc::clone(&self.meetups),
            admin_gate: self.admin_gate.clone(),
        }
    }
}

impl<M, U> MeetupService<M, U>
where
    M: MeetupRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    pub fn new(meetups: Arc<M>, users: Arc<U>) -> Self {
        Self {
            meetups,
            admin_gate: AdminGate::new(users),
        }
    }
}

#[async_trait]
impl<M, U> MeetupsCommand for MeetupService<M, U>
where
    M: MeetupRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn authorize_creator(&self, username: &str) -> Result<AdminGrant, Error> {
        self.admin_gate.authorize(username).await
    }

    async fn create_meetup(&self, grant: &AdminGrant, draft: NewMeetup) -> Result<Meetup, Error> {
        let meetup = self
            .meetups
            .create(draft)
            .await
            .map_err(map_meetup_persistence_error)?;
        info!(id = %meetup.id, admin = grant.username(), "meetup created");
        Ok(meetup)
    }

    async fn delete_meetup(&self, id: MeetupId) -> Result<(), Error> {
        let removed = self
            .meetups
            .delete(id)
            .await
            .map_err(map_meetup_persistence_error)?;
        if !removed {
            return Err(Error::not_found(MEETUP_NOT_FOUND_MESSAGE));
        }
        info!(%id, "meetup deleted");
        Ok(())
    }
}

#[async_trait]
impl<M, U> MeetupsQuery for MeetupService<M, U>
where
    M: MeetupRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    async fn list_meetups(&self) -> Result<Vec<Meetup>, Error> {
        self.meetups
            .list()
            .await
            .map_err(map_meetup_persistence_error)
    }

    async fn get_meetup(&self, id: MeetupId) -> Result<Meetup, Error> {
        self.meetups
            .find_by_id(id)
            .await
            .map_err(map_meetup_persistence_error)?
            .ok_or_else(|| Error::not_found(MEETUP_NOT_FOUND_MESSAGE))
    }
}
