//! In-memory [`MeetupRepository`].

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{MeetupPersistenceError, MeetupRepository};
use crate::domain::{Meetup, MeetupId, NewMeetup};

use super::poisoned;

/// Meetups kept in creation order behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryMeetupRepository {
    meetups: RwLock<Vec<Meetup>>,
}

impl InMemoryMeetupRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MeetupRepository for InMemoryMeetupRepository {
    async fn create(&self, draft: NewMeetup) -> Result<Meetup, MeetupPersistenceError> {
        let meetup = Meetup::new(MeetupId::random(), draft);
        self.meetups
            .write()
            .map_err(|err| MeetupPersistenceError::query(poisoned(err)))?
            .push(meetup.clone());
        Ok(meetup)
    }

    async fn list(&self) -> Result<Vec<Meetup>, MeetupPersistenceError> {
        let meetups = self
            .meetups
            .read()
            .map_err(|err| MeetupPersistenceError::query(poisoned(err)))?;
        Ok(meetups.clone())
    }

    async fn find_by_id(&self, id: MeetupId) -> Result<Option<Meetup>, MeetupPersistenceError> {
        let meetups = self
            .meetups
            .read()
            .map_err(|err| MeetupPersistenceError::query(poisoned(err)))?;
        Ok(meetups.iter().find(|meetup| meetup.id == id).cloned())
    }

    async fn delete(&self, id: MeetupId) -> Result<bool, MeetupPersistenceError> {
        let mut meetups = self
            .meetups
            .write()
            .map_err(|err| MeetupPersistenceError::query(poisoned(err)))?;
        let before = meetups.len();
        meetups.retain(|meetup| meetup.id != id);
        Ok(meetups.len() != before)
    }
}
