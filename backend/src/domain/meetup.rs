//! Meetup events.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::UserId;

/// Store-assigned meetup identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeetupId(Uuid);

impl MeetupId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for MeetupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MeetupId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// Meetup details supplied by an admin at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeetup {
    pub name: String,
    pub details: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub quota: i32,
    pub registered_user_count: i32,
}

/// Persisted meetup.
///
/// `registered_user_count` is expected to stay within `quota`, but nothing in
/// this crate registers participants, so the bound is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meetup {
    pub id: MeetupId,
    pub name: String,
    pub details: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub quota: i32,
    pub registered_user_count: i32,
    /// Participating users; order carries no meaning.
    pub participants: Vec<UserId>,
}

impl Meetup {
    /// Build a freshly created meetup with no participants.
    pub fn new(id: MeetupId, draft: NewMeetup) -> Self {
        let NewMeetup {
            name,
            details,
            start_date,
            end_date,
            address,
            quota,
            registered_user_count,
        } = draft;
        Self {
            id,
            name,
            details,
            start_date,
            end_date,
            address,
            quota,
            registered_user_count,
            participants: Vec::new(),
        }
    }
}
