//! Diesel row structs. Internal to the persistence adapters.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    CredentialHash, Meetup, MeetupId, NewMeetup, NewUserRecord, User, UserId, UserProfile,
};

use super::schema::{meetups, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub password_hash: String,
    pub email: String,
    pub age: i32,
    pub is_admin: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(
            UserId::from_uuid(row.id),
            NewUserRecord {
                profile: UserProfile {
                    username: row.username,
                    name: row.name,
                    surname: row.surname,
                    email: row.email,
                    age: row.age,
                },
                is_admin: row.is_admin,
                password_hash: CredentialHash::new(row.password_hash),
            },
        )
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
    pub name: &'a str,
    pub surname: &'a str,
    pub password_hash: &'a str,
    pub email: &'a str,
    pub age: i32,
    pub is_admin: bool,
}

impl<'a> NewUserRow<'a> {
    pub(crate) fn new(id: Uuid, record: &'a NewUserRecord) -> Self {
        let profile = &record.profile;
        Self {
            id,
            username: &profile.username,
            name: &profile.name,
            surname: &profile.surname,
            password_hash: record.password_hash.as_str(),
            email: &profile.email,
            age: profile.age,
            is_admin: record.is_admin,
        }
    }
}

/// Profile columns touched by an update; the hash and admin flag stay put.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserProfileChangeset<'a> {
    pub username: &'a str,
    pub name: &'a str,
    pub surname: &'a str,
    pub email: &'a str,
    pub age: i32,
}

impl<'a> From<&'a UserProfile> for UserProfileChangeset<'a> {
    fn from(profile: &'a UserProfile) -> Self {
        Self {
            username: &profile.username,
            name: &profile.name,
            surname: &profile.surname,
            email: &profile.email,
            age: profile.age,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = meetups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MeetupRow {
    pub id: Uuid,
    pub name: String,
    pub details: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: String,
    pub quota: i32,
    pub registered_user_count: i32,
}

impl MeetupRow {
    pub(crate) fn into_meetup(self, participants: Vec<UserId>) -> Meetup {
        Meetup {
            id: MeetupId::from_uuid(self.id),
            name: self.name,
            details: self.details,
            start_date: self.start_date,
            end_date: self.end_date,
            address: self.address,
            quota: self.quota,
            registered_user_count: self.registered_user_count,
            participants,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = meetups)]
pub(crate) struct NewMeetupRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub details: &'a str,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub address: &'a str,
    pub quota: i32,
    pub registered_user_count: i32,
}

impl<'a> NewMeetupRow<'a> {
    pub(crate) fn new(id: Uuid, draft: &'a NewMeetup) -> Self {
        Self {
            id,
            name: &draft.name,
            details: &draft.details,
            start_date: draft.start_date,
            end_date: draft.end_date,
            address: &draft.address,
            quota: draft.quota,
            registered_user_count: draft.registered_user_count,
        }
    }
}
