//! PostgreSQL-backed [`MeetupRepository`].
//!
//! Participants live in `user_meetups` and are attached after the meetup
//! rows are read.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::ports::{MeetupPersistenceError, MeetupRepository};
use crate::domain::{Meetup, MeetupId, NewMeetup, UserId};

use super::diesel_error_mapping::{map_meetup_diesel_error, map_meetup_pool_error};
use super::models::{MeetupRow, NewMeetupRow};
use super::pool::DbPool;
use super::schema::{meetups, user_meetups};

#[derive(Clone)]
pub struct DieselMeetupRepository {
    pool: DbPool,
}

impl DieselMeetupRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

async fn participants_of(
    conn: &mut AsyncPgConnection,
    meetup_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<UserId>>, MeetupPersistenceError> {
    let links: Vec<(Uuid, Uuid)> = user_meetups::table
        .filter(user_meetups::meetup_id.eq_any(meetup_ids))
        .select((user_meetups::meetup_id, user_meetups::user_id))
        .load(conn)
        .await
        .map_err(map_meetup_diesel_error)?;

    let mut grouped: HashMap<Uuid, Vec<UserId>> = HashMap::new();
    for (meetup_id, user_id) in links {
        grouped
            .entry(meetup_id)
            .or_default()
            .push(UserId::from_uuid(user_id));
    }
    Ok(grouped)
}

#[async_trait]
impl MeetupRepository for DieselMeetupRepository {
    async fn create(&self, draft: NewMeetup) -> Result<Meetup, MeetupPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_meetup_pool_error)?;

        let row = diesel::insert_into(meetups::table)
            .values(NewMeetupRow::new(Uuid::new_v4(), &draft))
            .returning(MeetupRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_meetup_diesel_error)?;

        Ok(row.into_meetup(Vec::new()))
    }

    async fn list(&self) -> Result<Vec<Meetup>, MeetupPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_meetup_pool_error)?;

        let rows: Vec<MeetupRow> = meetups::table
            .order((meetups::created_at.asc(), meetups::id.asc()))
            .select(MeetupRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_meetup_diesel_error)?;

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut participants = participants_of(&mut conn, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let members = participants.remove(&row.id).unwrap_or_default();
                row.into_meetup(members)
            })
            .collect())
    }

    async fn find_by_id(&self, id: MeetupId) -> Result<Option<Meetup>, MeetupPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_meetup_pool_error)?;

        let row: Option<MeetupRow> = meetups::table
            .find(*id.as_uuid())
            .select(MeetupRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_meetup_diesel_error)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut participants = participants_of(&mut conn, &[row.id]).await?;
        let members = participants.remove(&row.id).unwrap_or_default();
        Ok(Some(row.into_meetup(members)))
    }

    async fn delete(&self, id: MeetupId) -> Result<bool, MeetupPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_meetup_pool_error)?;

        // `user_meetups` rows cascade.
        let removed = diesel::delete(meetups::table.find(*id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_meetup_diesel_error)?;

        Ok(removed > 0)
    }
}
