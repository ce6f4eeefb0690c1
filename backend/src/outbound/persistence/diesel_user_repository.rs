//! PostgreSQL-backed [`UserRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUserRecord, User};

use super::diesel_error_mapping::{map_user_diesel_error, map_user_pool_error};
use super::models::{NewUserRow, UserProfileChangeset, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Accounts stored in the `users` table.
///
/// Username uniqueness is enforced by the table's unique index.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, record: NewUserRecord) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;

        let row = diesel::insert_into(users::table)
            .values(NewUserRow::new(Uuid::new_v4(), &record))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_user_diesel_error(err, &record.profile.username))?;

        Ok(User::from(row))
    }

    async fn save(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;

        let updated = diesel::update(users::table.find(*user.id().as_uuid()))
            .set(UserProfileChangeset::from(user.profile()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_user_diesel_error(err, user.username()))?;

        if updated == 0 {
            return Err(UserPersistenceError::query(format!(
                "no user with id {}",
                user.id()
            )));
        }
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;

        let row = users::table
            .filter(users::username.eq(username))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_user_diesel_error(err, username))?;

        Ok(row.map(User::from))
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;

        let row = users::table
            .filter(users::username.eq(username).or(users::email.eq(email)))
            .order((users::created_at.asc(), users::id.asc()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_user_diesel_error(err, username))?;

        Ok(row.map(User::from))
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_user_pool_error)?;

        let rows = users::table
            .order((users::created_at.asc(), users::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_user_diesel_error(err, ""))?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
