//! In-memory [`UserRepository`].

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUserRecord, User, UserId};

use super::poisoned;

/// Accounts kept in creation order behind a lock.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, record: NewUserRecord) -> Result<User, UserPersistenceError> {
        let mut users = self
            .users
            .write()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        if users
            .iter()
            .any(|user| user.username() == record.profile.username)
        {
            return Err(UserPersistenceError::duplicate_username(
                record.profile.username,
            ));
        }
        let user = User::new(UserId::random(), record);
        users.push(user.clone());
        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self
            .users
            .write()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        if users
            .iter()
            .any(|other| other.id() != user.id() && other.username() == user.username())
        {
            return Err(UserPersistenceError::duplicate_username(user.username()));
        }
        let slot = users
            .iter_mut()
            .find(|stored| stored.id() == user.id())
            .ok_or_else(|| UserPersistenceError::query(format!("no user with id {}", user.id())))?;
        *slot = user.clone();
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserPersistenceError> {
        let users = self
            .users
            .read()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        Ok(users.iter().find(|user| user.username() == username).cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        let users = self
            .users
            .read()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        Ok(users
            .iter()
            .find(|user| user.username() == username || user.email() == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let users = self
            .users
            .read()
            .map_err(|err| UserPersistenceError::query(poisoned(err)))?;
        Ok(users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CredentialHash, UserProfile};
    use rstest::{fixture, rstest};

    fn record(username: &str, email: &str) -> NewUserRecord {
        NewUserRecord {
            profile: UserProfile {
                username: username.to_owned(),
                name: "John".into(),
                surname: "Jack".into(),
                email: email.to_owned(),
                age: 30,
            },
            is_admin: false,
            password_hash: CredentialHash::new("$2b$04$hash"),
        }
    }

    #[fixture]
    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_distinct_ids(repo: InMemoryUserRepository) {
        let john = repo.create(record("john", "john@mail.com")).await.expect("create");
        let jane = repo.create(record("jane", "jane@mail.com")).await.expect("create");

        assert_ne!(john.id(), jane.id());
        let listed = repo.list().await.expect("list");
        let names: Vec<&str> = listed.iter().map(User::username).collect();
        assert_eq!(names, ["john", "jane"]);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_username_is_rejected(repo: InMemoryUserRepository) {
        repo.create(record("john", "john@mail.com")).await.expect("create");

        let err = repo
            .create(record("john", "other@mail.com"))
            .await
            .expect_err("duplicate");

        assert_eq!(err, UserPersistenceError::duplicate_username("john"));
        assert_eq!(repo.list().await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn shared_email_is_allowed_and_first_match_wins(repo: InMemoryUserRepository) {
        let first = repo.create(record("john", "shared@mail.com")).await.expect("create");
        repo.create(record("jane", "shared@mail.com")).await.expect("create");

        let found = repo
            .find_by_username_or_email("", "shared@mail.com")
            .await
            .expect("lookup")
            .expect("match");

        assert_eq!(found.id(), first.id());
    }

    #[rstest]
    #[tokio::test]
    async fn save_replaces_profile(repo: InMemoryUserRepository) {
        let john = repo.create(record("john", "john@mail.com")).await.expect("create");
        let mut profile = john.profile().clone();
        profile.username = "johnny".into();

        repo.save(&john.with_profile(profile)).await.expect("save");

        assert!(repo.find_by_username("john").await.expect("lookup").is_none());
        assert!(repo.find_by_username("johnny").await.expect("lookup").is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn save_refuses_taken_username(repo: InMemoryUserRepository) {
        repo.create(record("john", "john@mail.com")).await.expect("create");
        let jane = repo.create(record("jane", "jane@mail.com")).await.expect("create");
        let mut profile = jane.profile().clone();
        profile.username = "john".into();

        let err = repo
            .save(&jane.with_profile(profile))
            .await
            .expect_err("taken");

        assert!(matches!(err, UserPersistenceError::DuplicateUsername { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn save_of_unknown_user_is_a_query_error(repo: InMemoryUserRepository) {
        let stray = User::new(UserId::random(), record("ghost", "ghost@mail.com"));

        let err = repo.save(&stray).await.expect_err("missing");

        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
