//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{
    MockLoginService, MockMeetupsCommand, MockMeetupsQuery, MockUsersCommand, MockUsersQuery,
};
use crate::domain::{CredentialHash, NewUserRecord, User, UserId, UserProfile};
use crate::inbound::http::state::HttpState;

/// One mock per driving port; set expectations, then call [`Self::into_state`].
#[derive(Default)]
pub struct MockPorts {
    pub login: MockLoginService,
    pub users: MockUsersQuery,
    pub users_command: MockUsersCommand,
    pub meetups: MockMeetupsCommand,
    pub meetups_query: MockMeetupsQuery,
}

impl MockPorts {
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState {
            login: Arc::new(self.login),
            users: Arc::new(self.users),
            users_command: Arc::new(self.users_command),
            meetups: Arc::new(self.meetups),
            meetups_query: Arc::new(self.meetups_query),
        })
    }
}

/// A stored account with a dummy hash.
pub fn sample_user(username: &str, is_admin: bool) -> User {
    User::new(
        UserId::random(),
        NewUserRecord {
            profile: UserProfile {
                username: username.to_owned(),
                name: "John".into(),
                surname: "Jack".into(),
                email: format!("{username}@mail.com"),
                age: 30,
            },
            is_admin,
            password_hash: CredentialHash::new("$2b$04$not-a-real-hash"),
        },
    )
}
