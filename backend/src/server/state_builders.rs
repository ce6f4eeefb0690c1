//! Wiring of repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use backend::domain::ports::{CredentialHasher, MeetupRepository, UserRepository};
use backend::domain::{MeetupService, UserAccountService};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::{InMemoryMeetupRepository, InMemoryUserRepository};
use backend::outbound::persistence::{DbPool, DieselMeetupRepository, DieselUserRepository};

use super::ServerConfig;

type Repositories = (Arc<dyn UserRepository>, Arc<dyn MeetupRepository>);

fn build_repositories(pool: Option<&DbPool>) -> Repositories {
    match pool {
        Some(pool) => (
            Arc::new(DieselUserRepository::new(pool.clone())),
            Arc::new(DieselMeetupRepository::new(pool.clone())),
        ),
        None => {
            warn!("no database configured; accounts and meetups are kept in memory");
            (
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryMeetupRepository::new()),
            )
        }
    }
}

fn build_state(
    users: Arc<dyn UserRepository>,
    meetups: Arc<dyn MeetupRepository>,
    hasher: Arc<dyn CredentialHasher>,
) -> HttpState {
    let accounts = UserAccountService::new(users.clone(), hasher);
    let meetup_service = MeetupService::new(meetups, users);
    HttpState::from_services(Arc::new(accounts), Arc::new(meetup_service))
}

/// Build the shared handler state for `config`.
///
/// Repositories are created once, so every worker sees the same stores.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (users, meetups) = build_repositories(config.db_pool.as_ref());
    web::Data::new(build_state(users, meetups, config.hasher.clone()))
}
