//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only see domain ports, so they
//! can be exercised with test doubles and no I/O.

use std::sync::Arc;

use crate::domain::ports::{LoginService, MeetupsCommand, MeetupsQuery, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub meetups: Arc<dyn MeetupsCommand>,
    pub meetups_query: Arc<dyn MeetupsQuery>,
}

impl HttpState {
    /// Build state from one account service and one meetup service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{MeetupService, UserAccountService};
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::crypto::BcryptCredentialHasher;
    /// use backend::outbound::memory::{InMemoryMeetupRepository, InMemoryUserRepository};
    ///
    /// let users = Arc::new(InMemoryUserRepository::default());
    /// let accounts = UserAccountService::new(users.clone(), Arc::new(BcryptCredentialHasher::default()));
    /// let meetups = MeetupService::new(Arc::new(InMemoryMeetupRepository::default()), users);
    /// let state = HttpState::from_services(Arc::new(accounts), Arc::new(meetups));
    /// let _login = state.login.clone();
    /// ```
    pub fn from_services<A, M>(accounts: Arc<A>, meetups: Arc<M>) -> Self
    where
        A: LoginService + UsersQuery + UsersCommand + 'static,
        M: MeetupsCommand + MeetupsQuery + 'static,
    {
        Self {
            login: accounts.clone(),
            users: accounts.clone(),
            users_command: accounts,
            meetups: meetups.clone(),
            meetups_query: meetups,
        }
    }
}
