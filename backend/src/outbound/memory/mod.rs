//! Process-local repositories.
//!
//! Used when no database is configured and by integration tests. Contents
//! are lost on restart.

mod meetup_repository;
mod user_repository;

pub use meetup_repository::InMemoryMeetupRepository;
pub use user_repository::InMemoryUserRepository;

use std::sync::PoisonError;

fn poisoned<T>(_: PoisonError<T>) -> String {
    "in-memory store lock poisoned".to_owned()
}
