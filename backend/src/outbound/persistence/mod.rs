//! PostgreSQL adapters built on Diesel, `diesel-async` and a `bb8` pool.
//!
//! Repositories only translate between row structs and domain types. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module, and every failure surfaces as a port error.
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/meetsup")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_meetup_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_meetup_repository::DieselMeetupRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
