//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel
//! - **memory**: process-local repositories for tests and database-less runs
//! - **crypto**: bcrypt credential hashing
//!
//! Adapters translate between domain types and infrastructure
//! representations and hold no business rules.

pub mod crypto;
pub mod memory;
pub mod persistence;
