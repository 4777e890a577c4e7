//! Infrastructure layer
//!
//! - `database`: SeaORM entities, migrations and repositories
//! - `memory`: in-memory repositories for development and testing

pub mod database;
pub mod memory;

pub use database::{init_database, DatabaseConfig};
pub use memory::InMemoryRepositoryProvider;
