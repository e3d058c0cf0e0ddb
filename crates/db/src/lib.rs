//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, the `pets` row type, the [`PetStore`] contract
//! and two implementations of it: [`PgPetStore`] over Postgres and
//! [`MemoryPetStore`] for tests and database-less runs.  No business logic
//! lives here.

pub mod error;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repository;
pub mod store;

pub use error::DbError;
pub use memory::MemoryPetStore;
pub use models::{NewPet, Pet, PetQuery};
pub use pool::DbPool;
pub use store::{PetStore, PgPetStore};
