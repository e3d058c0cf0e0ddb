//! The `PetStore` trait — the persistence contract the service layer needs.

use async_trait::async_trait;

use crate::{
    DbError, DbPool,
    models::{NewPet, Pet, PetQuery},
    repository::pets as pet_repo,
};

/// CRUD and predicate queries over pets.
///
/// Implemented by [`PgPetStore`] for production and by
/// [`MemoryPetStore`](crate::MemoryPetStore) for tests.  Both must agree on
/// ordering (ascending id) and on the null-aware search semantics documented
/// on [`PetQuery`].
#[async_trait]
pub trait PetStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Pet>, DbError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, DbError>;

    async fn exists_by_id(&self, id: i32) -> Result<bool, DbError>;

    /// Persist a new pet, assigning it a fresh id.
    async fn insert(&self, pet: NewPet) -> Result<Pet, DbError>;

    /// Persist a batch of new pets.  Output order matches input order.
    async fn insert_all(&self, pets: Vec<NewPet>) -> Result<Vec<Pet>, DbError>;

    /// Write every field of an existing pet, recreating it if it has vanished.
    async fn save(&self, pet: Pet) -> Result<Pet, DbError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError>;

    async fn search(&self, query: &PetQuery) -> Result<Vec<Pet>, DbError>;

    async fn find_by_max_price(&self, max_price: f64) -> Result<Vec<Pet>, DbError>;
}

/// Postgres-backed store.  A thin adapter over [`crate::repository::pets`].
#[derive(Debug, Clone)]
pub struct PgPetStore {
    pool: DbPool,
}

impl PgPetStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PetStore for PgPetStore {
    async fn find_all(&self) -> Result<Vec<Pet>, DbError> {
        pet_repo::list_pets(&self.pool).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, DbError> {
        pet_repo::get_pet(&self.pool, id).await
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, DbError> {
        pet_repo::pet_exists(&self.pool, id).await
    }

    async fn insert(&self, pet: NewPet) -> Result<Pet, DbError> {
        pet_repo::insert_pet(&self.pool, &pet).await
    }

    async fn insert_all(&self, pets: Vec<NewPet>) -> Result<Vec<Pet>, DbError> {
        pet_repo::insert_pets(&self.pool, &pets).await
    }

    async fn save(&self, pet: Pet) -> Result<Pet, DbError> {
        pet_repo::upsert_pet(&self.pool, &pet).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError> {
        pet_repo::delete_pet(&self.pool, id).await
    }

    async fn search(&self, query: &PetQuery) -> Result<Vec<Pet>, DbError> {
        pet_repo::search_pets(&self.pool, query).await
    }

    async fn find_by_max_price(&self, max_price: f64) -> Result<Vec<Pet>, DbError> {
        pet_repo::pets_priced_at_most(&self.pool, max_price).await
    }
}
