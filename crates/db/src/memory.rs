//! `MemoryPetStore` — an in-process [`PetStore`].
//!
//! Behaves like the Postgres store (ascending ids starting at 1, id-ordered
//! results, null-aware search) without needing a database.  Used in tests
//! and by `serve --in-memory`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    DbError, PetStore,
    models::{NewPet, Pet, PetQuery},
};

#[derive(Debug)]
struct State {
    pets: BTreeMap<i32, Pet>,
    next_id: i32,
}

impl State {
    fn insert(&mut self, pet: NewPet) -> Pet {
        let pet = pet.into_pet(self.next_id);
        self.next_id += 1;
        self.pets.insert(pet.id, pet.clone());
        pet
    }
}

/// Pets kept in a `BTreeMap` keyed by id.
#[derive(Debug)]
pub struct MemoryPetStore {
    state: Mutex<State>,
}

impl MemoryPetStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                pets: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored pets.
    pub async fn len(&self) -> usize {
        self.state.lock().await.pets.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryPetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PetStore for MemoryPetStore {
    async fn find_all(&self) -> Result<Vec<Pet>, DbError> {
        Ok(self.state.lock().await.pets.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, DbError> {
        Ok(self.state.lock().await.pets.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, DbError> {
        Ok(self.state.lock().await.pets.contains_key(&id))
    }

    async fn insert(&self, pet: NewPet) -> Result<Pet, DbError> {
        Ok(self.state.lock().await.insert(pet))
    }

    async fn insert_all(&self, pets: Vec<NewPet>) -> Result<Vec<Pet>, DbError> {
        let mut state = self.state.lock().await;
        Ok(pets.into_iter().map(|pet| state.insert(pet)).collect())
    }

    async fn save(&self, pet: Pet) -> Result<Pet, DbError> {
        let mut state = self.state.lock().await;
        // Keep the counter ahead of ids recreated by a save.
        state.next_id = state.next_id.max(pet.id + 1);
        state.pets.insert(pet.id, pet.clone());
        Ok(pet)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError> {
        self.state.lock().await.pets.remove(&id);
        Ok(())
    }

    async fn search(&self, query: &PetQuery) -> Result<Vec<Pet>, DbError> {
        let state = self.state.lock().await;
        Ok(state
            .pets
            .values()
            .filter(|pet| query.matches(pet))
            .cloned()
            .collect())
    }

    async fn find_by_max_price(&self, max_price: f64) -> Result<Vec<Pet>, DbError> {
        let state = self.state.lock().await;
        Ok(state
            .pets
            .values()
            .filter(|pet| pet.price.is_some_and(|price| at_most(price, max_price)))
            .cloned()
            .collect())
    }
}

/// `price <= max_price` under Postgres float ordering, where NaN sorts above
/// every number and equals itself.
fn at_most(price: f64, max_price: f64) -> bool {
    if max_price.is_nan() {
        true
    } else {
        !price.is_nan() && price <= max_price
    }
}
