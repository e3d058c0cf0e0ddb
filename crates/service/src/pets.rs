//! `PetService` — maps each pet operation onto the store.
//!
//! The service keeps no state of its own.  It performs no validation; payloads
//! are persisted exactly as received, and store failures are propagated
//! untouched.

use std::sync::Arc;

use db::{NewPet, Pet, PetQuery, PetStore};
use tracing::{debug, info, instrument};

use crate::{Message, SearchOutcome, ServiceError};

pub struct PetService {
    store: Arc<dyn PetStore>,
}

impl PetService {
    pub fn new(store: Arc<dyn PetStore>) -> Self {
        Self { store }
    }

    /// Every stored pet, in store order (ascending id).
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Pet>, ServiceError> {
        let pets = self.store.find_all().await?;
        debug!("listed {} pets", pets.len());
        Ok(pets)
    }

    /// Persist `pet` and return it with its assigned id.
    #[instrument(skip(self, pet))]
    pub async fn create(&self, pet: NewPet) -> Result<Pet, ServiceError> {
        let saved = self.store.insert(pet).await?;
        info!(id = saved.id, "pet created");
        Ok(saved)
    }

    /// `None` when no pet has this id.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Pet>, ServiceError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Replace every mutable field of pet `id` with the values in `pet`.
    ///
    /// Fields missing from `pet` are cleared.  Returns `None` when no pet has
    /// this id.  The read and the write are separate store calls; a delete
    /// racing between them means the save recreates the row.
    #[instrument(skip(self, pet))]
    pub async fn update(&self, id: i32, pet: NewPet) -> Result<Option<Pet>, ServiceError> {
        let Some(mut current) = self.store.find_by_id(id).await? else {
            debug!("update target not found");
            return Ok(None);
        };

        current.replace_fields(pet);
        let updated = self.store.save(current).await?;
        info!(id, "pet updated");
        Ok(Some(updated))
    }

    /// `true` if the pet existed and has been deleted.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        if !self.store.exists_by_id(id).await? {
            debug!("delete target not found");
            return Ok(false);
        }

        self.store.delete_by_id(id).await?;
        info!(id, "pet deleted");
        Ok(true)
    }

    /// Null-aware OR search across the six text fields (see [`PetQuery`]).
    #[instrument(skip(self))]
    pub async fn search(&self, query: PetQuery) -> Result<SearchOutcome, ServiceError> {
        let pets = self.store.search(&query).await?;
        Ok(SearchOutcome::from_results(pets, Message::no_pet_match))
    }

    /// Pets priced at or below `max_price`.
    #[instrument(skip(self))]
    pub async fn search_by_price(&self, max_price: f64) -> Result<SearchOutcome, ServiceError> {
        let pets = self.store.find_by_max_price(max_price).await?;
        Ok(SearchOutcome::from_results(pets, || {
            Message::no_pets_for_price(max_price)
        }))
    }

    /// Persist every pet in `pets`, returning them in input order.
    #[instrument(skip(self, pets), fields(count = pets.len()))]
    pub async fn bulk_create(&self, pets: Vec<NewPet>) -> Result<Vec<Pet>, ServiceError> {
        let saved = self.store.insert_all(pets).await?;
        info!("{} pets created", saved.len());
        Ok(saved)
    }
}
