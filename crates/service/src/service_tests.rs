//! Unit tests for `PetService`.
//!
//! These run against `MemoryPetStore`, so no Postgres connection is
//! required.  `BrokenStore` stands in for an unreachable database.

use std::sync::Arc;

use async_trait::async_trait;
use db::{DbError, MemoryPetStore, NewPet, Pet, PetQuery, PetStore};
use serde_json::json;

use crate::{Message, PetService, SearchOutcome, ServiceError};

fn service() -> PetService {
    PetService::new(Arc::new(MemoryPetStore::new()))
}

fn dog(name: &str, price: f64) -> NewPet {
    NewPet {
        name: Some(name.into()),
        species: Some("Dog".into()),
        breed: Some("Labrador".into()),
        gender: Some("Male".into()),
        image: Some(format!("https://img.example/{name}.jpg")),
        description: Some("Loves walks".into()),
        price: Some(price),
    }
}

/// A query that only matches on `name`.
fn by_name(name: &str) -> PetQuery {
    PetQuery {
        name: Some(name.into()),
        species: Some(String::new()),
        breed: Some(String::new()),
        gender: Some(String::new()),
        image: Some(String::new()),
        description: Some(String::new()),
    }
}

// ============================================================
// CRUD
// ============================================================

#[tokio::test]
async fn create_assigns_id_and_keeps_fields() {
    let svc = service();
    let payload = dog("Rex", 100.0);

    let saved = svc.create(payload.clone()).await.unwrap();

    assert_eq!(saved.id, 1);
    assert_eq!(saved, payload.into_pet(1));
}

#[tokio::test]
async fn create_accepts_an_empty_payload() {
    let svc = service();
    let saved = svc.create(NewPet::default()).await.unwrap();
    assert_eq!(saved.name, None);
    assert_eq!(saved.price, None);
}

#[tokio::test]
async fn list_all_is_empty_then_in_id_order() {
    let svc = service();
    assert!(svc.list_all().await.unwrap().is_empty());

    svc.create(dog("a", 1.0)).await.unwrap();
    svc.create(dog("b", 2.0)).await.unwrap();

    let ids: Vec<i32> = svc.list_all().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn unknown_id_is_not_found_everywhere() {
    let svc = service();
    assert_eq!(svc.get_by_id(42).await.unwrap(), None);
    assert_eq!(svc.update(42, dog("ghost", 1.0)).await.unwrap(), None);
    assert!(!svc.delete(42).await.unwrap());

    // A failed update must not create anything.
    assert!(svc.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_every_field_except_id() {
    let svc = service();
    let rex = svc.create(dog("Rex", 100.0)).await.unwrap();

    let patch = NewPet {
        name: Some("Rex2".into()),
        price: Some(150.0),
        ..NewPet::default()
    };
    let updated = svc.update(rex.id, patch).await.unwrap().expect("pet exists");

    assert_eq!(updated.id, rex.id);
    assert_eq!(updated.name.as_deref(), Some("Rex2"));
    assert_eq!(updated.price, Some(150.0));
    assert_eq!(updated.species, None);
    assert_eq!(updated.breed, None);
    assert_eq!(updated.gender, None);
    assert_eq!(updated.image, None);
    assert_eq!(updated.description, None);

    assert_eq!(svc.get_by_id(rex.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let svc = service();
    let rex = svc.create(dog("Rex", 100.0)).await.unwrap();

    assert!(svc.delete(rex.id).await.unwrap());
    assert_eq!(svc.get_by_id(rex.id).await.unwrap(), None);
    assert!(!svc.delete(rex.id).await.unwrap());
}

#[tokio::test]
async fn bulk_create_assigns_distinct_ids_in_order() {
    let svc = service();
    let saved = svc
        .bulk_create(vec![dog("first", 1.0), dog("second", 2.0)])
        .await
        .unwrap();

    assert_eq!(saved.len(), 2);
    assert_ne!(saved[0].id, saved[1].id);
    assert_eq!(saved[0].name.as_deref(), Some("first"));
    assert_eq!(saved[1].name.as_deref(), Some("second"));
    assert!(svc.bulk_create(Vec::new()).await.unwrap().is_empty());
}

// ============================================================
// Search
// ============================================================

#[tokio::test]
async fn search_without_matches_returns_message() {
    let svc = service();
    svc.create(dog("Rex", 100.0)).await.unwrap();

    let outcome = svc.search(PetQuery::default()).await.unwrap();
    assert_eq!(outcome, SearchOutcome::NoMatch(Message::no_pet_match()));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "message": "No pet found matching your criteria." })
    );
}

#[tokio::test]
async fn search_without_parameters_finds_pets_with_null_fields() {
    let svc = service();
    svc.create(dog("Rex", 100.0)).await.unwrap();
    let sparse = svc
        .create(NewPet {
            name: Some("Mystery".into()),
            ..NewPet::default()
        })
        .await
        .unwrap();

    match svc.search(PetQuery::default()).await.unwrap() {
        SearchOutcome::Matches(pets) => assert_eq!(pets, vec![sparse]),
        other => panic!("expected matches, got {other:?}"),
    }
}

#[tokio::test]
async fn search_matches_exact_name() {
    let svc = service();
    svc.create(dog("Rex", 100.0)).await.unwrap();
    let bella = svc.create(dog("Bella", 80.0)).await.unwrap();

    assert_eq!(
        svc.search(by_name("Bella")).await.unwrap(),
        SearchOutcome::Matches(vec![bella])
    );
    assert!(matches!(
        svc.search(by_name("bella")).await.unwrap(),
        SearchOutcome::NoMatch(_)
    ));
}

#[tokio::test]
async fn search_by_price_returns_exactly_the_cheaper_pets() {
    let svc = service();
    let cheap = svc.create(dog("cheap", 50.0)).await.unwrap();
    let exact = svc.create(dog("exact", 100.0)).await.unwrap();
    svc.create(dog("dear", 250.0)).await.unwrap();

    assert_eq!(
        svc.search_by_price(100.0).await.unwrap(),
        SearchOutcome::Matches(vec![cheap, exact])
    );
}

#[tokio::test]
async fn search_by_price_without_matches_names_the_price() {
    let svc = service();
    svc.create(dog("dear", 250.0)).await.unwrap();

    let outcome = svc.search_by_price(10.0).await.unwrap();
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "message": "No pets found for the price of: 10.0" })
    );
}

// ============================================================
// Store failures propagate
// ============================================================

struct BrokenStore;

fn unavailable() -> DbError {
    DbError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl PetStore for BrokenStore {
    async fn find_all(&self) -> Result<Vec<Pet>, DbError> {
        Err(unavailable())
    }
    async fn find_by_id(&self, _id: i32) -> Result<Option<Pet>, DbError> {
        Err(unavailable())
    }
    async fn exists_by_id(&self, _id: i32) -> Result<bool, DbError> {
        Err(unavailable())
    }
    async fn insert(&self, _pet: NewPet) -> Result<Pet, DbError> {
        Err(unavailable())
    }
    async fn insert_all(&self, _pets: Vec<NewPet>) -> Result<Vec<Pet>, DbError> {
        Err(unavailable())
    }
    async fn save(&self, _pet: Pet) -> Result<Pet, DbError> {
        Err(unavailable())
    }
    async fn delete_by_id(&self, _id: i32) -> Result<(), DbError> {
        Err(unavailable())
    }
    async fn search(&self, _query: &PetQuery) -> Result<Vec<Pet>, DbError> {
        Err(unavailable())
    }
    async fn find_by_max_price(&self, _max_price: f64) -> Result<Vec<Pet>, DbError> {
        Err(unavailable())
    }
}

#[tokio::test]
async fn store_failures_are_not_swallowed() {
    let svc = PetService::new(Arc::new(BrokenStore));

    assert!(matches!(svc.list_all().await, Err(ServiceError::Store(_))));
    assert!(matches!(svc.get_by_id(1).await, Err(ServiceError::Store(_))));
    assert!(matches!(svc.delete(1).await, Err(ServiceError::Store(_))));
    assert!(matches!(
        svc.search(PetQuery::default()).await,
        Err(ServiceError::Store(_))
    ));
    assert!(matches!(
        svc.create(dog("Rex", 1.0)).await,
        Err(ServiceError::Store(_))
    ));
    assert!(matches!(
        svc.update(1, dog("Rex", 1.0)).await,
        Err(ServiceError::Store(_))
    ));
    assert!(matches!(
        svc.search_by_price(100.0).await,
        Err(ServiceError::Store(_))
    ));
    assert!(matches!(
        svc.bulk_create(vec![dog("a", 1.0), dog("b", 2.0)]).await,
        Err(ServiceError::Store(_))
    ));
}
