//! Row and input structs for the `pets` table.
//!
//! Every column except `id` is nullable, and nothing here validates its
//! contents.  A payload with missing fields is stored with NULLs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// pets
// ---------------------------------------------------------------------------

/// A persisted pet row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Pet {
    /// Assigned by the store on insert; never changed afterwards.
    pub id: i32,
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    /// URL or other reference to a picture of the pet.
    pub image: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl Pet {
    /// Overwrite every mutable field with the values in `fields`.
    ///
    /// This is a full replace: a `None` in `fields` clears the column.
    pub fn replace_fields(&mut self, fields: NewPet) {
        self.name = fields.name;
        self.species = fields.species;
        self.breed = fields.breed;
        self.gender = fields.gender;
        self.image = fields.image;
        self.description = fields.description;
        self.price = fields.price;
    }
}

/// The mutable fields of a pet, as received from a client.
///
/// Any `id` in the incoming JSON is ignored (unknown fields are skipped), and
/// absent fields default to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPet {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl NewPet {
    /// Attach a store-assigned `id`.
    pub fn into_pet(self, id: i32) -> Pet {
        let mut pet = Pet {
            id,
            name: None,
            species: None,
            breed: None,
            gender: None,
            image: None,
            description: None,
            price: None,
        };
        pet.replace_fields(self);
        pet
    }
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

/// Parameters of the combined text search.
///
/// Matching is null-aware equality ORed across the six fields: a present
/// parameter matches an equal column value, an absent one matches a NULL
/// column.  `Some("")` is a present value and does not match NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetQuery {
    pub name: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl PetQuery {
    /// `true` if any field of `pet` matches the corresponding parameter.
    pub fn matches(&self, pet: &Pet) -> bool {
        self.name == pet.name
            || self.species == pet.species
            || self.breed == pet.breed
            || self.gender == pet.gender
            || self.image == pet.image
            || self.description == pet.description
    }
}
