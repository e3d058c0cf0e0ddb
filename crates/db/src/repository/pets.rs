//! Pet CRUD and search operations.

use sqlx::{PgExecutor, PgPool};

use crate::{
    DbError,
    models::{NewPet, Pet, PetQuery},
};

/// Insert a new pet.  The id comes from the `pets_id_seq` sequence.
pub async fn insert_pet(pool: &PgPool, pet: &NewPet) -> Result<Pet, DbError> {
    insert_with(pool, pet).await
}

/// Insert every pet in `pets` inside a single transaction.
///
/// Rows are inserted (and returned) in input order, so assigned ids are
/// ascending.  Either all rows are written or none are.
pub async fn insert_pets(pool: &PgPool, pets: &[NewPet]) -> Result<Vec<Pet>, DbError> {
    let mut tx = pool.begin().await?;

    let mut saved = Vec::with_capacity(pets.len());
    for pet in pets {
        saved.push(insert_with(&mut *tx, pet).await?);
    }

    tx.commit().await?;
    Ok(saved)
}

async fn insert_with<'e, E>(executor: E, pet: &NewPet) -> Result<Pet, DbError>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, Pet>(
        r#"
        INSERT INTO pets (name, species, breed, gender, image, description, price)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, species, breed, gender, image, description, price
        "#,
    )
    .bind(&pet.name)
    .bind(&pet.species)
    .bind(&pet.breed)
    .bind(&pet.gender)
    .bind(&pet.image)
    .bind(&pet.description)
    .bind(pet.price)
    .fetch_one(executor)
    .await?;

    Ok(row)
}

/// Write every column of `pet`, keyed on its id.
///
/// If the row no longer exists it is re-inserted under the same id.
pub async fn upsert_pet(pool: &PgPool, pet: &Pet) -> Result<Pet, DbError> {
    let row = sqlx::query_as::<_, Pet>(
        r#"
        INSERT INTO pets (id, name, species, breed, gender, image, description, price)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (id) DO UPDATE
        SET name = EXCLUDED.name,
            species = EXCLUDED.species,
            breed = EXCLUDED.breed,
            gender = EXCLUDED.gender,
            image = EXCLUDED.image,
            description = EXCLUDED.description,
            price = EXCLUDED.price
        RETURNING id, name, species, breed, gender, image, description, price
        "#,
    )
    .bind(pet.id)
    .bind(&pet.name)
    .bind(&pet.species)
    .bind(&pet.breed)
    .bind(&pet.gender)
    .bind(&pet.image)
    .bind(&pet.description)
    .bind(pet.price)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Fetch a single pet by its primary key.
pub async fn get_pet(pool: &PgPool, id: i32) -> Result<Option<Pet>, DbError> {
    let row = sqlx::query_as::<_, Pet>(
        r#"SELECT id, name, species, breed, gender, image, description, price FROM pets WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Return all pets ordered by id.
pub async fn list_pets(pool: &PgPool) -> Result<Vec<Pet>, DbError> {
    let rows = sqlx::query_as::<_, Pet>(
        r#"SELECT id, name, species, breed, gender, image, description, price FROM pets ORDER BY id"#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn pet_exists(pool: &PgPool, id: i32) -> Result<bool, DbError> {
    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM pets WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

/// Permanently delete a pet.  Deleting an unknown id is a no-op.
pub async fn delete_pet(pool: &PgPool, id: i32) -> Result<(), DbError> {
    sqlx::query("DELETE FROM pets WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Combined text search, ORed across the six text columns.
///
/// `IS NOT DISTINCT FROM` makes an unbound (NULL) parameter match NULL
/// columns instead of nothing.
pub async fn search_pets(pool: &PgPool, query: &PetQuery) -> Result<Vec<Pet>, DbError> {
    let rows = sqlx::query_as::<_, Pet>(
        r#"
        SELECT id, name, species, breed, gender, image, description, price
        FROM pets
        WHERE name IS NOT DISTINCT FROM $1
           OR species IS NOT DISTINCT FROM $2
           OR breed IS NOT DISTINCT FROM $3
           OR gender IS NOT DISTINCT FROM $4
           OR image IS NOT DISTINCT FROM $5
           OR description IS NOT DISTINCT FROM $6
        ORDER BY id
        "#,
    )
    .bind(&query.name)
    .bind(&query.species)
    .bind(&query.breed)
    .bind(&query.gender)
    .bind(&query.image)
    .bind(&query.description)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Pets priced at or below `max_price`.  Rows without a price never match.
pub async fn pets_priced_at_most(pool: &PgPool, max_price: f64) -> Result<Vec<Pet>, DbError> {
    let rows = sqlx::query_as::<_, Pet>(
        r#"
        SELECT id, name, species, breed, gender, image, description, price
        FROM pets
        WHERE price <= $1
        ORDER BY id
        "#,
    )
    .bind(max_price)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
