use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use db::{NewPet, Pet, PetQuery};
use service::SearchOutcome;

use crate::{ApiError, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Pet>>, ApiError> {
    Ok(Json(state.service.list_all().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewPet>,
) -> Result<(StatusCode, Json<Pet>), ApiError> {
    let pet = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

pub async fn get(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Pet>, ApiError> {
    match state.service.get_by_id(id).await? {
        Some(pet) => Ok(Json(pet)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn update(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<NewPet>,
) -> Result<Json<Pet>, ApiError> {
    match state.service.update(id, payload).await? {
        Some(pet) => Ok(Json(pet)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn delete(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    if state.service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// Parameters left out of the query string are matched against NULL columns.
pub async fn search(
    Query(query): Query<PetQuery>,
    State(state): State<AppState>,
) -> Result<Json<SearchOutcome>, ApiError> {
    Ok(Json(state.service.search(query).await?))
}

pub async fn search_by_price(
    Path(price): Path<f64>,
    State(state): State<AppState>,
) -> Result<Json<SearchOutcome>, ApiError> {
    Ok(Json(state.service.search_by_price(price).await?))
}

pub async fn bulk_create(
    State(state): State<AppState>,
    Json(payload): Json<Vec<NewPet>>,
) -> Result<(StatusCode, Json<Vec<Pet>>), ApiError> {
    let pets = state.service.bulk_create(payload).await?;
    Ok((StatusCode::CREATED, Json(pets)))
}
