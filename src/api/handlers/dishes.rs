//! Handlers for the dishes of a restaurant.

use axum::{
    Extension, Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::dish::{CreateDishRequest, DishDto};
use crate::api::extract::{ApiJson, ApiPath};
use crate::application::authorization::Policy;
use crate::domain::entities::Principal;
use crate::error::AppError;
use crate::state::AppState;

/// Adds a dish to a restaurant owned by the caller.
///
/// `POST /api/restaurant/{restaurant_id}/dish` answers `201 Created` with
/// `Location: /api/restaurant/{restaurant_id}/dish/{dish_id}`.
pub async fn create_dish_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(restaurant_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<CreateDishRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let dish_id = state
        .dish_service
        .create(&principal, restaurant_id, payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("/api/restaurant/{restaurant_id}/dish/{dish_id}"),
        )],
    ))
}

/// `GET /api/restaurant/{restaurant_id}/dish` (requires `HasNationality`).
pub async fn list_dishes_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(restaurant_id): ApiPath<i64>,
) -> Result<Json<Vec<DishDto>>, AppError> {
    state
        .authorization_service
        .authorize(&principal, Policy::HasNationality)
        .await?;

    let dishes = state.dish_service.get_all(restaurant_id).await?;

    Ok(Json(dishes.into_iter().map(DishDto::from).collect()))
}

/// `GET /api/restaurant/{restaurant_id}/dish/{dish_id}` (requires `HasNationality`).
pub async fn get_dish_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath((restaurant_id, dish_id)): ApiPath<(i64, i64)>,
) -> Result<Json<DishDto>, AppError> {
    state
        .authorization_service
        .authorize(&principal, Policy::HasNationality)
        .await?;

    let dish = state.dish_service.get_by_id(restaurant_id, dish_id).await?;

    Ok(Json(dish.into()))
}

/// Removes every dish of a restaurant.
///
/// `DELETE /api/restaurant/{restaurant_id}/dish` requires the
/// `CreatedAtLeast2Restaurants` policy and ownership of the restaurant.
pub async fn delete_all_dishes_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(restaurant_id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state
        .authorization_service
        .authorize(&principal, Policy::CreatedAtLeast2Restaurants)
        .await?;

    state
        .dish_service
        .remove_all(&principal, restaurant_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/restaurant/{restaurant_id}/dish/{dish_id}` (owner only).
pub async fn delete_dish_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath((restaurant_id, dish_id)): ApiPath<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    state
        .dish_service
        .remove_by_id(&principal, restaurant_id, dish_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
