//! Handlers for restaurant endpoints.

use axum::{
    Extension, Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::dto::pagination::RestaurantQueryParams;
use crate::api::dto::restaurant::{CreateRestaurantRequest, RestaurantDto, UpdateRestaurantRequest};
use crate::application::authorization::Policy;
use crate::application::paging::PagedResult;
use crate::domain::entities::{Principal, Role};
use crate::error::AppError;
use crate::state::AppState;

/// Lists restaurants page by page.
///
/// # Endpoint
///
/// `GET /api/restaurant`
///
/// # Query Parameters
///
/// - `searchPhrase` (optional): Case-insensitive match on name or description
/// - `pageNumber` (optional): Page number (default: 1)
/// - `pageSize` (optional): 5, 10 or 15 (default: 5)
/// - `sortBy` (optional): `Name`, `Description` or `Category`
/// - `sortDirection` (optional): `ASC` (default) or `DESC`
///
/// # Response
///
/// ```json
/// {
///   "items": [{ "id": 1, "name": "KFC", "hasDelivery": true, "dishes": [] }],
///   "totalPages": 1,
///   "itemsFrom": 1,
///   "itemsTo": 5,
///   "totalItemsCount": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if any query parameter is invalid.
pub async fn list_restaurants_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RestaurantQueryParams>,
) -> Result<Json<PagedResult<RestaurantDto>>, AppError> {
    let query = params.into_query()?;

    let page = state.restaurant_service.get_all(query).await?;

    Ok(Json(page.map(RestaurantDto::from)))
}

/// Retrieves one restaurant with its dishes.
///
/// # Endpoint
///
/// `GET /api/restaurant/{id}` (requires the `AtLeast20` policy)
///
/// # Errors
///
/// Returns 403 Forbidden if the caller is younger than 20 or has no date of
/// birth, 404 Not Found if the restaurant does not exist.
pub async fn get_restaurant_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<RestaurantDto>, AppError> {
    state
        .authorization_service
        .authorize(&principal, Policy::AtLeast20)
        .await?;

    let restaurant = state.restaurant_service.get_by_id(id).await?;

    Ok(Json(restaurant.into()))
}

/// Creates a restaurant owned by the caller.
///
/// # Endpoint
///
/// `POST /api/restaurant` (requires role `Admin` or `Manager`)
///
/// # Response
///
/// `201 Created` with `Location: /api/restaurant/{id}` and an empty body.
///
/// # Errors
///
/// Returns 403 Forbidden for other roles, 400 Bad Request if validation fails.
pub async fn create_restaurant_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    payload: Result<ApiJson<CreateRestaurantRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    state
        .authorization_service
        .require_role(&principal, &[Role::Admin, Role::Manager])?;

    let ApiJson(payload) = payload?;
    payload.validate()?;

    let id = state
        .restaurant_service
        .create(&principal, payload.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/restaurant/{id}"))],
    ))
}

/// Replaces name, description and delivery flag of a restaurant.
///
/// # Endpoint
///
/// `PUT /api/restaurant/{id}` (caller must be the creator)
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails, 404 Not Found if the
/// restaurant does not exist, 403 Forbidden if the caller is not its creator.
pub async fn update_restaurant_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateRestaurantRequest>,
) -> Result<StatusCode, AppError> {
    payload.validate()?;

    state
        .restaurant_service
        .update(&principal, id, payload.into())
        .await?;

    Ok(StatusCode::OK)
}

/// Deletes a restaurant together with its address and dishes.
///
/// # Endpoint
///
/// `DELETE /api/restaurant/{id}` (caller must be the creator)
///
/// # Errors
///
/// Returns 404 Not Found if the restaurant does not exist, 403 Forbidden if
/// the caller is not its creator.
pub async fn delete_restaurant_handler(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    state.restaurant_service.delete(&principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
