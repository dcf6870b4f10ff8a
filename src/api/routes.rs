//! API route configuration.
//!
//! Routes are split by the protection they need; the top-level router in
//! [`crate::routes`] attaches authentication and rate limiting.

use crate::api::handlers::{
    create_dish_handler, create_restaurant_handler, delete_all_dishes_handler,
    delete_dish_handler, delete_restaurant_handler, get_dish_handler, get_restaurant_handler,
    list_dishes_handler, list_restaurants_handler, login_handler, register_handler,
    update_restaurant_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Anonymous account routes.
///
/// - `POST /account/register` - Create an account
/// - `POST /account/login`    - Exchange credentials for a JWT
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/account/register", post(register_handler))
        .route("/account/login", post(login_handler))
}

/// Anonymous restaurant routes.
///
/// - `GET /restaurant` - Paged restaurant listing
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/restaurant", get(list_restaurants_handler))
}

/// Routes requiring a Bearer token. Policies and ownership are checked by
/// the handlers and services.
///
/// # Endpoints
///
/// - `POST   /restaurant`                   - Create (Admin or Manager)
/// - `GET    /restaurant/{id}`              - Details (`AtLeast20`)
/// - `PUT    /restaurant/{id}`              - Update (owner)
/// - `DELETE /restaurant/{id}`              - Delete (owner)
/// - `GET    /restaurant/{id}/dish`         - List dishes (`HasNationality`)
/// - `POST   /restaurant/{id}/dish`         - Add dish (owner)
/// - `DELETE /restaurant/{id}/dish`         - Remove all dishes (owner, `CreatedAtLeast2Restaurants`)
/// - `GET    /restaurant/{id}/dish/{dish}`  - Dish details (`HasNationality`)
/// - `DELETE /restaurant/{id}/dish/{dish}`  - Remove dish (owner)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurant", post(create_restaurant_handler))
        .route(
            "/restaurant/{id}",
            get(get_restaurant_handler)
                .put(update_restaurant_handler)
                .delete(delete_restaurant_handler),
        )
        .route(
            "/restaurant/{id}/dish",
            get(list_dishes_handler)
                .post(create_dish_handler)
                .delete(delete_all_dishes_handler),
        )
        .route(
            "/restaurant/{id}/dish/{dish_id}",
            get(get_dish_handler).delete(delete_dish_handler),
        )
}
