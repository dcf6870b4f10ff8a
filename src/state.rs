//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AccountService, AuthService, AuthorizationService, DishService, RestaurantService,
};
use crate::domain::repositories::{DishRepository, RestaurantRepository, UserRepository};
use crate::infrastructure::persistence::{
    PgDishRepository, PgRestaurantRepository, PgUserRepository,
};

/// Repository implementations the services are built on.
#[derive(Clone)]
pub struct Repositories {
    pub restaurants: Arc<dyn RestaurantRepository>,
    pub dishes: Arc<dyn DishRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            restaurants: Arc::new(PgRestaurantRepository::new(pool.clone())),
            dishes: Arc::new(PgDishRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub restaurant_service: Arc<RestaurantService<dyn RestaurantRepository>>,
    pub dish_service: Arc<DishService<dyn DishRepository, dyn RestaurantRepository>>,
    pub account_service: Arc<AccountService<dyn UserRepository>>,
    pub auth_service: Arc<AuthService>,
    pub authorization_service: Arc<AuthorizationService<dyn RestaurantRepository>>,
}

impl AppState {
    /// Wires services over the given repositories.
    pub fn new(repositories: Repositories, auth_service: Arc<AuthService>, bcrypt_cost: u32) -> Self {
        let authorization_service =
            Arc::new(AuthorizationService::new(repositories.restaurants.clone()));

        Self {
            restaurant_service: Arc::new(RestaurantService::new(
                repositories.restaurants.clone(),
                authorization_service.clone(),
            )),
            dish_service: Arc::new(DishService::new(
                repositories.dishes,
                repositories.restaurants,
                authorization_service.clone(),
            )),
            account_service: Arc::new(AccountService::new(
                repositories.users,
                auth_service.clone(),
                bcrypt_cost,
            )),
            auth_service,
            authorization_service,
        }
    }
}
