#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::HeaderValue;
use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::json;
use sqlx::PgPool;
use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use restaurant_api::application::services::{AuthService, JwtSettings};
use restaurant_api::domain::entities::{
    Address, Dish, NewAddress, NewDish, NewRestaurant, NewUser, Restaurant, Role,
    UpdateRestaurant, User,
};
use restaurant_api::domain::repositories::{
    DishRepository, RestaurantFilter, RestaurantRepository, SortColumn, SortDirection,
    UserRepository,
};
use restaurant_api::error::AppError;
use restaurant_api::routes::{RouterOptions, build_router};
use restaurant_api::state::{AppState, Repositories};
use restaurant_api::utils::password::{MIN_COST, hash_password};

pub const TEST_JWT_KEY: &str = "integration-test-signing-key-32-bytes!";
pub const TEST_ISSUER: &str = "http://restaurant-api.test";

#[derive(Default)]
struct Tables {
    restaurants: Vec<Restaurant>,
    dishes: Vec<Dish>,
    users: Vec<User>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn with_dishes(&self, restaurant: &Restaurant) -> Restaurant {
        let mut restaurant = restaurant.clone();
        restaurant.dishes = self
            .dishes
            .iter()
            .filter(|d| d.restaurant_id == restaurant.id)
            .cloned()
            .collect();
        restaurant
    }
}

/// Repositories backed by vectors, for handler tests that need no database.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

fn matches_search(restaurant: &Restaurant, phrase: &Option<String>) -> bool {
    let Some(phrase) = phrase else {
        return true;
    };
    let phrase = phrase.to_lowercase();

    restaurant.name.to_lowercase().contains(&phrase)
        || restaurant
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&phrase))
}

fn sort_key(restaurant: &Restaurant, column: SortColumn) -> Option<String> {
    match column {
        SortColumn::Name => Some(restaurant.name.clone()),
        SortColumn::Description => restaurant.description.clone(),
        SortColumn::Category => restaurant.category.clone(),
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryStore {
    async fn create(&self, new_restaurant: NewRestaurant) -> Result<i64, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        let address_id = tables.next_id();

        tables.restaurants.push(Restaurant {
            id,
            name: new_restaurant.name,
            description: new_restaurant.description,
            category: new_restaurant.category,
            has_delivery: new_restaurant.has_delivery,
            contact_email: new_restaurant.contact_email,
            contact_number: new_restaurant.contact_number,
            created_by_id: new_restaurant.created_by_id,
            address: Some(Address {
                id: address_id,
                city: new_restaurant.address.city,
                street: new_restaurant.address.street,
                postal_code: new_restaurant.address.postal_code,
            }),
            dishes: Vec::new(),
        });

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .restaurants
            .iter()
            .find(|r| r.id == id)
            .map(|r| tables.with_dishes(r)))
    }

    async fn search(&self, filter: RestaurantFilter) -> Result<Vec<Restaurant>, AppError> {
        let tables = self.tables.lock().unwrap();
        let mut found: Vec<Restaurant> = tables
            .restaurants
            .iter()
            .filter(|r| matches_search(r, &filter.search_phrase))
            .map(|r| tables.with_dishes(r))
            .collect();

        found.sort_by_key(|r| r.id);
        if let Some(column) = filter.sort_by {
            // NULLS LAST in both directions, as in Postgres.
            found.sort_by(|a, b| match (sort_key(a, column), sort_key(b, column)) {
                (Some(a), Some(b)) => match filter.sort_direction {
                    SortDirection::Asc => a.cmp(&b),
                    SortDirection::Desc => b.cmp(&a),
                },
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }

        Ok(found
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn count(&self, filter: RestaurantFilter) -> Result<i64, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .restaurants
            .iter()
            .filter(|r| matches_search(r, &filter.search_phrase))
            .count() as i64)
    }

    async fn update(&self, id: i64, update: UpdateRestaurant) -> Result<(), AppError> {
        let mut tables = self.tables.lock().unwrap();
        let restaurant = tables
            .restaurants
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::not_found("Restaurant not found", json!({ "id": id })))?;

        restaurant.name = update.name;
        restaurant.description = update.description;
        restaurant.has_delivery = update.has_delivery;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.restaurants.len();
        tables.restaurants.retain(|r| r.id != id);
        if tables.restaurants.len() == before {
            return Err(AppError::not_found("Restaurant not found", json!({ "id": id })));
        }
        tables.dishes.retain(|d| d.restaurant_id != id);
        Ok(())
    }

    async fn count_by_creator(&self, user_id: i64) -> Result<i64, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .restaurants
            .iter()
            .filter(|r| r.created_by_id == Some(user_id))
            .count() as i64)
    }
}

#[async_trait]
impl DishRepository for InMemoryStore {
    async fn create(&self, new_dish: NewDish) -> Result<i64, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();

        tables.dishes.push(Dish {
            id,
            name: new_dish.name,
            description: new_dish.description,
            price: new_dish.price,
            restaurant_id: new_dish.restaurant_id,
        });

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Dish>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.dishes.iter().find(|d| d.id == id).cloned())
    }

    async fn list_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Dish>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .dishes
            .iter()
            .filter(|d| d.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.dishes.len();
        tables.dishes.retain(|d| d.id != id);
        if tables.dishes.len() == before {
            return Err(AppError::not_found("Dish not found", json!({ "id": id })));
        }
        Ok(())
    }

    async fn delete_by_restaurant(&self, restaurant_id: i64) -> Result<u64, AppError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.dishes.len();
        tables.dishes.retain(|d| d.restaurant_id != restaurant_id);
        Ok((before - tables.dishes.len()) as u64)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<i64, AppError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "users_email_key" }),
            ));
        }
        let id = tables.next_id();

        tables.users.push(User {
            id,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            date_of_birth: new_user.date_of_birth,
            nationality: new_user.nationality,
            password_hash: new_user.password_hash,
            role: new_user.role,
        });

        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().any(|u| u.email == email))
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.clone())
    }

    async fn set_role(&self, email: &str, role: Role) -> Result<(), AppError> {
        let mut tables = self.tables.lock().unwrap();
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.email == email)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "email": email })))?;
        user.role = role;
        Ok(())
    }
}

/// Describes a user to insert before a test runs.
pub struct UserFixture {
    pub email: &'static str,
    pub role: Role,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<&'static str>,
}

impl UserFixture {
    pub fn new(email: &'static str, role: Role) -> Self {
        Self {
            email,
            role,
            date_of_birth: None,
            nationality: None,
        }
    }

    pub fn born(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date_of_birth = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn nationality(mut self, nationality: &'static str) -> Self {
        self.nationality = Some(nationality);
        self
    }
}

/// A router over in-memory repositories plus handles to seed and inspect it.
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<InMemoryStore>,
    pub auth_service: Arc<AuthService>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let auth_service = Arc::new(AuthService::new(jwt_settings()));

        let repositories = Repositories {
            restaurants: store.clone(),
            dishes: store.clone(),
            users: store.clone(),
        };
        let state = AppState::new(repositories, auth_service.clone(), MIN_COST);
        let app = build_router(state, RouterOptions::default());

        Self {
            server: TestServer::new(app).unwrap(),
            store,
            auth_service,
        }
    }

    /// Inserts a user with password `password1` and returns it.
    pub async fn create_user(&self, fixture: UserFixture) -> User {
        let password_hash = hash_password("password1".to_string(), MIN_COST)
            .await
            .unwrap();

        UserRepository::create(
            self.store.as_ref(),
            NewUser {
                email: fixture.email.to_string(),
                first_name: Some("Test".to_string()),
                last_name: Some("User".to_string()),
                date_of_birth: fixture.date_of_birth,
                nationality: fixture.nationality.map(str::to_string),
                password_hash,
                role: fixture.role,
            },
        )
        .await
        .unwrap();

        self.store.find_by_email(fixture.email).await.unwrap().unwrap()
    }

    /// Inserts a user and returns a Bearer token for it.
    pub async fn token_for(&self, fixture: UserFixture) -> (User, String) {
        let user = self.create_user(fixture).await;
        let token = self.auth_service.issue_token(&user).unwrap();
        (user, token)
    }

    /// Inserts a restaurant owned by `owner` and returns its id.
    pub async fn create_restaurant(&self, name: &str, owner: Option<i64>) -> i64 {
        RestaurantRepository::create(self.store.as_ref(), new_restaurant(name, owner))
            .await
            .unwrap()
    }

    pub async fn create_dish(&self, restaurant_id: i64, name: &str) -> i64 {
        DishRepository::create(
            self.store.as_ref(),
            NewDish {
                name: name.to_string(),
                description: None,
                price: 10.5,
                restaurant_id,
            },
        )
        .await
        .unwrap()
    }

    pub async fn restaurant(&self, id: i64) -> Option<Restaurant> {
        RestaurantRepository::find_by_id(self.store.as_ref(), id)
            .await
            .unwrap()
    }

    pub async fn dishes_of(&self, restaurant_id: i64) -> Vec<Dish> {
        self.store.list_by_restaurant(restaurant_id).await.unwrap()
    }
}

pub fn jwt_settings() -> JwtSettings {
    JwtSettings {
        key: TEST_JWT_KEY.to_string(),
        issuer: TEST_ISSUER.to_string(),
        expire_days: 15,
    }
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

pub async fn create_test_user(pool: &PgPool, email: &str, role: Role) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (email, first_name, last_name, password_hash, role_id)
         VALUES ($1, 'Test', 'User', 'not-a-hash', $2) RETURNING id",
    )
    .bind(email)
    .bind(role.id())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn new_restaurant(name: &str, created_by_id: Option<i64>) -> NewRestaurant {
    NewRestaurant {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        category: Some("Fast Food".to_string()),
        has_delivery: true,
        contact_email: Some("contact@test.com".to_string()),
        contact_number: None,
        created_by_id,
        address: NewAddress {
            city: "Kraków".to_string(),
            street: "Długa 5".to_string(),
            postal_code: Some("30-001".to_string()),
        },
    }
}
