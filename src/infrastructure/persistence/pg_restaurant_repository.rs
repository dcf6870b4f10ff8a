//! PostgreSQL implementation of restaurant repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Address, Dish, NewRestaurant, Restaurant, UpdateRestaurant};
use crate::domain::repositories::{RestaurantFilter, RestaurantRepository};
use crate::error::AppError;
use crate::infrastructure::persistence::pg_dish_repository::DishRow;
use serde_json::json;

const SELECT_RESTAURANT: &str = r#"
    SELECT r.id, r.name, r.description, r.category, r.has_delivery,
           r.contact_email, r.contact_number, r.created_by_id,
           a.id AS address_id, a.city, a.street, a.postal_code
    FROM restaurants r
    LEFT JOIN addresses a ON a.restaurant_id = r.id
"#;

/// `$1` is the optional search phrase.
const SEARCH_CLAUSE: &str = r#"
    ($1::text IS NULL
      OR strpos(lower(r.name), lower($1)) > 0
      OR strpos(lower(COALESCE(r.description, '')), lower($1)) > 0)
"#;

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    description: Option<String>,
    category: Option<String>,
    has_delivery: bool,
    contact_email: Option<String>,
    contact_number: Option<String>,
    created_by_id: Option<i64>,
    address_id: Option<i64>,
    city: Option<String>,
    street: Option<String>,
    postal_code: Option<String>,
}

impl RestaurantRow {
    fn into_restaurant(self, dishes: Vec<Dish>) -> Restaurant {
        let address = match (self.address_id, self.city, self.street) {
            (Some(id), Some(city), Some(street)) => Some(Address {
                id,
                city,
                street,
                postal_code: self.postal_code,
            }),
            _ => None,
        };

        Restaurant {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            has_delivery: self.has_delivery,
            contact_email: self.contact_email,
            contact_number: self.contact_number,
            created_by_id: self.created_by_id,
            address,
            dishes,
        }
    }
}

/// PostgreSQL repository for restaurants.
///
/// Restaurant rows are joined with their address; dishes are loaded with a
/// second query for the whole page at once.
pub struct PgRestaurantRepository {
    pool: Arc<PgPool>,
}

impl PgRestaurantRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load_dishes(&self, restaurant_ids: &[i64]) -> Result<HashMap<i64, Vec<Dish>>, AppError> {
        if restaurant_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, DishRow>(
            r#"
            SELECT id, name, description, price, restaurant_id
            FROM dishes
            WHERE restaurant_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(restaurant_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut by_restaurant: HashMap<i64, Vec<Dish>> = HashMap::new();
        for row in rows {
            let dish = Dish::from(row);
            by_restaurant.entry(dish.restaurant_id).or_default().push(dish);
        }

        Ok(by_restaurant)
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn create(&self, new_restaurant: NewRestaurant) -> Result<i64, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO restaurants
                (name, description, category, has_delivery, contact_email, contact_number, created_by_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&new_restaurant.name)
        .bind(&new_restaurant.description)
        .bind(&new_restaurant.category)
        .bind(new_restaurant.has_delivery)
        .bind(&new_restaurant.contact_email)
        .bind(&new_restaurant.contact_number)
        .bind(new_restaurant.created_by_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO addresses (restaurant_id, city, street, postal_code)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id)
        .bind(&new_restaurant.address.city)
        .bind(&new_restaurant.address.street)
        .bind(&new_restaurant.address.postal_code)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        let sql = format!("{SELECT_RESTAURANT} WHERE r.id = $1");

        let row = sqlx::query_as::<_, RestaurantRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut dishes = self.load_dishes(&[row.id]).await?;
        let restaurant_dishes = dishes.remove(&row.id).unwrap_or_default();

        Ok(Some(row.into_restaurant(restaurant_dishes)))
    }

    async fn search(&self, filter: RestaurantFilter) -> Result<Vec<Restaurant>, AppError> {
        // Column and direction come from closed enums, never from user text.
        let order_by = match filter.sort_by {
            Some(column) => format!(
                "{} {} NULLS LAST, r.id ASC",
                column.as_sql(),
                filter.sort_direction.as_sql()
            ),
            None => "r.id ASC".to_string(),
        };

        let sql = format!(
            "{SELECT_RESTAURANT} WHERE {SEARCH_CLAUSE} ORDER BY {order_by} LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, RestaurantRow>(&sql)
            .bind(&filter.search_phrase)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut dishes = self.load_dishes(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let restaurant_dishes = dishes.remove(&row.id).unwrap_or_default();
                row.into_restaurant(restaurant_dishes)
            })
            .collect())
    }

    async fn count(&self, filter: RestaurantFilter) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM restaurants r WHERE {SEARCH_CLAUSE}");

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(&filter.search_phrase)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, update: UpdateRestaurant) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE restaurants SET
                name         = $2,
                description  = $3,
                has_delivery = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.has_delivery)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Restaurant not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Restaurant not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn count_by_creator(&self, user_id: i64) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM restaurants WHERE created_by_id = $1")
                .bind(user_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }
}
