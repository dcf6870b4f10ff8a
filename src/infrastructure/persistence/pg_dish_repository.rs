//! PostgreSQL implementation of dish repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Dish, NewDish};
use crate::domain::repositories::DishRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(sqlx::FromRow)]
pub(crate) struct DishRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    restaurant_id: i64,
}

impl From<DishRow> for Dish {
    fn from(row: DishRow) -> Self {
        Dish {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            restaurant_id: row.restaurant_id,
        }
    }
}

/// PostgreSQL repository for dishes.
pub struct PgDishRepository {
    pool: Arc<PgPool>,
}

impl PgDishRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DishRepository for PgDishRepository {
    async fn create(&self, new_dish: NewDish) -> Result<i64, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO dishes (name, description, price, restaurant_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_dish.name)
        .bind(&new_dish.description)
        .bind(new_dish.price)
        .bind(new_dish.restaurant_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Dish>, AppError> {
        let row = sqlx::query_as::<_, DishRow>(
            r#"
            SELECT id, name, description, price, restaurant_id
            FROM dishes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Dish::from))
    }

    async fn list_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Dish>, AppError> {
        let rows = sqlx::query_as::<_, DishRow>(
            r#"
            SELECT id, name, description, price, restaurant_id
            FROM dishes
            WHERE restaurant_id = $1
            ORDER BY id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Dish::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM dishes WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Dish not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn delete_by_restaurant(&self, restaurant_id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM dishes WHERE restaurant_id = $1")
            .bind(restaurant_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
