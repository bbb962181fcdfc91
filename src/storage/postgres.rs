//! Postgres-backed implementation of [`CafeStore`].
//!
//! Owns the connection pool and the `cafes` table. The `name` uniqueness
//! invariant lives in the table constraint, not in application pre-checks,
//! so concurrent inserts resolve by the database's own semantics.

use crate::domain::cafe::{Cafe, NewCafe};
use crate::storage::{CafeStore, StoreError};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub struct PgCafeStore {
    pool: PgPool,
}

impl PgCafeStore {
    /// Connects to the database and makes sure the `cafes` table exists.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS cafes (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                map_url TEXT NOT NULL,
                img_url TEXT NOT NULL,
                location TEXT NOT NULL,
                seats TEXT NOT NULL,
                has_toilet BOOLEAN NOT NULL,
                has_wifi BOOLEAN NOT NULL,
                has_sockets BOOLEAN NOT NULL,
                can_take_calls BOOLEAN NOT NULL,
                coffee_price TEXT
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CafeStore for PgCafeStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Cafe>, StoreError> {
        let cafes = sqlx::query_as::<_, Cafe>("SELECT * FROM cafes")
            .fetch_all(&self.pool)
            .await?;
        Ok(cafes)
    }

    async fn find_by_location(&self, location: &str) -> Result<Option<Cafe>, StoreError> {
        // Ordered by id so repeated calls agree on which match is "first".
        let cafe = sqlx::query_as::<_, Cafe>(
            "SELECT * FROM cafes WHERE location = $1 ORDER BY id LIMIT 1",
        )
        .bind(location)
        .fetch_optional(&self.pool)
        .await?;
        Ok(cafe)
    }

    async fn insert(&self, cafe: NewCafe) -> Result<Cafe, StoreError> {
        let inserted = sqlx::query_as::<_, Cafe>(
            "INSERT INTO cafes
                (name, map_url, img_url, location, seats,
                 has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *",
        )
        .bind(&cafe.name)
        .bind(&cafe.map_url)
        .bind(&cafe.img_url)
        .bind(&cafe.location)
        .bind(&cafe.seats)
        .bind(cafe.has_toilet)
        .bind(cafe.has_wifi)
        .bind(cafe.has_sockets)
        .bind(cafe.can_take_calls)
        .bind(&cafe.coffee_price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::NameTaken(cafe.name.clone())
            }
            _ => StoreError::Database(e),
        })?;
        Ok(inserted)
    }

    async fn update_price(&self, id: i32, new_price: &str) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE cafes SET coffee_price = $2 WHERE id = $1")
            .bind(id)
            .bind(new_price)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM cafes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
