//! Weight entry repository

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Weight entry record from database (one per user per calendar day)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WeightEntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight_kg: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Weight repository for database operations
pub struct WeightRepository;

impl WeightRepository {
    /// Create a new weight entry
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        weight_kg: f64,
    ) -> Result<WeightEntryRecord> {
        let record = sqlx::query_as::<_, WeightEntryRecord>(
            r#"
            INSERT INTO weight_entries (user_id, date, weight_kg)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, date, weight_kg, created_at
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(weight_kg)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Check whether the day already has an entry
    pub async fn exists_for_date(pool: &PgPool, user_id: Uuid, date: NaiveDate) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM weight_entries WHERE user_id = $1 AND date = $2)
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// Get all weight entries for a user, oldest first (chart feed)
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<WeightEntryRecord>> {
        let records = sqlx::query_as::<_, WeightEntryRecord>(
            r#"
            SELECT id, user_id, date, weight_kg, created_at
            FROM weight_entries
            WHERE user_id = $1
            ORDER BY date ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get weight entries within a date range, oldest first
    pub async fn list_range(
        pool: &PgPool,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WeightEntryRecord>> {
        let records = sqlx::query_as::<_, WeightEntryRecord>(
            r#"
            SELECT id, user_id, date, weight_kg, created_at
            FROM weight_entries
            WHERE user_id = $1 AND date >= $2 AND date <= $3
            ORDER BY date ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get the most recent weight entry for a user
    pub async fn get_latest(pool: &PgPool, user_id: Uuid) -> Result<Option<WeightEntryRecord>> {
        let record = sqlx::query_as::<_, WeightEntryRecord>(
            r#"
            SELECT id, user_id, date, weight_kg, created_at
            FROM weight_entries
            WHERE user_id = $1
            ORDER BY date DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Get the entry for a specific day
    pub async fn get_for_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<WeightEntryRecord>> {
        let record = sqlx::query_as::<_, WeightEntryRecord>(
            r#"
            SELECT id, user_id, date, weight_kg, created_at
            FROM weight_entries
            WHERE user_id = $1 AND date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a weight entry
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM weight_entries
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
