//! Water intake repository
//!
//! A `water_days` row per user per calendar day (enforced by a unique
//! constraint) holding the personalized goal and the running total, with
//! individual pours in `water_records`.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Per-day water intake record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WaterDayRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub goal_ml: i32,
    pub total_ml: i32,
    pub created_at: DateTime<Utc>,
}

/// Individual pour within a day
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WaterRecordRow {
    pub id: Uuid,
    pub water_day_id: Uuid,
    pub at: DateTime<Utc>,
    pub amount_ml: i32,
}

/// Water repository for database operations
pub struct WaterRepository;

impl WaterRepository {
    /// Get the day row, creating it with the given goal if absent
    ///
    /// The unique constraint on (user_id, date) makes this race-safe:
    /// a concurrent insert simply loses and the existing row is returned.
    pub async fn get_or_create_day(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        goal_ml: i32,
    ) -> Result<WaterDayRecord> {
        sqlx::query(
            r#"
            INSERT INTO water_days (user_id, date, goal_ml, total_ml)
            VALUES ($1, $2, $3, 0)
            ON CONFLICT (user_id, date) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(goal_ml)
        .execute(pool)
        .await?;

        let day = sqlx::query_as::<_, WaterDayRecord>(
            r#"
            SELECT id, user_id, date, goal_ml, total_ml, created_at
            FROM water_days
            WHERE user_id = $1 AND date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_one(pool)
        .await?;

        Ok(day)
    }

    /// Get the day row, if it exists
    pub async fn get_day(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<WaterDayRecord>> {
        let day = sqlx::query_as::<_, WaterDayRecord>(
            r#"
            SELECT id, user_id, date, goal_ml, total_ml, created_at
            FROM water_days
            WHERE user_id = $1 AND date = $2
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(day)
    }

    /// Append a pour to a day and bump its running total
    pub async fn add_record(
        pool: &PgPool,
        water_day_id: Uuid,
        amount_ml: i32,
    ) -> Result<WaterRecordRow> {
        let mut tx = pool.begin().await?;

        let record = sqlx::query_as::<_, WaterRecordRow>(
            r#"
            INSERT INTO water_records (water_day_id, amount_ml)
            VALUES ($1, $2)
            RETURNING id, water_day_id, at, amount_ml
            "#,
        )
        .bind(water_day_id)
        .bind(amount_ml)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE water_days SET total_ml = total_ml + $2
            WHERE id = $1
            "#,
        )
        .bind(water_day_id)
        .bind(amount_ml)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(record)
    }

    /// List a day's pours, earliest first
    pub async fn records_for_day(pool: &PgPool, water_day_id: Uuid) -> Result<Vec<WaterRecordRow>> {
        let records = sqlx::query_as::<_, WaterRecordRow>(
            r#"
            SELECT id, water_day_id, at, amount_ml
            FROM water_records
            WHERE water_day_id = $1
            ORDER BY at ASC
            "#,
        )
        .bind(water_day_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// List all day rows for a user, newest first
    pub async fn list_days(pool: &PgPool, user_id: Uuid) -> Result<Vec<WaterDayRecord>> {
        let days = sqlx::query_as::<_, WaterDayRecord>(
            r#"
            SELECT id, user_id, date, goal_ml, total_ml, created_at
            FROM water_days
            WHERE user_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(days)
    }

    /// List day rows within a date range, oldest first
    pub async fn list_days_range(
        pool: &PgPool,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WaterDayRecord>> {
        let days = sqlx::query_as::<_, WaterDayRecord>(
            r#"
            SELECT id, user_id, date, goal_ml, total_ml, created_at
            FROM water_days
            WHERE user_id = $1 AND date >= $2 AND date <= $3
            ORDER BY date ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(days)
    }
}
