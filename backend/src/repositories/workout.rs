//! Workout repository

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub duration_min: i32,
    pub activity: String,
    pub intensity: String,
    pub calories: i32,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a workout
#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub duration_min: i32,
    pub activity: String,
    pub intensity: String,
    pub calories: i32,
}

/// Workout repository for database operations
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Create a new workout entry
    pub async fn create(pool: &PgPool, input: CreateWorkout) -> Result<WorkoutRecord> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, date, duration_min, activity, intensity, calories)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, date, duration_min, activity, intensity, calories, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.date)
        .bind(input.duration_min)
        .bind(&input.activity)
        .bind(&input.intensity)
        .bind(input.calories)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List the full workout history, newest first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, date, duration_min, activity, intensity, calories, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// List workouts of a single day, newest first
    pub async fn list_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, date, duration_min, activity, intensity, calories, created_at
            FROM workouts
            WHERE user_id = $1 AND date = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// List workouts within a date range, oldest first
    pub async fn list_range(
        pool: &PgPool,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, date, duration_min, activity, intensity, calories, created_at
            FROM workouts
            WHERE user_id = $1 AND date >= $2 AND date <= $3
            ORDER BY date ASC, created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Delete a workout
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM workouts
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
