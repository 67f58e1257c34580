//! User and profile repositories

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Health profile record from database
///
/// All health fields are nullable: the row is created lazily on the
/// first profile update after registration.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub user_id: Uuid,
    pub weight_kg: Option<Decimal>,
    pub height_cm: Option<Decimal>,
    pub age_years: Option<i32>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub diet_type: Option<String>,
    pub preferences: Option<String>,
    pub goal: Option<String>,
    pub goal_weight_kg: Option<Decimal>,
    pub onboarding_completed: bool,
    pub updated_at: DateTime<Utc>,
}

/// Input for updating a profile; absent fields keep their stored values
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<i32>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub diet_type: Option<String>,
    pub preferences: Option<String>,
    pub goal: Option<String>,
    pub goal_weight_kg: Option<f64>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        display_name: Option<&str>,
    ) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, password_hash, display_name)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, display_name, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(display_name)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, display_name, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, display_name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check if email exists
    pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// Update the display name
    pub async fn update_display_name(pool: &PgPool, id: Uuid, display_name: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users SET display_name = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(display_name)
        .execute(pool)
        .await?;

        Ok(())
    }
}

/// Profile repository for database operations
pub struct ProfileRepository;

impl ProfileRepository {
    /// Get a user's profile, if one exists
    pub async fn get(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileRecord>> {
        let profile = sqlx::query_as::<_, ProfileRecord>(
            r#"
            SELECT user_id, weight_kg, height_cm, age_years, gender, activity_level,
                   diet_type, preferences, goal, goal_weight_kg, onboarding_completed,
                   updated_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(profile)
    }

    /// Create or partially update the profile row
    pub async fn upsert(
        pool: &PgPool,
        user_id: Uuid,
        updates: UpdateProfile,
    ) -> Result<ProfileRecord> {
        let profile = sqlx::query_as::<_, ProfileRecord>(
            r#"
            INSERT INTO profiles (user_id, weight_kg, height_cm, age_years, gender,
                                  activity_level, diet_type, preferences, goal, goal_weight_kg)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (user_id) DO UPDATE SET
                weight_kg = COALESCE(EXCLUDED.weight_kg, profiles.weight_kg),
                height_cm = COALESCE(EXCLUDED.height_cm, profiles.height_cm),
                age_years = COALESCE(EXCLUDED.age_years, profiles.age_years),
                gender = COALESCE(EXCLUDED.gender, profiles.gender),
                activity_level = COALESCE(EXCLUDED.activity_level, profiles.activity_level),
                diet_type = COALESCE(EXCLUDED.diet_type, profiles.diet_type),
                preferences = COALESCE(EXCLUDED.preferences, profiles.preferences),
                goal = COALESCE(EXCLUDED.goal, profiles.goal),
                goal_weight_kg = COALESCE(EXCLUDED.goal_weight_kg, profiles.goal_weight_kg),
                updated_at = NOW()
            RETURNING user_id, weight_kg, height_cm, age_years, gender, activity_level,
                      diet_type, preferences, goal, goal_weight_kg, onboarding_completed,
                      updated_at
            "#,
        )
        .bind(user_id)
        .bind(updates.weight_kg)
        .bind(updates.height_cm)
        .bind(updates.age_years)
        .bind(updates.gender)
        .bind(updates.activity_level)
        .bind(updates.diet_type)
        .bind(updates.preferences)
        .bind(updates.goal)
        .bind(updates.goal_weight_kg)
        .fetch_one(pool)
        .await?;

        Ok(profile)
    }

    /// Set the onboarding-completed flag
    pub async fn set_onboarding_completed(pool: &PgPool, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE profiles SET onboarding_completed = TRUE, updated_at = NOW()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Sync the current weight after a new weight entry becomes the latest
    pub async fn update_current_weight(
        pool: &PgPool,
        user_id: Uuid,
        weight_kg: f64,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE profiles SET weight_kg = $2, updated_at = NOW()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(weight_kg)
        .execute(pool)
        .await?;

        Ok(())
    }
}
