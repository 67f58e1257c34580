//! Food catalog and meal repositories

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Food catalog entry (macros per 100 g)
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodRecord {
    pub id: Uuid,
    pub name: String,
    pub calories: Decimal,
    pub protein_g: Decimal,
    pub fat_g: Decimal,
    pub carbs_g: Decimal,
    pub grams_per_unit: Option<Decimal>,
    pub unit: String,
}

/// Logged meal record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub meal_type: String,
    pub total_calories: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Food line of a logged meal, joined with the food name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealItemRecord {
    pub id: Uuid,
    pub meal_id: Uuid,
    pub food_id: Uuid,
    pub food_name: String,
    pub grams: Decimal,
    pub calories: Decimal,
}

/// Input for one meal line
#[derive(Debug, Clone)]
pub struct CreateMealItem {
    pub food_id: Uuid,
    pub grams: f64,
    pub calories: f64,
}

/// Input for creating a meal with its lines
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub meal_type: String,
    pub total_calories: f64,
    pub items: Vec<CreateMealItem>,
}

/// Food catalog repository
pub struct FoodRepository;

impl FoodRepository {
    /// Search the catalog by name fragment
    pub async fn search(pool: &PgPool, query: &str, limit: i64) -> Result<Vec<FoodRecord>> {
        let foods = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, name, calories, protein_g, fat_g, carbs_g, grams_per_unit, unit
            FROM foods
            WHERE name ILIKE $1
            ORDER BY name ASC
            LIMIT $2
            "#,
        )
        .bind(format!("%{}%", query))
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(foods)
    }

    /// List the catalog alphabetically
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<FoodRecord>> {
        let foods = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, name, calories, protein_g, fat_g, carbs_g, grams_per_unit, unit
            FROM foods
            ORDER BY name ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(foods)
    }

    /// Fetch a set of foods by ID
    pub async fn get_by_ids(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<FoodRecord>> {
        let foods = sqlx::query_as::<_, FoodRecord>(
            r#"
            SELECT id, name, calories, protein_g, fat_g, carbs_g, grams_per_unit, unit
            FROM foods
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(pool)
        .await?;

        Ok(foods)
    }
}

/// Meal repository for database operations
pub struct MealRepository;

impl MealRepository {
    /// Create a meal with its food lines in one transaction
    pub async fn create(pool: &PgPool, input: CreateMeal) -> Result<MealRecord> {
        let mut tx = pool.begin().await?;

        let meal = sqlx::query_as::<_, MealRecord>(
            r#"
            INSERT INTO meals (user_id, date, time, meal_type, total_calories)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, date, time, meal_type, total_calories, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.date)
        .bind(&input.time)
        .bind(&input.meal_type)
        .bind(input.total_calories)
        .fetch_one(&mut *tx)
        .await?;

        for item in &input.items {
            sqlx::query(
                r#"
                INSERT INTO meal_items (meal_id, food_id, grams, calories)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(meal.id)
            .bind(item.food_id)
            .bind(item.grams)
            .bind(item.calories)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(meal)
    }

    /// List meals of a single day, newest first
    pub async fn list_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<MealRecord>> {
        let meals = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, user_id, date, time, meal_type, total_calories, created_at
            FROM meals
            WHERE user_id = $1 AND date = $2
            ORDER BY time DESC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        Ok(meals)
    }

    /// List meals within a date range, newest first
    pub async fn list_range(
        pool: &PgPool,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MealRecord>> {
        let meals = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, user_id, date, time, meal_type, total_calories, created_at
            FROM meals
            WHERE user_id = $1 AND date >= $2 AND date <= $3
            ORDER BY date DESC, time DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(meals)
    }

    /// List the full meal history, newest first
    pub async fn list_all(pool: &PgPool, user_id: Uuid) -> Result<Vec<MealRecord>> {
        let meals = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, user_id, date, time, meal_type, total_calories, created_at
            FROM meals
            WHERE user_id = $1
            ORDER BY date DESC, time DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(meals)
    }

    /// Fetch the food lines for a set of meals, joined with food names
    pub async fn items_for_meals(pool: &PgPool, meal_ids: &[Uuid]) -> Result<Vec<MealItemRecord>> {
        let items = sqlx::query_as::<_, MealItemRecord>(
            r#"
            SELECT mi.id, mi.meal_id, mi.food_id, f.name AS food_name, mi.grams, mi.calories
            FROM meal_items mi
            JOIN foods f ON f.id = mi.food_id
            WHERE mi.meal_id = ANY($1)
            ORDER BY mi.id
            "#,
        )
        .bind(meal_ids)
        .fetch_all(pool)
        .await?;

        Ok(items)
    }

    /// Delete a meal (its items cascade)
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM meals
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
