//! Meal logging service
//!
//! Meals reference foods from the seeded catalog; item and total
//! calories are computed here from the catalog macros rather than
//! trusted from the client.

use crate::error::ApiError;
use crate::repositories::{
    CreateMeal, CreateMealItem, FoodRecord, FoodRepository, MealItemRecord, MealRecord,
    MealRepository,
};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;
use vitalog_shared::models::MealType;
use vitalog_shared::types::{
    CreateMealRequest, DayMealsResponse, FoodResponse, MealItemResponse, MealResponse,
};
use vitalog_shared::validation::validate_grams;

/// Default catalog page size
const DEFAULT_FOOD_LIMIT: i64 = 50;

/// Meal service for business logic
pub struct MealService;

impl MealService {
    /// Search the food catalog; an empty query lists it alphabetically
    pub async fn search_foods(
        pool: &PgPool,
        query: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<FoodResponse>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_FOOD_LIMIT).clamp(1, 200);

        let foods = match query {
            Some(q) if !q.trim().is_empty() => FoodRepository::search(pool, q.trim(), limit)
                .await
                .map_err(ApiError::Internal)?,
            _ => FoodRepository::list(pool, limit)
                .await
                .map_err(ApiError::Internal)?,
        };

        Ok(foods.into_iter().map(Self::food_response).collect())
    }

    /// Calories of `grams` of a food whose macros are per 100 g
    pub fn item_calories(calories_per_100g: f64, grams: f64) -> f64 {
        calories_per_100g * grams / 100.0
    }

    /// Log a meal, computing calories from the catalog
    pub async fn create_meal(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateMealRequest,
    ) -> Result<MealResponse, ApiError> {
        if req.items.is_empty() {
            return Err(ApiError::Validation(
                "A meal needs at least one food item".to_string(),
            ));
        }
        if NaiveTime::parse_from_str(&req.time, "%H:%M").is_err() {
            return Err(ApiError::Validation(
                "Time must be in HH:MM format".to_string(),
            ));
        }
        for item in &req.items {
            validate_grams(item.grams).map_err(ApiError::Validation)?;
        }

        // Resolve the referenced foods
        let mut food_ids = Vec::with_capacity(req.items.len());
        for item in &req.items {
            let id = Uuid::parse_str(&item.food_id)
                .map_err(|_| ApiError::Validation(format!("Invalid food id: {}", item.food_id)))?;
            food_ids.push(id);
        }

        let foods = FoodRepository::get_by_ids(pool, &food_ids)
            .await
            .map_err(ApiError::Internal)?;
        let foods_by_id: HashMap<Uuid, &FoodRecord> = foods.iter().map(|f| (f.id, f)).collect();

        let mut items = Vec::with_capacity(req.items.len());
        let mut total_calories = 0.0;
        for (item, food_id) in req.items.iter().zip(&food_ids) {
            let food = foods_by_id
                .get(food_id)
                .ok_or_else(|| ApiError::NotFound(format!("Food not found: {}", food_id)))?;
            let calories =
                Self::item_calories(food.calories.to_f64().unwrap_or(0.0), item.grams);
            total_calories += calories;
            items.push(CreateMealItem {
                food_id: *food_id,
                grams: item.grams,
                calories,
            });
        }

        let meal = MealRepository::create(
            pool,
            CreateMeal {
                user_id,
                date: req.date,
                time: req.time,
                meal_type: req.meal_type.to_string(),
                total_calories,
                items,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        let items = MealRepository::items_for_meals(pool, &[meal.id])
            .await
            .map_err(ApiError::Internal)?;

        Ok(Self::meal_response(meal, &items))
    }

    /// List a day's meals with their items, newest first
    pub async fn list_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<MealResponse>, ApiError> {
        let meals = MealRepository::list_by_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;

        Self::with_items(pool, meals).await
    }

    /// Group the meal history by calendar day with per-day totals,
    /// newest day first
    pub async fn history_by_day(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<DayMealsResponse>, ApiError> {
        let meals = MealRepository::list_all(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let meals = Self::with_items(pool, meals).await?;

        // Input is newest-first, so days come out newest-first too
        let mut days: Vec<DayMealsResponse> = Vec::new();
        for meal in meals {
            match days.last_mut() {
                Some(day) if day.date == meal.date => {
                    day.total_calories += meal.total_calories;
                    day.meals.push(meal);
                }
                _ => days.push(DayMealsResponse {
                    date: meal.date,
                    total_calories: meal.total_calories,
                    meals: vec![meal],
                }),
            }
        }
        Ok(days)
    }

    /// Delete a meal and its items
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = MealRepository::delete(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Meal not found".to_string()));
        }
        Ok(())
    }

    async fn with_items(
        pool: &PgPool,
        meals: Vec<MealRecord>,
    ) -> Result<Vec<MealResponse>, ApiError> {
        let ids: Vec<Uuid> = meals.iter().map(|m| m.id).collect();
        let items = MealRepository::items_for_meals(pool, &ids)
            .await
            .map_err(ApiError::Internal)?;

        Ok(meals
            .into_iter()
            .map(|meal| Self::meal_response(meal, &items))
            .collect())
    }

    fn meal_response(meal: MealRecord, all_items: &[MealItemRecord]) -> MealResponse {
        let items = all_items
            .iter()
            .filter(|i| i.meal_id == meal.id)
            .map(|i| MealItemResponse {
                id: i.id.to_string(),
                food_id: i.food_id.to_string(),
                food_name: i.food_name.clone(),
                grams: i.grams.to_f64().unwrap_or(0.0),
                calories: i.calories.to_f64().unwrap_or(0.0),
            })
            .collect();

        MealResponse {
            id: meal.id.to_string(),
            date: meal.date,
            time: meal.time,
            meal_type: meal
                .meal_type
                .parse::<MealType>()
                .unwrap_or(MealType::Snack),
            total_calories: meal.total_calories.to_f64().unwrap_or(0.0),
            items,
        }
    }

    fn food_response(food: FoodRecord) -> FoodResponse {
        FoodResponse {
            id: food.id.to_string(),
            name: food.name,
            calories: food.calories.to_f64().unwrap_or(0.0),
            protein_g: food.protein_g.to_f64().unwrap_or(0.0),
            fat_g: food.fat_g.to_f64().unwrap_or(0.0),
            carbs_g: food.carbs_g.to_f64().unwrap_or(0.0),
            grams_per_unit: food.grams_per_unit.and_then(|d| d.to_f64()),
            unit: food.unit,
        }
    }
}
