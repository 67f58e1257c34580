//! API request and response types

use crate::metrics::DailyBalance;
use crate::models::{MealType, WorkoutActivity, WorkoutIntensity};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Date query parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateQuery {
    pub date: NaiveDate,
}

/// Optional date query parameter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionalDateQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Authentication tokens response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub display_name: Option<String>,
}

/// Account summary returned by /auth/me
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Profile Types
// ============================================================================

/// User profile response
///
/// All health fields are optional: a freshly registered user has no
/// profile row yet and the client renders placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg: Option<f64>,
    pub onboarding_completed: bool,
}

/// Partial profile update; absent fields keep their stored values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<i32>,
    /// male / female / other
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// sedentary / light / moderate / active / very_active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
    /// lose / maintain / gain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg: Option<f64>,
}

/// Onboarding flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingStatus {
    pub onboarding_completed: bool,
}

// ============================================================================
// Weight Types
// ============================================================================

/// Weight log entry request (one entry per calendar day)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWeightRequest {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

/// Weight log entry response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntryResponse {
    pub id: String,
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Water Types
// ============================================================================

/// Add a water pour to a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddWaterRequest {
    pub date: NaiveDate,
    pub amount_ml: i32,
}

/// Individual pour within a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterRecordResponse {
    pub id: String,
    pub at: DateTime<Utc>,
    pub amount_ml: i32,
}

/// One day of water intake with its personalized goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterDayResponse {
    pub date: NaiveDate,
    pub goal_ml: i32,
    pub total_ml: i32,
    pub records: Vec<WaterRecordResponse>,
}

// ============================================================================
// Food and Meal Types
// ============================================================================

/// Food catalog search parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Food catalog entry (macros per 100 g)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodResponse {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams_per_unit: Option<f64>,
    pub unit: String,
}

/// One food line in a meal request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealItemInput {
    pub food_id: String,
    pub grams: f64,
}

/// Log a meal; item calories are computed server-side from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMealRequest {
    pub date: NaiveDate,
    /// Time of day, HH:MM
    pub time: String,
    pub meal_type: MealType,
    pub items: Vec<MealItemInput>,
}

/// One food line in a meal response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealItemResponse {
    pub id: String,
    pub food_id: String,
    pub food_name: String,
    pub grams: f64,
    pub calories: f64,
}

/// A logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealResponse {
    pub id: String,
    pub date: NaiveDate,
    pub time: String,
    pub meal_type: MealType,
    pub total_calories: f64,
    pub items: Vec<MealItemResponse>,
}

/// Meals of one calendar day with the day total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayMealsResponse {
    pub date: NaiveDate,
    pub total_calories: f64,
    pub meals: Vec<MealResponse>,
}

// ============================================================================
// Workout Types
// ============================================================================

/// Log a workout; omitted calories are estimated server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutRequest {
    pub date: NaiveDate,
    pub duration_min: i32,
    pub activity: WorkoutActivity,
    pub intensity: WorkoutIntensity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<i32>,
}

/// A logged workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: String,
    pub date: NaiveDate,
    pub duration_min: i32,
    pub activity: WorkoutActivity,
    pub intensity: WorkoutIntensity,
    pub calories: i32,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Dashboard Types
// ============================================================================

/// Profile block of the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardProfile {
    pub weight_kg: f64,
    pub goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg: Option<f64>,
    pub age_years: i32,
    pub gender: String,
    pub activity_level: String,
    pub target_calories: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_goal_date: Option<NaiveDate>,
}

/// Today's aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayStats {
    pub calories_consumed: f64,
    pub calories_burned: f64,
    pub water_consumed_ml: i64,
    pub water_goal_ml: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

/// Trailing-week aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub average_calories: f64,
    pub average_water_ml: f64,
    pub total_workouts: i64,
    pub weight_trend: Vec<f64>,
}

/// The full dashboard payload, computed fresh on every request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<DashboardProfile>,
    pub today: TodayStats,
    pub weekly: WeeklyStats,
    pub balance: Vec<DailyBalance>,
}

// ============================================================================
// Export Types
// ============================================================================

/// Export query: json (default) or csv
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: Option<String>,
}
