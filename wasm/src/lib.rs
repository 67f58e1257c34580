//! Vitalog WASM Module
//!
//! WebAssembly bindings over the shared metrics so the browser client
//! can preview the same numbers the server computes while a form is
//! being edited.

use vitalog_shared::metrics::{
    self, ActivityLevel, DietGoal, Gender, HealthProfile,
};
use vitalog_shared::models::{WorkoutActivity, WorkoutIntensity};
use wasm_bindgen::prelude::*;

fn build_profile(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    gender: &str,
    activity_level: &str,
    goal: &str,
    goal_weight_kg: Option<f64>,
) -> HealthProfile {
    HealthProfile {
        weight_kg,
        height_cm,
        age_years,
        gender: gender.parse::<Gender>().unwrap_or(Gender::Other),
        activity_level: activity_level.parse::<ActivityLevel>().unwrap_or_default(),
        goal: goal.parse::<DietGoal>().unwrap_or_default(),
        goal_weight_kg,
    }
}

/// Recommended daily water intake in milliliters
#[wasm_bindgen]
pub fn recommended_water_ml(
    weight_kg: f64,
    age_years: i32,
    gender: &str,
    activity_level: &str,
) -> f64 {
    let profile = build_profile(
        weight_kg,
        0.0,
        age_years,
        gender,
        activity_level,
        "maintain",
        None,
    );
    metrics::recommended_water_ml(&profile)
}

/// Daily calorie target in kcal
#[wasm_bindgen]
pub fn target_daily_calories(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> i32 {
    let profile = build_profile(
        weight_kg,
        height_cm,
        age_years,
        gender,
        activity_level,
        goal,
        None,
    );
    metrics::target_daily_calories(&profile)
}

/// Weeks until the goal weight at the modeled loss rate
///
/// Returns `undefined` when no estimate applies (no loss to model).
#[wasm_bindgen]
pub fn weeks_to_goal_weight(
    weight_kg: f64,
    goal_weight_kg: f64,
    age_years: i32,
    gender: &str,
    activity_level: &str,
) -> Option<i32> {
    let profile = build_profile(
        weight_kg,
        0.0,
        age_years,
        gender,
        activity_level,
        "lose",
        Some(goal_weight_kg),
    );
    // Weeks are date-independent; derive them from an arbitrary epoch
    let epoch = chrono_epoch();
    metrics::estimated_goal_date(&profile, epoch)
        .map(|d| ((d - epoch).num_days() / 7) as i32)
}

fn chrono_epoch() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

/// Calories burned by a workout
#[wasm_bindgen]
pub fn estimate_workout_calories(activity: &str, intensity: &str, duration_min: i32) -> i32 {
    let activity = activity
        .parse::<WorkoutActivity>()
        .unwrap_or(WorkoutActivity::Walking);
    let intensity = intensity.parse::<WorkoutIntensity>().unwrap_or_default();
    metrics::estimate_workout_calories(activity, intensity, duration_min)
}

/// Daily calorie balances: consumed − target − burned, element-wise
#[wasm_bindgen]
pub fn daily_balances(consumed: &[f64], burned: &[f64], target_calories: i32) -> Vec<f64> {
    consumed
        .iter()
        .zip(burned.iter())
        .map(|(c, b)| c - target_calories as f64 - b)
        .collect()
}
