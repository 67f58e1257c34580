//! Dashboard service
//!
//! Assembles the full dashboard payload: profile snapshot with goal-date
//! projection, today's aggregates, trailing-week statistics and the
//! 7-day calorie-balance series. Everything is computed fresh per
//! request; "today" is injected so the calculations stay clock-free.

use crate::error::ApiError;
use crate::repositories::{
    MealRecord, MealRepository, ProfileRepository, WaterDayRecord, WaterRepository,
    WeightRepository, WorkoutRecord, WorkoutRepository,
};
use crate::services::ProfileService;
use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;
use vitalog_shared::metrics::{
    assemble_daily_window, daily_balance_series, summarize, DailyActivity, MetricsSummary,
    DEFAULT_CALORIE_GOAL, DEFAULT_WATER_GOAL_ML,
};
use vitalog_shared::types::{DashboardProfile, DashboardResponse, TodayStats, WeeklyStats};

/// Days in the dashboard balance window
const WINDOW_DAYS: usize = 7;

/// Dashboard service
pub struct DashboardService;

impl DashboardService {
    /// Build the dashboard for a user as of `today`
    pub async fn get(
        pool: &PgPool,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<DashboardResponse, ApiError> {
        let profile_record = ProfileRepository::get(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let health = profile_record
            .as_ref()
            .and_then(ProfileService::to_health_profile);

        // Trailing week of logged activity
        let week_start = today - Duration::days(WINDOW_DAYS as i64 - 1);
        let meals = MealRepository::list_range(pool, user_id, week_start, today)
            .await
            .map_err(ApiError::Internal)?;
        let workouts = WorkoutRepository::list_range(pool, user_id, week_start, today)
            .await
            .map_err(ApiError::Internal)?;
        let water_days = WaterRepository::list_days_range(pool, user_id, week_start, today)
            .await
            .map_err(ApiError::Internal)?;

        let entries = Self::aggregate_entries(&meals, &workouts, &water_days);
        let window = assemble_daily_window(today, WINDOW_DAYS, &entries);

        // One engine call per request; users without a complete profile
        // get the documented defaults instead
        let MetricsSummary {
            recommended_water_ml,
            target_calories,
            estimated_goal_date,
            daily_balance: balance,
        } = match &health {
            Some(h) => summarize(h, &window, today),
            None => MetricsSummary {
                recommended_water_ml: DEFAULT_WATER_GOAL_ML,
                target_calories: DEFAULT_CALORIE_GOAL,
                estimated_goal_date: None,
                daily_balance: daily_balance_series(&window, DEFAULT_CALORIE_GOAL),
            },
        };
        let water_goal_ml = recommended_water_ml.round() as i32;

        // Today's numbers come straight from the dense window
        let today_entry = window
            .last()
            .cloned()
            .unwrap_or_else(|| DailyActivity::empty(today));

        let todays_weight = WeightRepository::get_for_date(pool, user_id, today)
            .await
            .map_err(ApiError::Internal)?
            .and_then(|r| r.weight_kg.to_f64())
            .or(health.as_ref().map(|h| h.weight_kg));

        let weight_trend: Vec<f64> = WeightRepository::list(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .iter()
            .filter_map(|r| r.weight_kg.to_f64())
            .collect();

        let days = WINDOW_DAYS as f64;
        let weekly = WeeklyStats {
            average_calories: (window.iter().map(|d| d.calories_consumed).sum::<f64>() / days)
                .round(),
            average_water_ml: (window.iter().map(|d| d.water_ml as f64).sum::<f64>() / days)
                .round(),
            total_workouts: workouts.len() as i64,
            weight_trend,
        };

        let profile = health.as_ref().map(|h| DashboardProfile {
            weight_kg: h.weight_kg,
            goal: h.goal.to_string(),
            goal_weight_kg: h.goal_weight_kg,
            age_years: h.age_years,
            gender: h.gender.to_string(),
            activity_level: h.activity_level.to_string(),
            target_calories,
            estimated_goal_date,
        });

        Ok(DashboardResponse {
            profile,
            today: TodayStats {
                calories_consumed: today_entry.calories_consumed,
                calories_burned: today_entry.calories_burned,
                water_consumed_ml: today_entry.water_ml,
                water_goal_ml,
                weight_kg: todays_weight,
            },
            weekly,
            balance,
        })
    }

    /// Fold raw meal/workout/water records into per-day activity entries
    ///
    /// Only days with at least one record appear; the dense window is
    /// assembled downstream by the metrics engine.
    pub(crate) fn aggregate_entries(
        meals: &[MealRecord],
        workouts: &[WorkoutRecord],
        water_days: &[WaterDayRecord],
    ) -> Vec<DailyActivity> {
        let mut entries: Vec<DailyActivity> = Vec::new();

        let mut entry_for = |date: NaiveDate, entries: &mut Vec<DailyActivity>| -> usize {
            match entries.iter().position(|e| e.date == date) {
                Some(idx) => idx,
                None => {
                    entries.push(DailyActivity::empty(date));
                    entries.len() - 1
                }
            }
        };

        for meal in meals {
            let idx = entry_for(meal.date, &mut entries);
            entries[idx].calories_consumed += meal.total_calories.to_f64().unwrap_or(0.0);
        }
        for workout in workouts {
            let idx = entry_for(workout.date, &mut entries);
            entries[idx].calories_burned += workout.calories as f64;
        }
        for day in water_days {
            let idx = entry_for(day.date, &mut entries);
            entries[idx].water_ml += day.total_ml as i64;
        }

        entries
    }
}
