//! Water tracking service
//!
//! Per-day intake rows are created lazily with a goal personalized from
//! the profile (or the documented default for users without one).
//! Individual pours accumulate into the day total.

use crate::error::ApiError;
use crate::repositories::{WaterDayRecord, WaterRepository};
use crate::services::ProfileService;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;
use vitalog_shared::metrics::{recommended_water_ml, HealthProfile, DEFAULT_WATER_GOAL_ML};
use vitalog_shared::types::{WaterDayResponse, WaterRecordResponse};
use vitalog_shared::validation::validate_water_amount;

/// Water service for business logic
pub struct WaterService;

impl WaterService {
    /// Daily goal in ml for a user's profile snapshot
    ///
    /// Falls back to the default goal when the profile is missing or
    /// incomplete.
    pub fn goal_for(profile: Option<&HealthProfile>) -> i32 {
        profile
            .map(recommended_water_ml)
            .unwrap_or(DEFAULT_WATER_GOAL_ML)
            .round() as i32
    }

    /// Get a day's summary, creating the row with a personalized goal
    pub async fn day_summary(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<WaterDayResponse, ApiError> {
        let profile = ProfileService::load_health_profile(pool, user_id).await?;
        let goal_ml = Self::goal_for(profile.as_ref());

        let day = WaterRepository::get_or_create_day(pool, user_id, date, goal_ml)
            .await
            .map_err(ApiError::Internal)?;

        Self::to_response(pool, day).await
    }

    /// Append a pour to a day and return the updated summary
    pub async fn add_water(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        amount_ml: i32,
    ) -> Result<WaterDayResponse, ApiError> {
        validate_water_amount(amount_ml).map_err(ApiError::Validation)?;

        let profile = ProfileService::load_health_profile(pool, user_id).await?;
        let goal_ml = Self::goal_for(profile.as_ref());

        let day = WaterRepository::get_or_create_day(pool, user_id, date, goal_ml)
            .await
            .map_err(ApiError::Internal)?;

        WaterRepository::add_record(pool, day.id, amount_ml)
            .await
            .map_err(ApiError::Internal)?;

        // Re-read the day so the total reflects the new pour
        let day = WaterRepository::get_day(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Water day not found".to_string()))?;

        Self::to_response(pool, day).await
    }

    /// Full intake history, newest day first, with individual pours
    pub async fn history(pool: &PgPool, user_id: Uuid) -> Result<Vec<WaterDayResponse>, ApiError> {
        let days = WaterRepository::list_days(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let mut out = Vec::with_capacity(days.len());
        for day in days {
            out.push(Self::to_response(pool, day).await?);
        }
        Ok(out)
    }

    async fn to_response(pool: &PgPool, day: WaterDayRecord) -> Result<WaterDayResponse, ApiError> {
        let records = WaterRepository::records_for_day(pool, day.id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(WaterDayResponse {
            date: day.date,
            goal_ml: day.goal_ml,
            total_ml: day.total_ml,
            records: records
                .into_iter()
                .map(|r| WaterRecordResponse {
                    id: r.id.to_string(),
                    at: r.at,
                    amount_ml: r.amount_ml,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vitalog_shared::metrics::{ActivityLevel, DietGoal, Gender};

    fn profile(weight: f64, age: i32, gender: Gender, activity: ActivityLevel) -> HealthProfile {
        HealthProfile {
            weight_kg: weight,
            height_cm: 170.0,
            age_years: age,
            gender,
            activity_level: activity,
            goal: DietGoal::Maintain,
            goal_weight_kg: None,
        }
    }

    #[test]
    fn test_goal_without_profile_is_default() {
        assert_eq!(WaterService::goal_for(None), 2500);
    }

    #[test]
    fn test_goal_matches_recommendation() {
        let p = profile(90.0, 45, Gender::Male, ActivityLevel::Active);
        assert_eq!(WaterService::goal_for(Some(&p)), 4400);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the stored goal equals the rounded recommendation
        #[test]
        fn prop_goal_is_rounded_recommendation(
            weight in 30.0f64..200.0,
            age in 18i32..95,
        ) {
            let p = profile(weight, age, Gender::Female, ActivityLevel::Moderate);
            let goal = WaterService::goal_for(Some(&p));
            prop_assert_eq!(goal, recommended_water_ml(&p).round() as i32);
        }

        /// Property: goals are always positive
        #[test]
        fn prop_goal_positive(weight in 20.0f64..500.0, age in 1i32..110) {
            let p = profile(weight, age, Gender::Other, ActivityLevel::Sedentary);
            prop_assert!(WaterService::goal_for(Some(&p)) > 0);
        }
    }
}
