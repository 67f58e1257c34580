//! Workout logging service
//!
//! When the client logs a workout without a calorie figure, the server
//! fills it in from the shared exertion table.

use crate::error::ApiError;
use crate::repositories::{CreateWorkout, WorkoutRecord, WorkoutRepository};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;
use vitalog_shared::metrics::estimate_workout_calories;
use vitalog_shared::models::{WorkoutActivity, WorkoutIntensity};
use vitalog_shared::types::{CreateWorkoutRequest, WorkoutResponse};
use vitalog_shared::validation::validate_duration;

/// Workout service for business logic
pub struct WorkoutService;

impl WorkoutService {
    /// Calories for a workout: the client's figure, or the estimate
    pub fn resolve_calories(
        activity: WorkoutActivity,
        intensity: WorkoutIntensity,
        duration_min: i32,
        client_calories: Option<i32>,
    ) -> i32 {
        match client_calories {
            Some(c) if c > 0 => c,
            _ => estimate_workout_calories(activity, intensity, duration_min),
        }
    }

    /// Log a workout
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateWorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        validate_duration(req.duration_min).map_err(ApiError::Validation)?;

        let calories =
            Self::resolve_calories(req.activity, req.intensity, req.duration_min, req.calories);

        let record = WorkoutRepository::create(
            pool,
            CreateWorkout {
                user_id,
                date: req.date,
                duration_min: req.duration_min,
                activity: req.activity.to_string(),
                intensity: req.intensity.to_string(),
                calories,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(Self::to_response(record))
    }

    /// Workout history, newest first; optionally a single day
    pub async fn history(
        pool: &PgPool,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> Result<Vec<WorkoutResponse>, ApiError> {
        let records = match date {
            Some(d) => WorkoutRepository::list_by_date(pool, user_id, d)
                .await
                .map_err(ApiError::Internal)?,
            None => WorkoutRepository::list(pool, user_id)
                .await
                .map_err(ApiError::Internal)?,
        };

        Ok(records.into_iter().map(Self::to_response).collect())
    }

    /// Delete a workout
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = WorkoutRepository::delete(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }
        Ok(())
    }

    fn to_response(record: WorkoutRecord) -> WorkoutResponse {
        WorkoutResponse {
            id: record.id.to_string(),
            date: record.date,
            duration_min: record.duration_min,
            activity: record
                .activity
                .parse::<WorkoutActivity>()
                .unwrap_or(WorkoutActivity::Walking),
            intensity: record
                .intensity
                .parse::<WorkoutIntensity>()
                .unwrap_or_default(),
            calories: record.calories,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_client_calories_win_when_positive() {
        let calories = WorkoutService::resolve_calories(
            WorkoutActivity::Running,
            WorkoutIntensity::High,
            30,
            Some(420),
        );
        assert_eq!(calories, 420);
    }

    #[rstest]
    // estimated from the exertion table when the client sends nothing
    #[case(WorkoutActivity::Running, WorkoutIntensity::High, 30, None, 360)]
    #[case(WorkoutActivity::Walking, WorkoutIntensity::Low, 45, None, 135)]
    #[case(WorkoutActivity::Weights, WorkoutIntensity::Moderate, 40, None, 240)]
    // non-positive client figures fall back to the estimate too
    #[case(WorkoutActivity::Yoga, WorkoutIntensity::Low, 60, Some(0), 120)]
    #[case(WorkoutActivity::Yoga, WorkoutIntensity::Low, 60, Some(-50), 120)]
    fn test_calories_estimated(
        #[case] activity: WorkoutActivity,
        #[case] intensity: WorkoutIntensity,
        #[case] duration: i32,
        #[case] client: Option<i32>,
        #[case] expected: i32,
    ) {
        let calories = WorkoutService::resolve_calories(activity, intensity, duration, client);
        assert_eq!(calories, expected);
    }
}
