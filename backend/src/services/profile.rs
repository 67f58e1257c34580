//! Profile service
//!
//! Reads and updates the health profile and builds the validated
//! `HealthProfile` snapshot the metrics engine consumes. The profile row
//! is created lazily on the first update after registration.

use crate::error::ApiError;
use crate::repositories::{ProfileRecord, ProfileRepository, UpdateProfile, UserRepository};
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;
use vitalog_shared::metrics::{ActivityLevel, DietGoal, Gender, HealthProfile};
use vitalog_shared::types::{OnboardingStatus, ProfileResponse, UpdateProfileRequest};
use vitalog_shared::validation::{validate_age, validate_height, validate_profile_weight};

/// Profile service
pub struct ProfileService;

impl ProfileService {
    /// Get the profile; health fields are empty until first saved
    pub async fn get(pool: &PgPool, user_id: Uuid) -> Result<ProfileResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let profile = ProfileRepository::get(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(match profile {
            Some(p) => ProfileResponse {
                email: user.email,
                display_name: user.display_name,
                weight_kg: p.weight_kg.and_then(|d| d.to_f64()),
                height_cm: p.height_cm.and_then(|d| d.to_f64()),
                age_years: p.age_years,
                gender: p.gender,
                activity_level: p.activity_level,
                diet_type: p.diet_type,
                preferences: p.preferences,
                goal: p.goal,
                goal_weight_kg: p.goal_weight_kg.and_then(|d| d.to_f64()),
                onboarding_completed: p.onboarding_completed,
            },
            None => ProfileResponse {
                email: user.email,
                display_name: user.display_name,
                weight_kg: None,
                height_cm: None,
                age_years: None,
                gender: None,
                activity_level: None,
                diet_type: None,
                preferences: None,
                goal: None,
                goal_weight_kg: None,
                onboarding_completed: false,
            },
        })
    }

    /// Partially update the profile, creating the row on first write
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> Result<ProfileResponse, ApiError> {
        if let Some(weight) = req.weight_kg {
            validate_profile_weight(weight).map_err(ApiError::Validation)?;
        }
        if let Some(height) = req.height_cm {
            validate_height(height).map_err(ApiError::Validation)?;
        }
        if let Some(age) = req.age_years {
            validate_age(age).map_err(ApiError::Validation)?;
        }
        if let Some(goal_weight) = req.goal_weight_kg {
            validate_profile_weight(goal_weight).map_err(ApiError::Validation)?;
        }
        if let Some(gender) = &req.gender {
            gender
                .parse::<Gender>()
                .map_err(ApiError::Validation)?;
        }
        if let Some(activity) = &req.activity_level {
            activity
                .parse::<ActivityLevel>()
                .map_err(ApiError::Validation)?;
        }
        if let Some(goal) = &req.goal {
            goal.parse::<DietGoal>().map_err(ApiError::Validation)?;
        }

        if let Some(name) = &req.display_name {
            UserRepository::update_display_name(pool, user_id, name)
                .await
                .map_err(ApiError::Internal)?;
        }

        let updates = UpdateProfile {
            weight_kg: req.weight_kg,
            height_cm: req.height_cm,
            age_years: req.age_years,
            gender: req.gender,
            activity_level: req.activity_level,
            diet_type: req.diet_type,
            preferences: req.preferences,
            goal: req.goal,
            goal_weight_kg: req.goal_weight_kg,
        };

        ProfileRepository::upsert(pool, user_id, updates)
            .await
            .map_err(ApiError::Internal)?;

        Self::get(pool, user_id).await
    }

    /// Read the onboarding flag
    pub async fn onboarding_status(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<OnboardingStatus, ApiError> {
        let profile = ProfileRepository::get(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(OnboardingStatus {
            onboarding_completed: profile.map(|p| p.onboarding_completed).unwrap_or(false),
        })
    }

    /// Mark onboarding as completed
    pub async fn complete_onboarding(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<OnboardingStatus, ApiError> {
        let updated = ProfileRepository::set_onboarding_completed(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !updated {
            return Err(ApiError::NotFound("Profile not found".to_string()));
        }

        Ok(OnboardingStatus {
            onboarding_completed: true,
        })
    }

    /// Load the validated metrics snapshot for a user
    ///
    /// Returns `None` when the profile is missing or incomplete; callers
    /// fall back to the documented defaults instead of computing garbage.
    pub async fn load_health_profile(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<HealthProfile>, ApiError> {
        let record = ProfileRepository::get(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(record.as_ref().and_then(Self::to_health_profile))
    }

    /// Build the typed snapshot from a stored row
    ///
    /// Weight, height and age must be present and positive. An
    /// unrecognized gender string degrades to `Other` (which shares the
    /// female formula branches); an unrecognized activity level degrades
    /// to the default tier.
    pub(crate) fn to_health_profile(record: &ProfileRecord) -> Option<HealthProfile> {
        let weight_kg = record.weight_kg.and_then(|d| d.to_f64()).filter(|w| *w > 0.0)?;
        let height_cm = record.height_cm.and_then(|d| d.to_f64()).filter(|h| *h > 0.0)?;
        let age_years = record.age_years.filter(|a| *a > 0)?;

        let gender = record
            .gender
            .as_deref()
            .and_then(|s| s.parse::<Gender>().ok())
            .unwrap_or(Gender::Other);
        let activity_level = record
            .activity_level
            .as_deref()
            .and_then(|s| s.parse::<ActivityLevel>().ok())
            .unwrap_or_default();
        let goal = record
            .goal
            .as_deref()
            .and_then(|s| s.parse::<DietGoal>().ok())
            .unwrap_or_default();
        let goal_weight_kg = record
            .goal_weight_kg
            .and_then(|d| d.to_f64())
            .filter(|w| *w > 0.0);

        Some(HealthProfile {
            weight_kg,
            height_cm,
            age_years,
            gender,
            activity_level,
            goal,
            goal_weight_kg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn record() -> ProfileRecord {
        ProfileRecord {
            user_id: Uuid::new_v4(),
            weight_kg: Some(Decimal::new(800, 1)), // 80.0
            height_cm: Some(Decimal::new(1800, 1)),
            age_years: Some(30),
            gender: Some("male".to_string()),
            activity_level: Some("moderate".to_string()),
            diet_type: None,
            preferences: None,
            goal: Some("lose".to_string()),
            goal_weight_kg: Some(Decimal::new(750, 1)),
            onboarding_completed: true,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_complete_record_converts() {
        let p = ProfileService::to_health_profile(&record()).unwrap();
        assert_eq!(p.weight_kg, 80.0);
        assert_eq!(p.height_cm, 180.0);
        assert_eq!(p.age_years, 30);
        assert_eq!(p.gender, Gender::Male);
        assert_eq!(p.activity_level, ActivityLevel::Moderate);
        assert_eq!(p.goal, DietGoal::Lose);
        assert_eq!(p.goal_weight_kg, Some(75.0));
    }

    #[test]
    fn test_missing_weight_fails_closed() {
        let mut r = record();
        r.weight_kg = None;
        assert!(ProfileService::to_health_profile(&r).is_none());

        r.weight_kg = Some(Decimal::ZERO);
        assert!(ProfileService::to_health_profile(&r).is_none());
    }

    #[test]
    fn test_missing_height_or_age_fails_closed() {
        let mut r = record();
        r.height_cm = None;
        assert!(ProfileService::to_health_profile(&r).is_none());

        let mut r = record();
        r.age_years = Some(0);
        assert!(ProfileService::to_health_profile(&r).is_none());
    }

    #[test]
    fn test_unknown_gender_degrades_to_other() {
        let mut r = record();
        r.gender = Some("unspecified".to_string());
        let p = ProfileService::to_health_profile(&r).unwrap();
        assert_eq!(p.gender, Gender::Other);
    }

    #[test]
    fn test_unknown_activity_degrades_to_default() {
        let mut r = record();
        r.activity_level = Some("athletic".to_string());
        let p = ProfileService::to_health_profile(&r).unwrap();
        assert_eq!(p.activity_level, ActivityLevel::default());
    }

    #[test]
    fn test_zero_goal_weight_treated_as_unset() {
        let mut r = record();
        r.goal_weight_kg = Some(Decimal::ZERO);
        let p = ProfileService::to_health_profile(&r).unwrap();
        assert_eq!(p.goal_weight_kg, None);
    }
}
