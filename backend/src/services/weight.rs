//! Weight tracking service
//!
//! One entry per user per calendar day. Logging the most recent entry
//! also syncs the current weight on the profile, so the metrics engine
//! always reads the latest measurement.

use crate::error::ApiError;
use crate::repositories::{ProfileRepository, WeightRepository};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;
use vitalog_shared::validation::validate_weight_entry;

/// Weight log entry
#[derive(Debug, Clone)]
pub struct WeightEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub created_at: DateTime<Utc>,
}

/// Weight service for business logic
pub struct WeightService;

impl WeightService {
    /// Log a weight entry for a day
    ///
    /// Returns a conflict when the day already has an entry; the client
    /// deletes and re-logs to correct a value.
    pub async fn log_weight(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        weight_kg: f64,
    ) -> Result<WeightEntry, ApiError> {
        validate_weight_entry(weight_kg).map_err(ApiError::Validation)?;

        if WeightRepository::exists_for_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(
                "An entry already exists for this date".to_string(),
            ));
        }

        let record = WeightRepository::create(pool, user_id, date, weight_kg)
            .await
            .map_err(ApiError::Internal)?;

        // Keep the profile's current weight in sync when this entry is
        // now the most recent one
        let latest = WeightRepository::get_latest(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        if latest.as_ref().map(|l| l.id) == Some(record.id) {
            ProfileRepository::update_current_weight(pool, user_id, weight_kg)
                .await
                .map_err(ApiError::Internal)?;
        }

        Ok(Self::to_entry(record))
    }

    /// Get the full weight history, oldest first
    pub async fn history(pool: &PgPool, user_id: Uuid) -> Result<Vec<WeightEntry>, ApiError> {
        let records = WeightRepository::list(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Self::to_entry).collect())
    }

    /// Get the entry for a specific day, if any
    pub async fn for_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<WeightEntry>, ApiError> {
        let record = WeightRepository::get_for_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?;

        Ok(record.map(Self::to_entry))
    }

    /// Delete a weight entry
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        let deleted = WeightRepository::delete(pool, id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Weight entry not found".to_string()));
        }
        Ok(())
    }

    fn to_entry(record: crate::repositories::WeightEntryRecord) -> WeightEntry {
        WeightEntry {
            id: record.id,
            date: record.date,
            weight_kg: record.weight_kg.to_f64().unwrap_or(0.0),
            created_at: record.created_at,
        }
    }
}
