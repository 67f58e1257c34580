//! Data export service
//!
//! Exports a user's logged history as structured JSON or a flat CSV.

use crate::error::ApiError;
use crate::repositories::{MealRepository, WaterRepository, WeightRepository, WorkoutRepository};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Export format version, bumped on breaking layout changes
const EXPORT_VERSION: &str = "1.0";

/// Complete user data export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDataExport {
    pub export_version: String,
    pub exported_at: DateTime<Utc>,
    pub user_id: String,
    pub weight_entries: Vec<WeightExport>,
    pub water_days: Vec<WaterDayExport>,
    pub meals: Vec<MealExport>,
    pub workouts: Vec<WorkoutExport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightExport {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterDayExport {
    pub date: NaiveDate,
    pub goal_ml: i32,
    pub total_ml: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealExport {
    pub date: NaiveDate,
    pub time: String,
    pub meal_type: String,
    pub total_calories: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExport {
    pub date: NaiveDate,
    pub duration_min: i32,
    pub activity: String,
    pub intensity: String,
    pub calories: i32,
}

/// One row of the flat CSV export
#[derive(Debug, Clone, Serialize)]
struct CsvRow<'a> {
    kind: &'a str,
    date: NaiveDate,
    detail: String,
    amount: f64,
    unit: &'a str,
}

/// Export service
pub struct ExportService;

impl ExportService {
    /// Export everything as a structured document
    pub async fn export_json(pool: &PgPool, user_id: Uuid) -> Result<UserDataExport, ApiError> {
        let weights = WeightRepository::list(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let water_days = WaterRepository::list_days(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let meals = MealRepository::list_all(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        let workouts = WorkoutRepository::list(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(UserDataExport {
            export_version: EXPORT_VERSION.to_string(),
            exported_at: Utc::now(),
            user_id: user_id.to_string(),
            weight_entries: weights
                .into_iter()
                .map(|w| WeightExport {
                    date: w.date,
                    weight_kg: w.weight_kg.to_f64().unwrap_or(0.0),
                })
                .collect(),
            water_days: water_days
                .into_iter()
                .map(|d| WaterDayExport {
                    date: d.date,
                    goal_ml: d.goal_ml,
                    total_ml: d.total_ml,
                })
                .collect(),
            meals: meals
                .into_iter()
                .map(|m| MealExport {
                    date: m.date,
                    time: m.time,
                    meal_type: m.meal_type,
                    total_calories: m.total_calories.to_f64().unwrap_or(0.0),
                })
                .collect(),
            workouts: workouts
                .into_iter()
                .map(|w| WorkoutExport {
                    date: w.date,
                    duration_min: w.duration_min,
                    activity: w.activity,
                    intensity: w.intensity,
                    calories: w.calories,
                })
                .collect(),
        })
    }

    /// Export everything as a flat CSV
    pub async fn export_csv(pool: &PgPool, user_id: Uuid) -> Result<String, ApiError> {
        let export = Self::export_json(pool, user_id).await?;
        Self::to_csv(&export).map_err(ApiError::Internal)
    }

    /// Render an export document to CSV
    pub(crate) fn to_csv(export: &UserDataExport) -> anyhow::Result<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);

        for w in &export.weight_entries {
            wtr.serialize(CsvRow {
                kind: "weight",
                date: w.date,
                detail: String::new(),
                amount: w.weight_kg,
                unit: "kg",
            })?;
        }
        for d in &export.water_days {
            wtr.serialize(CsvRow {
                kind: "water",
                date: d.date,
                detail: format!("goal {} ml", d.goal_ml),
                amount: d.total_ml as f64,
                unit: "ml",
            })?;
        }
        for m in &export.meals {
            wtr.serialize(CsvRow {
                kind: "meal",
                date: m.date,
                detail: format!("{} {}", m.meal_type, m.time),
                amount: m.total_calories,
                unit: "kcal",
            })?;
        }
        for w in &export.workouts {
            wtr.serialize(CsvRow {
                kind: "workout",
                date: w.date,
                detail: format!("{} ({}, {} min)", w.activity, w.intensity, w.duration_min),
                amount: w.calories as f64,
                unit: "kcal",
            })?;
        }

        let bytes = wtr.into_inner()?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_export() -> UserDataExport {
        UserDataExport {
            export_version: EXPORT_VERSION.to_string(),
            exported_at: Utc::now(),
            user_id: Uuid::nil().to_string(),
            weight_entries: vec![WeightExport {
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                weight_kg: 80.5,
            }],
            water_days: vec![WaterDayExport {
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                goal_ml: 2500,
                total_ml: 1750,
            }],
            meals: vec![MealExport {
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                time: "12:30".to_string(),
                meal_type: "lunch".to_string(),
                total_calories: 650.0,
            }],
            workouts: vec![WorkoutExport {
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                duration_min: 30,
                activity: "running".to_string(),
                intensity: "moderate".to_string(),
                calories: 300,
            }],
        }
    }

    #[test]
    fn test_csv_has_header_and_all_rows() {
        let csv = ExportService::to_csv(&sample_export()).unwrap();
        let lines: Vec<&str> = csv.trim().lines().collect();

        // header + one row per record
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("kind,date,detail,amount,unit"));
        assert!(lines[1].starts_with("weight,2025-06-01"));
        assert!(csv.contains("water,2025-06-01,goal 2500 ml,1750,ml"));
        assert!(csv.contains("workout,2025-06-01"));
    }

    #[test]
    fn test_json_round_trip() {
        let export = sample_export();
        let json = serde_json::to_string(&export).unwrap();
        let parsed: UserDataExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.weight_entries.len(), 1);
        assert_eq!(parsed.meals[0].total_calories, 650.0);
    }
}
