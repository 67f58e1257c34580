//! Database repositories
//!
//! Data access layer over PostgreSQL.

pub mod meal;
pub mod user;
pub mod water;
pub mod weight;
pub mod workout;

pub use meal::{
    CreateMeal, CreateMealItem, FoodRecord, FoodRepository, MealItemRecord, MealRecord,
    MealRepository,
};
pub use user::{ProfileRecord, ProfileRepository, UpdateProfile, UserRecord, UserRepository};
pub use water::{WaterDayRecord, WaterRecordRow, WaterRepository};
pub use weight::{WeightEntryRecord, WeightRepository};
pub use workout::{CreateWorkout, WorkoutRecord, WorkoutRepository};
