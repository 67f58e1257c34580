//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the shared metrics engine.

pub mod dashboard;
pub mod export;
pub mod meal;
pub mod profile;
pub mod user;
pub mod water;
pub mod weight;
pub mod workout;

pub use dashboard::DashboardService;
pub use export::ExportService;
pub use meal::MealService;
pub use profile::ProfileService;
pub use user::UserService;
pub use water::WaterService;
pub use weight::WeightService;
pub use workout::WorkoutService;
