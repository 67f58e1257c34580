//! Derived health metrics
//!
//! Pure calculations that turn a user profile and logged activity into a
//! hydration target, a daily calorie budget, a goal-date projection, and
//! the daily calorie-balance series shown on the dashboard.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no I/O, no clock access ("today" is injected)
//! 2. **Validated Inputs**: profiles are constructed at the storage
//!    boundary, so every field here is already numeric
//! 3. **Fail Closed**: inapplicable requests yield `None` or a documented
//!    default, never a panic

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{WorkoutActivity, WorkoutIntensity};

/// Water goal used when the user has no profile yet
pub const DEFAULT_WATER_GOAL_ML: f64 = 2500.0;

/// Calorie target used when the user has no profile yet
pub const DEFAULT_CALORIE_GOAL: i32 = 2000;

/// Calorie deficit applied when the diet goal is losing weight
const LOSS_DEFICIT_KCAL: f64 = 500.0;

/// Calorie surplus applied when the diet goal is gaining weight
const GAIN_SURPLUS_KCAL: f64 = 300.0;

/// Safety floors for the calorie target (kcal/day)
const CALORIE_FLOOR_MALE: i32 = 1500;
const CALORIE_FLOOR_OTHER: i32 = 1200;

// ============================================================================
// Profile Types
// ============================================================================

/// Gender used for physiological calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Baseline daily water intake in ml (female and other share the
    /// female baseline)
    fn water_base_ml(self) -> f64 {
        match self {
            Gender::Male => 3000.0,
            Gender::Female | Gender::Other => 2200.0,
        }
    }

    /// Baseline sustainable weight loss in kg/week
    fn weekly_loss_base_kg(self) -> f64 {
        match self {
            Gender::Male => 0.6,
            Gender::Female => 0.45,
            Gender::Other => 0.5,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Activity level, the canonical five-tier vocabulary
///
/// Each formula maps these tiers through its own table; see the methods
/// below for the exact multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise most days
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR for the calorie target (three tiers)
    pub fn calorie_multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light | ActivityLevel::Moderate => 1.375,
            ActivityLevel::Active | ActivityLevel::VeryActive => 1.55,
        }
    }

    /// Whether this tier counts as "high activity" for the hydration bonus
    pub fn is_high(self) -> bool {
        matches!(self, ActivityLevel::Active | ActivityLevel::VeryActive)
    }

    /// Adjustment applied to the weekly weight-loss rate
    pub fn loss_rate_adjustment(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 0.8,
            ActivityLevel::Light | ActivityLevel::Moderate => 1.0,
            ActivityLevel::Active => 1.1,
            ActivityLevel::VeryActive => 1.2,
        }
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise most days",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Diet goal driving the calorie offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DietGoal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl fmt::Display for DietGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DietGoal::Lose => "lose",
            DietGoal::Maintain => "maintain",
            DietGoal::Gain => "gain",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for DietGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lose" => Ok(DietGoal::Lose),
            "maintain" => Ok(DietGoal::Maintain),
            "gain" => Ok(DietGoal::Gain),
            _ => Err(format!("Unknown diet goal: {}", s)),
        }
    }
}

/// Profile snapshot the calculations read
///
/// Built once when loading from storage; all fields are validated
/// numerics by then.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: i32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: DietGoal,
    /// Target weight in kilograms, when the user has set one
    pub goal_weight_kg: Option<f64>,
}

// ============================================================================
// Activity Aggregates
// ============================================================================

/// One calendar day of logged activity, aggregated upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub calories_consumed: f64,
    pub calories_burned: f64,
    pub water_ml: i64,
}

impl DailyActivity {
    /// An empty day (nothing logged)
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            calories_consumed: 0.0,
            calories_burned: 0.0,
            water_ml: 0,
        }
    }
}

/// Calorie balance for one day: consumed − target − burned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub consumed: f64,
    pub burned: f64,
    pub balance: f64,
}

/// Everything the dashboard derives from a profile and an activity window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub recommended_water_ml: f64,
    pub target_calories: i32,
    pub estimated_goal_date: Option<NaiveDate>,
    pub daily_balance: Vec<DailyBalance>,
}

// ============================================================================
// Hydration
// ============================================================================

/// Recommended daily water intake in milliliters
///
/// Base 3000 ml (male) or 2200 ml (female/other), −200 ml from age 50,
/// +500 ml for high activity, plus 10 ml per kg of body weight.
pub fn recommended_water_ml(profile: &HealthProfile) -> f64 {
    let mut base = profile.gender.water_base_ml();
    if profile.age_years >= 50 {
        base -= 200.0;
    }
    if profile.activity_level.is_high() {
        base += 500.0;
    }
    base + profile.weight_kg * 10.0
}

// ============================================================================
// Calorie Target
// ============================================================================

/// Basal Metabolic Rate via the revised Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) − 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) − 4.330 × age(y)
///
/// `Other` uses the female coefficients.
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> f64 {
    match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years as f64,
        Gender::Female | Gender::Other => {
            447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years as f64
        }
    }
}

/// Daily calorie target in kcal
///
/// BMR × activity multiplier, −500 when losing, +300 when gaining,
/// floored at 1500 kcal (male) / 1200 kcal (female/other).
pub fn target_daily_calories(profile: &HealthProfile) -> i32 {
    let bmr = basal_metabolic_rate(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let mut target = bmr * profile.activity_level.calorie_multiplier();

    match profile.goal {
        DietGoal::Lose => target -= LOSS_DEFICIT_KCAL,
        DietGoal::Gain => target += GAIN_SURPLUS_KCAL,
        DietGoal::Maintain => {}
    }

    let floor = match profile.gender {
        Gender::Male => CALORIE_FLOOR_MALE,
        Gender::Female | Gender::Other => CALORIE_FLOOR_OTHER,
    };
    (target.round() as i32).max(floor)
}

// ============================================================================
// Goal Date Projection
// ============================================================================

/// Rate adjustment by age bracket
fn age_rate_adjustment(age_years: i32) -> f64 {
    if age_years < 30 {
        1.0
    } else if age_years < 50 {
        0.9
    } else {
        0.8
    }
}

/// Projected calendar date at which the goal weight is reached
///
/// Models weight loss only: returns `None` when no goal weight is set,
/// when the current weight is not above it, or when the effective weekly
/// rate degenerates to zero. These are expected outcomes, not errors.
pub fn estimated_goal_date(profile: &HealthProfile, today: NaiveDate) -> Option<NaiveDate> {
    let goal_kg = profile.goal_weight_kg?;
    if goal_kg <= 0.0 || profile.weight_kg <= goal_kg {
        return None;
    }

    let rate = profile.gender.weekly_loss_base_kg()
        * age_rate_adjustment(profile.age_years)
        * profile.activity_level.loss_rate_adjustment();
    if rate <= 0.0 {
        return None;
    }

    let weeks = ((profile.weight_kg - goal_kg) / rate).ceil() as i64;
    Some(today + Duration::weeks(weeks))
}

// ============================================================================
// Daily Balance
// ============================================================================

/// Map an activity window to its calorie balance, preserving order
///
/// balance = consumed − target − burned; output length equals input length.
pub fn daily_balance_series(window: &[DailyActivity], target_calories: i32) -> Vec<DailyBalance> {
    window
        .iter()
        .map(|day| DailyBalance {
            date: day.date,
            consumed: day.calories_consumed,
            burned: day.calories_burned,
            balance: day.calories_consumed - target_calories as f64 - day.calories_burned,
        })
        .collect()
}

/// Build the dense oldest→newest window ending at `end`
///
/// Days with no logged entry are zero-filled, so their balance comes out
/// as −target. Duplicate entries for a day resolve to the first match.
pub fn assemble_daily_window(
    end: NaiveDate,
    days: usize,
    entries: &[DailyActivity],
) -> Vec<DailyActivity> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = end - Duration::days(offset as i64);
            entries
                .iter()
                .find(|e| e.date == date)
                .cloned()
                .unwrap_or_else(|| DailyActivity::empty(date))
        })
        .collect()
}

// ============================================================================
// Workout Calories
// ============================================================================

/// kcal burned per minute at (low, moderate, high) intensity
fn kcal_per_minute(activity: WorkoutActivity) -> (i32, i32, i32) {
    match activity {
        WorkoutActivity::Walking => (3, 4, 5),
        WorkoutActivity::Running => (8, 10, 12),
        WorkoutActivity::Cycling => (6, 8, 10),
        WorkoutActivity::Swimming => (7, 9, 11),
        WorkoutActivity::Yoga => (2, 3, 4),
        WorkoutActivity::Weights => (4, 6, 8),
        WorkoutActivity::Soccer => (8, 10, 12),
        WorkoutActivity::Hiking => (6, 8, 10),
        WorkoutActivity::Dancing => (5, 7, 9),
        WorkoutActivity::Boxing => (8, 10, 12),
    }
}

/// Estimate calories burned by a workout
pub fn estimate_workout_calories(
    activity: WorkoutActivity,
    intensity: WorkoutIntensity,
    duration_min: i32,
) -> i32 {
    let (low, moderate, high) = kcal_per_minute(activity);
    let per_minute = match intensity {
        WorkoutIntensity::Low => low,
        WorkoutIntensity::Moderate => moderate,
        WorkoutIntensity::High => high,
    };
    duration_min.max(0) * per_minute
}

// ============================================================================
// Summary
// ============================================================================

/// Compute the full metrics summary for a profile and activity window
pub fn summarize(
    profile: &HealthProfile,
    window: &[DailyActivity],
    today: NaiveDate,
) -> MetricsSummary {
    let target_calories = target_daily_calories(profile);
    MetricsSummary {
        recommended_water_ml: recommended_water_ml(profile),
        target_calories,
        estimated_goal_date: estimated_goal_date(profile, today),
        daily_balance: daily_balance_series(window, target_calories),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile(
        weight: f64,
        height: f64,
        age: i32,
        gender: Gender,
        activity: ActivityLevel,
    ) -> HealthProfile {
        HealthProfile {
            weight_kg: weight,
            height_cm: height,
            age_years: age,
            gender,
            activity_level: activity,
            goal: DietGoal::Maintain,
            goal_weight_kg: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // =========================================================================
    // Hydration Tests
    // =========================================================================

    #[test]
    fn test_water_active_male_under_50() {
        // 3000 + 500 + 90*10, no senior adjustment at 45
        let p = profile(90.0, 180.0, 45, Gender::Male, ActivityLevel::Active);
        assert_eq!(recommended_water_ml(&p), 4400.0);
    }

    #[test]
    fn test_water_senior_moderate_female() {
        // 2200 - 200 + 70*10
        let p = profile(70.0, 165.0, 55, Gender::Female, ActivityLevel::Moderate);
        assert_eq!(recommended_water_ml(&p), 2700.0);
    }

    #[test]
    fn test_water_other_uses_female_baseline() {
        let female = profile(60.0, 165.0, 25, Gender::Female, ActivityLevel::Light);
        let other = profile(60.0, 165.0, 25, Gender::Other, ActivityLevel::Light);
        assert_eq!(recommended_water_ml(&female), recommended_water_ml(&other));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: water recommendation is positive
        #[test]
        fn prop_water_positive(
            weight in 20.0f64..500.0,
            age in 1i32..110,
        ) {
            let p = profile(weight, 170.0, age, Gender::Female, ActivityLevel::Sedentary);
            prop_assert!(recommended_water_ml(&p) > 0.0);
        }

        /// Property: heavier = more water (other fields fixed)
        #[test]
        fn prop_water_monotonic_in_weight(
            w1 in 40.0f64..100.0,
            delta in 0.1f64..100.0,
            age in 18i32..90,
        ) {
            let lighter = profile(w1, 170.0, age, Gender::Male, ActivityLevel::Moderate);
            let heavier = profile(w1 + delta, 170.0, age, Gender::Male, ActivityLevel::Moderate);
            prop_assert!(recommended_water_ml(&heavier) > recommended_water_ml(&lighter));
        }

        /// Property: high activity adds exactly 500 ml over the same profile
        #[test]
        fn prop_water_high_activity_bonus(weight in 40.0f64..150.0, age in 18i32..90) {
            let moderate = profile(weight, 170.0, age, Gender::Female, ActivityLevel::Moderate);
            let active = profile(weight, 170.0, age, Gender::Female, ActivityLevel::Active);
            let diff = recommended_water_ml(&active) - recommended_water_ml(&moderate);
            prop_assert!((diff - 500.0).abs() < 1e-9);
        }
    }

    // =========================================================================
    // Calorie Target Tests
    // =========================================================================

    #[test]
    fn test_bmr_harris_benedict_male() {
        // 80kg, 170cm, 30y male: 88.362 + 1071.76 + 815.83 - 170.31 ≈ 1805.64
        let bmr = basal_metabolic_rate(80.0, 170.0, 30, Gender::Male);
        assert!((bmr - 1805.64).abs() < 0.1);
    }

    #[test]
    fn test_target_sedentary_male_losing() {
        let mut p = profile(80.0, 170.0, 30, Gender::Male, ActivityLevel::Sedentary);
        p.goal = DietGoal::Lose;
        // round(1805.642 * 1.2) - 500 = 2167 - 500
        assert_eq!(target_daily_calories(&p), 1667);
    }

    #[test]
    fn test_target_gain_surplus() {
        let mut p = profile(80.0, 170.0, 30, Gender::Male, ActivityLevel::Sedentary);
        p.goal = DietGoal::Gain;
        let maintain = target_daily_calories(&profile(
            80.0,
            170.0,
            30,
            Gender::Male,
            ActivityLevel::Sedentary,
        ));
        assert_eq!(target_daily_calories(&p), maintain + 300);
    }

    #[test]
    fn test_target_floor_applies() {
        // Small, older, sedentary profile on a deficit bottoms out at the floor
        let mut p = profile(40.0, 145.0, 80, Gender::Female, ActivityLevel::Sedentary);
        p.goal = DietGoal::Lose;
        assert_eq!(target_daily_calories(&p), 1200);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the gender branch is observable — same numbers through
        /// the male and female formulas never coincide
        #[test]
        fn prop_gender_branch_observable(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80,
        ) {
            let male = basal_metabolic_rate(weight, height, age, Gender::Male);
            let female = basal_metabolic_rate(weight, height, age, Gender::Female);
            prop_assert!((male - female).abs() > f64::EPSILON);
        }

        /// Property: target never drops below the per-gender floor
        #[test]
        fn prop_target_floored(
            weight in 20.0f64..500.0,
            height in 80.0f64..260.0,
            age in 1i32..110,
        ) {
            let mut p = profile(weight, height, age, Gender::Male, ActivityLevel::Sedentary);
            p.goal = DietGoal::Lose;
            prop_assert!(target_daily_calories(&p) >= 1500);
            p.gender = Gender::Female;
            prop_assert!(target_daily_calories(&p) >= 1200);
        }

        /// Property: repeated calls agree (pure function)
        #[test]
        fn prop_target_idempotent(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80,
        ) {
            let p = profile(weight, height, age, Gender::Male, ActivityLevel::Moderate);
            prop_assert_eq!(target_daily_calories(&p), target_daily_calories(&p));
        }
    }

    // =========================================================================
    // Goal Date Tests
    // =========================================================================

    #[test]
    fn test_goal_date_requires_loss() {
        let mut p = profile(70.0, 170.0, 30, Gender::Male, ActivityLevel::Moderate);
        p.goal_weight_kg = Some(70.0);
        assert_eq!(estimated_goal_date(&p, date(2025, 6, 1)), None);

        p.goal_weight_kg = Some(75.0);
        assert_eq!(estimated_goal_date(&p, date(2025, 6, 1)), None);

        p.goal_weight_kg = None;
        assert_eq!(estimated_goal_date(&p, date(2025, 6, 1)), None);
    }

    #[test]
    fn test_goal_date_young_active_male() {
        // rate = 0.6 * 1.0 * 1.1 = 0.66; ceil(6 / 0.66) = 10 weeks
        let mut p = profile(80.0, 180.0, 25, Gender::Male, ActivityLevel::Active);
        p.goal_weight_kg = Some(74.0);
        let today = date(2025, 6, 1);
        assert_eq!(
            estimated_goal_date(&p, today),
            Some(today + Duration::days(70))
        );
    }

    #[test]
    fn test_goal_date_age_brackets() {
        let mut p = profile(80.0, 170.0, 29, Gender::Female, ActivityLevel::Moderate);
        p.goal_weight_kg = Some(75.0);
        let today = date(2025, 6, 1);

        // under 30: rate 0.45, ceil(5/0.45) = 12 weeks
        assert_eq!(
            estimated_goal_date(&p, today),
            Some(today + Duration::weeks(12))
        );

        // 30-49: rate 0.405, ceil(5/0.405) = 13 weeks
        p.age_years = 40;
        assert_eq!(
            estimated_goal_date(&p, today),
            Some(today + Duration::weeks(13))
        );

        // 50+: rate 0.36, ceil(5/0.36) = 14 weeks
        p.age_years = 60;
        assert_eq!(
            estimated_goal_date(&p, today),
            Some(today + Duration::weeks(14))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: goal at or above current weight never yields a date
        #[test]
        fn prop_no_date_without_loss(
            weight in 40.0f64..150.0,
            extra in 0.0f64..50.0,
            age in 18i32..90,
        ) {
            let mut p = profile(weight, 170.0, age, Gender::Male, ActivityLevel::Moderate);
            p.goal_weight_kg = Some(weight + extra);
            prop_assert_eq!(estimated_goal_date(&p, date(2025, 1, 1)), None);
        }

        /// Property: more kg to lose never means an earlier date
        #[test]
        fn prop_goal_date_monotonic(
            goal in 50.0f64..80.0,
            lose1 in 1.0f64..20.0,
            lose2 in 20.0f64..60.0,
        ) {
            let today = date(2025, 1, 1);
            let mut near = profile(goal + lose1, 170.0, 35, Gender::Female, ActivityLevel::Active);
            near.goal_weight_kg = Some(goal);
            let mut far = profile(goal + lose2, 170.0, 35, Gender::Female, ActivityLevel::Active);
            far.goal_weight_kg = Some(goal);

            let d_near = estimated_goal_date(&near, today).unwrap();
            let d_far = estimated_goal_date(&far, today).unwrap();
            prop_assert!(d_far >= d_near);
        }
    }

    // =========================================================================
    // Daily Balance Tests
    // =========================================================================

    #[test]
    fn test_balance_series_basic() {
        let window = vec![
            DailyActivity {
                date: date(2025, 6, 1),
                calories_consumed: 2200.0,
                calories_burned: 300.0,
                water_ml: 1500,
            },
            DailyActivity {
                date: date(2025, 6, 2),
                calories_consumed: 1800.0,
                calories_burned: 0.0,
                water_ml: 2000,
            },
        ];
        let series = daily_balance_series(&window, 2000);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].balance, -100.0);
        assert_eq!(series[1].balance, -200.0);
        assert_eq!(series[0].date, date(2025, 6, 1));
    }

    #[test]
    fn test_window_fills_missing_days() {
        let end = date(2025, 6, 7);
        let entries = vec![
            DailyActivity {
                date: date(2025, 6, 4),
                calories_consumed: 1500.0,
                calories_burned: 200.0,
                water_ml: 1000,
            },
            DailyActivity {
                date: date(2025, 6, 7),
                calories_consumed: 2100.0,
                calories_burned: 0.0,
                water_ml: 500,
            },
        ];

        let window = assemble_daily_window(end, 7, &entries);
        assert_eq!(window.len(), 7);
        assert_eq!(window[0].date, date(2025, 6, 1));
        assert_eq!(window[6].date, end);

        // missing day is zero-filled, so its balance is -target
        let series = daily_balance_series(&window, 2000);
        assert_eq!(series[2].consumed, 0.0);
        assert_eq!(series[2].burned, 0.0);
        assert_eq!(series[2].balance, -2000.0);
        assert_eq!(series[3].balance, 1500.0 - 2000.0 - 200.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: output length equals input length and the balance sums
        /// decompose as sum(consumed) - n*target - sum(burned)
        #[test]
        fn prop_balance_length_and_sum(
            consumed in prop::collection::vec(0.0f64..6000.0, 0..20),
            target in 1200i32..4000,
        ) {
            let window: Vec<DailyActivity> = consumed
                .iter()
                .enumerate()
                .map(|(i, &c)| DailyActivity {
                    date: date(2025, 1, 1) + Duration::days(i as i64),
                    calories_consumed: c,
                    calories_burned: c / 10.0,
                    water_ml: 0,
                })
                .collect();

            let series = daily_balance_series(&window, target);
            prop_assert_eq!(series.len(), window.len());

            let sum_balance: f64 = series.iter().map(|b| b.balance).sum();
            let sum_consumed: f64 = window.iter().map(|d| d.calories_consumed).sum();
            let sum_burned: f64 = window.iter().map(|d| d.calories_burned).sum();
            let expected = sum_consumed - window.len() as f64 * target as f64 - sum_burned;
            prop_assert!((sum_balance - expected).abs() < 1e-6);
        }

        /// Property: the assembled window is dense and chronological
        #[test]
        fn prop_window_dense(days in 1usize..30) {
            let end = date(2025, 6, 15);
            let window = assemble_daily_window(end, days, &[]);
            prop_assert_eq!(window.len(), days);
            for pair in window.windows(2) {
                prop_assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
            }
            prop_assert_eq!(window.last().unwrap().date, end);
        }
    }

    // =========================================================================
    // Workout Estimate Tests
    // =========================================================================

    #[test]
    fn test_workout_estimate() {
        assert_eq!(
            estimate_workout_calories(WorkoutActivity::Running, WorkoutIntensity::Moderate, 30),
            300
        );
        assert_eq!(
            estimate_workout_calories(WorkoutActivity::Yoga, WorkoutIntensity::Low, 60),
            120
        );
        assert_eq!(
            estimate_workout_calories(WorkoutActivity::Walking, WorkoutIntensity::High, 0),
            0
        );
    }

    #[test]
    fn test_workout_estimate_intensity_ordering() {
        for activity in [
            WorkoutActivity::Walking,
            WorkoutActivity::Running,
            WorkoutActivity::Weights,
            WorkoutActivity::Boxing,
        ] {
            let low = estimate_workout_calories(activity, WorkoutIntensity::Low, 45);
            let moderate = estimate_workout_calories(activity, WorkoutIntensity::Moderate, 45);
            let high = estimate_workout_calories(activity, WorkoutIntensity::High, 45);
            assert!(low < moderate && moderate < high);
        }
    }

    // =========================================================================
    // Summary Tests
    // =========================================================================

    #[test]
    fn test_summarize_pulls_everything_together() {
        let mut p = profile(80.0, 180.0, 25, Gender::Male, ActivityLevel::Active);
        p.goal = DietGoal::Lose;
        p.goal_weight_kg = Some(74.0);
        let today = date(2025, 6, 1);
        let window = assemble_daily_window(today, 7, &[]);

        let summary = summarize(&p, &window, today);
        assert_eq!(summary.recommended_water_ml, 4300.0);
        assert_eq!(summary.target_calories, target_daily_calories(&p));
        assert_eq!(
            summary.estimated_goal_date,
            Some(today + Duration::days(70))
        );
        assert_eq!(summary.daily_balance.len(), 7);
        for day in &summary.daily_balance {
            assert_eq!(day.balance, -(summary.target_calories as f64));
        }
    }
}
