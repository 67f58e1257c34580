//! Domain models for the Vitalog application

use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal slot a food log belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(format!("Unknown meal type: {}", s)),
        }
    }
}

/// Workout activity kinds with a known exertion profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutActivity {
    Walking,
    Running,
    Cycling,
    Swimming,
    Yoga,
    Weights,
    Soccer,
    Hiking,
    Dancing,
    Boxing,
}

impl fmt::Display for WorkoutActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkoutActivity::Walking => "walking",
            WorkoutActivity::Running => "running",
            WorkoutActivity::Cycling => "cycling",
            WorkoutActivity::Swimming => "swimming",
            WorkoutActivity::Yoga => "yoga",
            WorkoutActivity::Weights => "weights",
            WorkoutActivity::Soccer => "soccer",
            WorkoutActivity::Hiking => "hiking",
            WorkoutActivity::Dancing => "dancing",
            WorkoutActivity::Boxing => "boxing",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for WorkoutActivity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "walking" => Ok(WorkoutActivity::Walking),
            "running" => Ok(WorkoutActivity::Running),
            "cycling" => Ok(WorkoutActivity::Cycling),
            "swimming" => Ok(WorkoutActivity::Swimming),
            "yoga" => Ok(WorkoutActivity::Yoga),
            "weights" => Ok(WorkoutActivity::Weights),
            "soccer" => Ok(WorkoutActivity::Soccer),
            "hiking" => Ok(WorkoutActivity::Hiking),
            "dancing" => Ok(WorkoutActivity::Dancing),
            "boxing" => Ok(WorkoutActivity::Boxing),
            _ => Err(format!("Unknown workout activity: {}", s)),
        }
    }
}

/// Workout intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutIntensity {
    Low,
    #[default]
    Moderate,
    High,
}

impl fmt::Display for WorkoutIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkoutIntensity::Low => "low",
            WorkoutIntensity::Moderate => "moderate",
            WorkoutIntensity::High => "high",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for WorkoutIntensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(WorkoutIntensity::Low),
            "moderate" => Ok(WorkoutIntensity::Moderate),
            "high" => Ok(WorkoutIntensity::High),
            _ => Err(format!("Unknown workout intensity: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_meal_type_round_trip() {
        for t in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            assert_eq!(MealType::from_str(&t.to_string()).unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_activity_rejected() {
        assert!(WorkoutActivity::from_str("parkour").is_err());
        assert!(WorkoutIntensity::from_str("extreme").is_err());
    }
}
