//! Input validation functions
//!
//! Range checks applied at the API boundary before anything reaches the
//! repositories or the metrics engine.

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a daily weight entry (in kg)
pub fn validate_weight_entry(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if !(30.0..=300.0).contains(&weight_kg) {
        return Err("Weight must be between 30 and 300 kg".to_string());
    }
    Ok(())
}

/// Validate a profile weight (in kg); wider than the daily-entry range
pub fn validate_profile_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if !(20.0..=500.0).contains(&weight_kg) {
        return Err("Weight must be between 20 and 500 kg".to_string());
    }
    Ok(())
}

/// Validate height (in cm)
pub fn validate_height(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if !(80.0..=260.0).contains(&height_cm) {
        return Err("Height must be between 80 and 260 cm".to_string());
    }
    Ok(())
}

/// Validate age (in years)
pub fn validate_age(age_years: i32) -> Result<(), String> {
    if !(1..=130).contains(&age_years) {
        return Err("Age must be between 1 and 130".to_string());
    }
    Ok(())
}

/// Validate a single water pour (in ml)
pub fn validate_water_amount(amount_ml: i32) -> Result<(), String> {
    if amount_ml <= 0 {
        return Err("Amount must be greater than 0".to_string());
    }
    if amount_ml > 5000 {
        return Err("Amount cannot exceed 5000 ml".to_string());
    }
    Ok(())
}

/// Validate workout duration (in minutes)
pub fn validate_duration(duration_min: i32) -> Result<(), String> {
    if duration_min <= 0 {
        return Err("Duration must be greater than 0".to_string());
    }
    if duration_min > 24 * 60 {
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate grams of a meal item
pub fn validate_grams(grams: f64) -> Result<(), String> {
    if grams.is_nan() || grams.is_infinite() {
        return Err("Grams must be a valid number".to_string());
    }
    if grams <= 0.0 {
        return Err("Grams must be greater than 0".to_string());
    }
    if grams > 5000.0 {
        return Err("Grams cannot exceed 5000".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("a@b.co", true)]
    #[case("", false)]
    #[case("not-an-email", false)]
    #[case("user@host", false)]
    fn test_email(#[case] email: &str, #[case] ok: bool) {
        assert_eq!(validate_email(email).is_ok(), ok);
    }

    #[rstest]
    #[case(29.9, false)]
    #[case(30.0, true)]
    #[case(150.0, true)]
    #[case(300.0, true)]
    #[case(300.1, false)]
    fn test_weight_entry_bounds(#[case] kg: f64, #[case] ok: bool) {
        assert_eq!(validate_weight_entry(kg).is_ok(), ok);
    }

    #[test]
    fn test_weight_rejects_nan() {
        assert!(validate_weight_entry(f64::NAN).is_err());
        assert!(validate_profile_weight(f64::INFINITY).is_err());
    }

    #[rstest]
    #[case(0, false)]
    #[case(-250, false)]
    #[case(250, true)]
    #[case(5000, true)]
    #[case(5001, false)]
    fn test_water_amount(#[case] ml: i32, #[case] ok: bool) {
        assert_eq!(validate_water_amount(ml).is_ok(), ok);
    }
}
