//! Integration tests for the dashboard endpoint

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_dashboard_requires_auth() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/dashboard").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_dashboard_without_profile_falls_back_to_defaults() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, response) = app.get_auth("/api/v1/dashboard", &user.access_token).await;
    assert_eq!(status, StatusCode::OK);

    let dashboard: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(dashboard.get("profile").is_none() || dashboard["profile"].is_null());
    assert_eq!(dashboard["today"]["water_goal_ml"], 2500);
    assert_eq!(dashboard["balance"].as_array().unwrap().len(), 7);
    // Nothing logged, so every day's balance is -default_target
    assert!(dashboard["balance"]
        .as_array()
        .unwrap()
        .iter()
        .all(|b| b["balance"] == -2000.0));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_dashboard_with_profile_has_targets_and_goal_date() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let profile = json!({
        "weight_kg": 80.0, "height_cm": 180.0, "age_years": 25,
        "gender": "male", "activity_level": "active",
        "goal": "lose", "goal_weight_kg": 74.0
    });
    app.put_auth("/api/v1/profile", &profile.to_string(), &user.access_token)
        .await;

    let (status, response) = app.get_auth("/api/v1/dashboard", &user.access_token).await;
    assert_eq!(status, StatusCode::OK);

    let dashboard: serde_json::Value = serde_json::from_str(&response).unwrap();
    let profile = &dashboard["profile"];
    assert_eq!(profile["weight_kg"], 80.0);
    assert_eq!(profile["goal"], "lose");
    // 0.6 kg/week * 1.1 activity adjustment over 6 kg = 10 weeks out
    let expected = (Utc::now().date_naive() + chrono::Duration::days(70))
        .format("%Y-%m-%d")
        .to_string();
    assert_eq!(profile["estimated_goal_date"], expected);
    assert!(profile["target_calories"].as_i64().unwrap() > 1500);
    // Hydration: 3000 + 500 + 800
    assert_eq!(dashboard["today"]["water_goal_ml"], 4300);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_dashboard_balance_reflects_todays_logs() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();

    // Log a workout burning a known amount (30 min moderate running = 300)
    let workout = json!({
        "date": today, "duration_min": 30,
        "activity": "running", "intensity": "moderate"
    });
    let (status, _) = app
        .post_auth("/api/v1/workout", &workout.to_string(), &user.access_token)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // And some water
    let water = json!({ "date": today, "amount_ml": 750 });
    app.post_auth("/api/v1/water", &water.to_string(), &user.access_token)
        .await;

    let (_, response) = app.get_auth("/api/v1/dashboard", &user.access_token).await;
    let dashboard: serde_json::Value = serde_json::from_str(&response).unwrap();

    assert_eq!(dashboard["today"]["calories_burned"], 300.0);
    assert_eq!(dashboard["today"]["water_consumed_ml"], 750);

    // Today is the last entry of the oldest-first window
    let balance = dashboard["balance"].as_array().unwrap();
    assert_eq!(balance.len(), 7);
    let today_balance = &balance[6];
    assert_eq!(today_balance["date"].as_str().unwrap(), today);
    assert_eq!(today_balance["burned"], 300.0);
    // balance = 0 consumed - 2000 default target - 300 burned
    assert_eq!(today_balance["balance"], -2300.0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_dashboard_goal_date_null_when_goal_reached() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let profile = json!({
        "weight_kg": 70.0, "height_cm": 170.0, "age_years": 30,
        "gender": "female", "activity_level": "moderate",
        "goal": "maintain", "goal_weight_kg": 70.0
    });
    app.put_auth("/api/v1/profile", &profile.to_string(), &user.access_token)
        .await;

    let (_, response) = app.get_auth("/api/v1/dashboard", &user.access_token).await;
    let dashboard: serde_json::Value = serde_json::from_str(&response).unwrap();

    // current == goal, so no estimate (field omitted)
    assert!(dashboard["profile"].get("estimated_goal_date").is_none()
        || dashboard["profile"]["estimated_goal_date"].is_null());
}
