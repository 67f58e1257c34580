//! Integration tests for water tracking endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_day_summary_without_profile_uses_default_goal() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, response) = app
        .get_auth("/api/v1/water?date=2025-06-01", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let day: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(day["goal_ml"], 2500);
    assert_eq!(day["total_ml"], 0);
    assert_eq!(day["records"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_day_goal_is_personalized_with_profile() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    // 90 kg active 45-year-old male: 3000 + 500 + 900 = 4400 ml
    let profile = json!({
        "weight_kg": 90.0, "height_cm": 180.0, "age_years": 45,
        "gender": "male", "activity_level": "active"
    });
    app.put_auth("/api/v1/profile", &profile.to_string(), &user.access_token)
        .await;

    let (status, response) = app
        .get_auth("/api/v1/water?date=2025-06-01", &user.access_token)
        .await;

    assert_eq!(status, StatusCode::OK);
    let day: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(day["goal_ml"], 4400);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_pours_accumulate_into_the_day_total() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    for amount in [250, 500, 250] {
        let body = json!({ "date": "2025-06-02", "amount_ml": amount });
        let (status, _) = app
            .post_auth("/api/v1/water", &body.to_string(), &user.access_token)
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, response) = app
        .get_auth("/api/v1/water?date=2025-06-02", &user.access_token)
        .await;
    let day: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(day["total_ml"], 1000);
    assert_eq!(day["records"].as_array().unwrap().len(), 3);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_invalid_amount_rejected() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    for amount in [0, -100, 6000] {
        let body = json!({ "date": "2025-06-03", "amount_ml": amount });
        let (status, _) = app
            .post_auth("/api/v1/water", &body.to_string(), &user.access_token)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_history_newest_first() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    for date in ["2025-06-01", "2025-06-03", "2025-06-02"] {
        let body = json!({ "date": date, "amount_ml": 250 });
        app.post_auth("/api/v1/water", &body.to_string(), &user.access_token)
            .await;
    }

    let (status, response) = app
        .get_auth("/api/v1/water/history", &user.access_token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let days: serde_json::Value = serde_json::from_str(&response).unwrap();
    let dates: Vec<&str> = days
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-06-03", "2025-06-02", "2025-06-01"]);
}
