use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;

use wardrobe_api::api::{create_router, AppState};
use wardrobe_api::services::{CsvWardrobe, FormalityPolicy};

const SAMPLE_WARDROBE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/clothes.csv");

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn create_test_server(path: &str, policy: FormalityPolicy) -> TestServer {
    let state = AppState::new(Arc::new(CsvWardrobe::new(path, policy)));
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn outfit_names(body: &Value) -> Vec<Vec<String>> {
    body["outfits"]
        .as_array()
        .unwrap()
        .iter()
        .map(|outfit| {
            outfit["items"]
                .as_array()
                .unwrap()
                .iter()
                .map(|item| item["name"].as_str().unwrap().to_string())
                .collect()
        })
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(SAMPLE_WARDROBE, FormalityPolicy::Permissive);
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_get_wardrobe() {
    let server = create_test_server(SAMPLE_WARDROBE, FormalityPolicy::Permissive);

    let response = server.get("/wardrobe").await;
    response.assert_status_ok();

    let items: Vec<Value> = response.json();
    assert_eq!(items.len(), 15);
    assert_eq!(items[0]["name"], "White oxford shirt");
    assert_eq!(items[0]["category"], "top");
    assert_eq!(items[0]["formality"], "medium");
    assert_eq!(items[0]["notes"], "Goes with almost anything");
    assert!(items[1]["notes"].is_null());
}

#[tokio::test]
async fn test_casual_mild_outfits() {
    let server = create_test_server(SAMPLE_WARDROBE, FormalityPolicy::Permissive);

    let response = server
        .get("/outfits")
        .add_query_param("occasion", "Casual")
        .add_query_param("weather", "Mild")
        .add_query_param("n_outfits", 3)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    // The dress scores 0 and outranks every colored pair
    assert_eq!(
        outfit_names(&body),
        vec![
            vec!["Yellow sundress".to_string()],
            vec!["White oxford shirt".to_string(), "Beige shorts".to_string()],
            vec!["Blue linen shirt".to_string(), "Grey wool skirt".to_string()],
        ]
    );

    let scores: Vec<f64> = body["outfits"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["score"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_cold_weather_adds_outerwear() {
    let server = create_test_server(SAMPLE_WARDROBE, FormalityPolicy::Permissive);

    let response = server
        .get("/outfits")
        .add_query_param("occasion", "Casual")
        .add_query_param("weather", "Cold")
        .add_query_param("n_outfits", 3)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let outfits = outfit_names(&body);
    assert_eq!(outfits.len(), 3);
    assert!(outfits.iter().all(|items| items.len() == 3));
    assert_eq!(outfits[0][2], "Grey hoodie");
    assert_eq!(outfits[1][2], "Grey hoodie");
    assert_eq!(
        outfits[2],
        vec![
            "Black graphic tee".to_string(),
            "Navy chinos".to_string(),
            "Navy peacoat".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_formal_hot_returns_available_candidates_only() {
    let server = create_test_server(SAMPLE_WARDROBE, FormalityPolicy::Permissive);

    let response = server
        .get("/outfits")
        .add_query_param("occasion", "Formal")
        .add_query_param("weather", "Hot")
        .add_query_param("n_outfits", 5)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        outfit_names(&body),
        vec![
            vec!["Black midi dress".to_string()],
            vec![
                "Pink silk blouse".to_string(),
                "Black tailored trousers".to_string()
            ],
        ]
    );
}

#[tokio::test]
async fn test_zero_count_still_returns_one_outfit() {
    let server = create_test_server(SAMPLE_WARDROBE, FormalityPolicy::Permissive);

    let response = server
        .get("/outfits")
        .add_query_param("n_outfits", 0)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["outfits"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_file_is_load_error() {
    let server = create_test_server(&fixture("nope.csv"), FormalityPolicy::Permissive);

    let response = server.get("/outfits").await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to load wardrobe"));
}

#[tokio::test]
async fn test_missing_column_is_load_error() {
    let server = create_test_server(&fixture("missing_column.csv"), FormalityPolicy::Permissive);

    let response = server.get("/wardrobe").await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("'color'"));
}

#[tokio::test]
async fn test_unknown_formality_is_tolerated_by_default() {
    let server = create_test_server(&fixture("odd_formality.csv"), FormalityPolicy::Permissive);

    let response = server
        .get("/outfits")
        .add_query_param("occasion", "Beach party")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["occasion"], "Beach party");
    assert_eq!(
        outfit_names(&body),
        vec![vec!["White tee".to_string(), "Navy chinos".to_string()]]
    );
}

#[tokio::test]
async fn test_unknown_formality_fails_in_strict_mode() {
    let server = create_test_server(&fixture("odd_formality.csv"), FormalityPolicy::Strict);

    let response = server.get("/outfits").await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Row 2"));
}
