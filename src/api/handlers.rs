use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{ClothingItem, Occasion, Outfit, Weather};
use crate::services::generate_outfits;

use super::AppState;

/// Shown to the user when the filters leave nothing to combine
pub const NO_OUTFITS_MESSAGE: &str = "No outfits could be generated with the current filters.";

// Request/Response types

/// Query parameters for outfit recommendations.
/// Labels are kept as sent; unknown ones fall back when converted.
#[derive(Debug, Deserialize)]
pub struct OutfitQuery {
    #[serde(default = "default_occasion")]
    pub occasion: String,
    #[serde(default = "default_weather")]
    pub weather: String,
    #[serde(default = "default_n_outfits")]
    pub n_outfits: i64,
}

fn default_occasion() -> String {
    Occasion::default().label().to_string()
}

fn default_weather() -> String {
    Weather::default().label().to_string()
}

fn default_n_outfits() -> i64 {
    3
}

#[derive(Debug, Serialize)]
pub struct OutfitsResponse {
    /// Occasion label as requested
    pub occasion: String,
    /// Weather label as requested
    pub weather: String,
    pub outfits: Vec<Outfit>,
    /// Set when `outfits` is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Reads the wardrobe off the async workers, since sources may touch disk
async fn load_wardrobe(state: &AppState) -> AppResult<Vec<ClothingItem>> {
    let wardrobe = state.wardrobe.clone();
    let items = tokio::task::spawn_blocking(move || wardrobe.load())
        .await
        .map_err(|e| AppError::Internal(format!("Wardrobe load task failed: {}", e)))??;
    Ok(items)
}

/// Get the whole wardrobe table
pub async fn get_wardrobe(State(state): State<AppState>) -> AppResult<Json<Vec<ClothingItem>>> {
    let items = load_wardrobe(&state).await?;
    Ok(Json(items))
}

/// Recommend outfits for an occasion and weather
pub async fn recommend_outfits(
    State(state): State<AppState>,
    query: Result<Query<OutfitQuery>, QueryRejection>,
) -> AppResult<Json<OutfitsResponse>> {
    let Query(query) = query.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    tracing::info!(
        occasion = %query.occasion,
        weather = %query.weather,
        n_outfits = query.n_outfits,
        "Processing outfit request"
    );

    let occasion = Occasion::from(query.occasion.as_str());
    if occasion == Occasion::Any {
        tracing::warn!(
            occasion = %query.occasion,
            "Unrecognized occasion, allowing all formality levels"
        );
    }
    let weather = Weather::from(query.weather.as_str());

    let items = load_wardrobe(&state).await?;
    let outfits = generate_outfits(&items, occasion, weather, query.n_outfits);

    let message = outfits.is_empty().then(|| NO_OUTFITS_MESSAGE.to_string());

    Ok(Json(OutfitsResponse {
        occasion: query.occasion,
        weather: query.weather,
        outfits,
        message,
    }))
}
