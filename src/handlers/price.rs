use axum::{Json, extract::State};

use crate::AppState;
use crate::error::ApiError;
use crate::models::price::PriceRecord;
use crate::services::price_store;

/// Handler for POST /prices/
///
/// The body is validated structurally by the JSON extractor; malformed
/// bodies are rejected by the framework before this runs. The stored
/// record is echoed back.
pub async fn add_price(
    State(state): State<AppState>,
    Json(payload): Json<PriceRecord>,
) -> Result<Json<PriceRecord>, ApiError> {
    let stored = price_store::insert_price(&state.db, &payload).await?;

    Ok(Json(PriceRecord {
        metal: stored.metal,
        price: stored.price,
        currency: stored.currency,
    }))
}
