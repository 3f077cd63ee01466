use axum::{
    Json,
    extract::{Path, State},
};

use crate::AppState;
use crate::error::ApiError;
use crate::models::price::MetalQuote;

/// Handler for GET /prices/{metal}/{currency}/{date}
pub async fn get_metal_price(
    State(state): State<AppState>,
    Path((metal, currency, date)): Path<(String, String, String)>,
) -> Result<Json<MetalQuote>, ApiError> {
    fetch_quote(state, metal, currency, date).await
}

/// Handler for the date-less quote routes; requests the latest quote.
pub async fn get_metal_price_latest(
    State(state): State<AppState>,
    Path((metal, currency)): Path<(String, String)>,
) -> Result<Json<MetalQuote>, ApiError> {
    fetch_quote(state, metal, currency, String::new()).await
}

async fn fetch_quote(
    state: AppState,
    metal: String,
    currency: String,
    date: String,
) -> Result<Json<MetalQuote>, ApiError> {
    let symbol = metal.to_uppercase();
    let currency_symbol = currency.to_uppercase();

    let quote = state
        .gold_api
        .fetch_spot(&symbol, &currency_symbol, &date)
        .await?;

    // `metal` keeps the caller's segment as given; price, currency and
    // date come from the provider.
    Ok(Json(MetalQuote {
        metal,
        price: quote.price,
        currency: quote.currency,
        date: quote.date,
    }))
}
