use axum::{
    Json,
    extract::{Path, State},
};

use crate::AppState;
use crate::error::ApiError;
use crate::models::price::ConversionResult;
use crate::services::conversion::convert;

/// Handler for GET /convert/{amount}/{from_currency}/{to_currency}
///
/// Fetches a fresh rate table on every call. Currency codes are matched
/// against the table as given, without case folding.
pub async fn convert_currency(
    State(state): State<AppState>,
    Path((amount, from_currency, to_currency)): Path<(f64, String, String)>,
) -> Result<Json<ConversionResult>, ApiError> {
    let rates = state.exchange_rate.fetch_rates().await?;

    let converted =
        convert(amount, &rates, &from_currency, &to_currency).ok_or(ApiError::UnknownCurrency)?;

    Ok(Json(ConversionResult {
        amount: converted,
        currency: to_currency,
    }))
}
