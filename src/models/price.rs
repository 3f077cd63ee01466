use serde::{Deserialize, Serialize};

/// Request body for POST /prices/, echoed back verbatim on success.
///
/// Validation is structural only (field presence and types); price range
/// and currency-code format are deliberately unchecked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    pub metal: String,
    pub price: f64,
    pub currency: String,
}

/// Response body for GET /prices/{metal}/{currency}/{date}.
///
/// `metal` keeps the caller's original path segment; `price`, `currency`
/// and `date` are whatever the quote provider returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalQuote {
    pub metal: String,
    pub price: f64,
    pub currency: String,
    pub date: String,
}

/// Response body for GET /convert/{amount}/{from_currency}/{to_currency}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    pub amount: f64,
    pub currency: String,
}
