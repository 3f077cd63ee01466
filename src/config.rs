use std::env;

pub const DEFAULT_GOLD_API_BASE: &str = "https://www.goldapi.io/api";
pub const DEFAULT_EXCHANGE_RATE_API_BASE: &str = "https://v6.exchangerate-api.com/v6";

/// Runtime configuration, read once at startup. Provider credentials come
/// from the environment, never from source literals.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub gold_api_base: String,
    pub gold_api_key: String,
    pub exchange_rate_api_base: String,
    pub exchange_rate_api_key: String,
}

impl Config {
    /// Read configuration from the environment. Called once from `main`
    /// before the server starts; missing required variables abort startup.
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            gold_api_base: env::var("GOLD_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GOLD_API_BASE.to_string()),
            gold_api_key: env::var("GOLD_API_KEY").expect("GOLD_API_KEY must be set"),
            exchange_rate_api_base: env::var("EXCHANGE_RATE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_EXCHANGE_RATE_API_BASE.to_string()),
            exchange_rate_api_key: env::var("EXCHANGE_RATE_API_KEY")
                .expect("EXCHANGE_RATE_API_KEY must be set"),
        }
    }
}
