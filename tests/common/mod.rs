use metals_backend::AppState;
use metals_backend::services::{exchange_rate::ExchangeRateService, gold_api::GoldApiService};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

pub const TEST_GOLD_API_KEY: &str = "test-gold-key";
pub const TEST_EXCHANGE_RATE_API_KEY: &str = "test-rate-key";

/// Database handle for tests that never touch storage.
#[allow(dead_code)]
pub fn mock_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

/// Build an AppState whose upstream clients point at mock servers.
pub fn test_state(db: DatabaseConnection, gold_base: &str, rate_base: &str) -> AppState {
    AppState {
        db: std::sync::Arc::new(db),
        gold_api: GoldApiService::new(TEST_GOLD_API_KEY.to_string(), gold_base.to_string()),
        exchange_rate: ExchangeRateService::new(
            TEST_EXCHANGE_RATE_API_KEY.to_string(),
            rate_base.to_string(),
        ),
    }
}
