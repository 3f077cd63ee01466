// src/lib.rs

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use services::{exchange_rate::ExchangeRateService, gold_api::GoldApiService};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub gold_api: GoldApiService,
    pub exchange_rate: ExchangeRateService,
}

pub mod entities {
    pub mod prelude;
    pub mod prices;
}

pub mod services {
    pub mod conversion;
    pub mod exchange_rate;
    pub mod gold_api;
    pub mod price_store;
}

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

/// Build the application router. `main` and the integration tests share
/// this so both exercise the same routing table.
///
/// The date-less quote routes (with and without trailing slash) request
/// the latest quote. Anything that matches no API route falls through to
/// the static file directory.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/prices/{metal}/{currency}",
            get(handlers::quote::get_metal_price_latest),
        )
        .route(
            "/prices/{metal}/{currency}/",
            get(handlers::quote::get_metal_price_latest),
        )
        .route(
            "/prices/{metal}/{currency}/{date}",
            get(handlers::quote::get_metal_price),
        )
        .route(
            "/convert/{amount}/{from_currency}/{to_currency}",
            get(handlers::convert::convert_currency),
        )
        .route("/prices/", post(handlers::price::add_price))
        .fallback_service(ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
