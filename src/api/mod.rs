pub mod cutter;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Cutter numbers
        .route("/cutter/resolve", post(cutter::resolve_name))
        .route("/cutter/classify", post(cutter::classify))
        .route("/cutter/year/:year", get(cutter::year_code))
        .route("/cutter/categories", get(cutter::list_categories))
        .with_state(state)
}
