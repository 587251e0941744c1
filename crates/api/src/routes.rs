use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/lookup", post(handlers::lookup))
        .route("/invoke", post(handlers::invoke))
        .with_state(state)
}
