//! API routes module

pub mod products;
pub mod ready;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .merge(ready::router(state.clone()))
}
