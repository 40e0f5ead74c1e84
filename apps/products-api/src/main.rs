//! Products API - REST server over an in-memory catalog

use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::seed;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Full application router: domain routes, docs, middleware, health and readiness.
fn build_app(state: &AppState) -> eyre::Result<Router> {
    let cors = state.config.cors_layer()?;
    let router = create_router::<openapi::ApiDoc>(api::routes(state), cors);
    Ok(router.merge(health_router(state.config.app)))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let repository = seed::seeded_repository(config.seed_path.as_deref())?;
    let state = AppState::new(config, repository);
    let app = build_app(&state)?;

    info!(
        "Starting Products API on {} with {} products",
        state.config.server,
        state.products.count_products().await
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
