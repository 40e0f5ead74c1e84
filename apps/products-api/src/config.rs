//! Configuration for Products API

use axum_helpers::http::{create_cors_layer, create_permissive_cors_layer, create_same_origin_layer};
use core_config::{app_info, env_optional, server::ServerConfig, AppInfo, FromEnv};
use std::io;
use std::path::PathBuf;
use tower_http::cors::CorsLayer;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// JSON catalog loaded at startup; `None` uses the embedded catalog
    pub seed_path: Option<PathBuf>,
    /// Comma-separated origins from `CORS_ALLOWED_ORIGIN`
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            seed_path: env_optional("PRODUCTS_SEED_PATH").map(PathBuf::from),
            cors_allowed_origin: env_optional("CORS_ALLOWED_ORIGIN"),
        })
    }

    /// Explicit origins win; otherwise development allows any origin and
    /// production allows none.
    pub fn cors_layer(&self) -> io::Result<CorsLayer> {
        match (&self.cors_allowed_origin, &self.environment) {
            (Some(origins), _) => create_cors_layer(origins),
            (None, Environment::Development) => Ok(create_permissive_cors_layer()),
            (None, Environment::Production) => Ok(create_same_origin_layer()),
        }
    }
}
