//! Initial catalog loaded once at startup.

use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::error::ProductError;
use crate::models::Product;
use crate::repository::InMemoryProductRepository;

/// Catalog compiled into the crate, used when no seed file is configured.
pub const EMBEDDED_CATALOG: &str = include_str!("../data/products.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Seed data is not a valid product list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed product {id} is invalid: {source}")]
    Invalid {
        id: String,
        source: ValidationErrors,
    },

    #[error("Seed data rejected: {0}")]
    Duplicate(#[from] ProductError),
}

/// Parse and validate a JSON array of products.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, SeedError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    for product in &products {
        product.validate().map_err(|source| SeedError::Invalid {
            id: product.id.clone(),
            source,
        })?;
    }
    Ok(products)
}

/// Read the catalog from `path`, or the embedded one when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<Product>, SeedError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_catalog(&json)
        }
        None => parse_catalog(EMBEDDED_CATALOG),
    }
}

/// Build the startup store from the configured catalog.
pub fn seeded_repository(path: Option<&Path>) -> Result<InMemoryProductRepository, SeedError> {
    let products = load_catalog(path)?;
    let count = products.len();
    let repository = InMemoryProductRepository::with_products(products)?;

    tracing::info!(
        products = count,
        source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Seeded product store"
    );
    Ok(repository)
}
