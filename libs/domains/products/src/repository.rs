use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Storage interface for products.
///
/// Lookups answer with `Option`/empty collections; only mutations fail.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, in insertion order
    async fn find_all(&self) -> Vec<Product>;

    /// Products whose type label matches `label`, ignoring case
    async fn find_by_type(&self, label: &str) -> Vec<Product>;

    /// Product with exactly this id
    async fn find_by_id(&self, id: &str) -> Option<Product>;

    /// Append a product; fails if the id is taken
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Remove the product with this id; fails if there is none
    async fn delete(&self, id: &str) -> ProductResult<()>;

    /// Number of stored products
    async fn count(&self) -> usize;
}

/// In-memory implementation of ProductRepository.
///
/// A single lock guards the whole collection, so the existence check and the
/// mutation in `save`/`delete` happen under one write guard.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `products`.
    ///
    /// Fails on the first repeated id so the uniqueness invariant holds from the start.
    pub fn with_products(products: Vec<Product>) -> ProductResult<Self> {
        let mut seeded: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if seeded.iter().any(|p| p.id == product.id) {
                return Err(ProductError::AlreadyExists(product.id));
            }
            seeded.push(product);
        }

        Ok(Self {
            products: Arc::new(RwLock::new(seeded)),
        })
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    async fn find_by_type(&self, label: &str) -> Vec<Product> {
        let products = self.products.read().await;
        products
            .iter()
            .filter(|p| p.product_type.matches_label(label))
            .cloned()
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> Option<Product> {
        let products = self.products.read().await;
        products.iter().find(|p| p.id == id).cloned()
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if products.iter().any(|p| p.id == product.id) {
            return Err(ProductError::AlreadyExists(product.id));
        }

        products.push(product.clone());

        tracing::info!(product_id = %product.id, product_type = %product.product_type, "Saved product");
        Ok(product)
    }

    async fn delete(&self, id: &str) -> ProductResult<()> {
        let mut products = self.products.write().await;

        let position = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ProductError::NotFound(id.to_string()))?;
        products.remove(position);

        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn count(&self) -> usize {
        self.products.read().await.len()
    }
}
