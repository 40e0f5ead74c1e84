//! Product Service - the seam between handlers and the store

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Product operations exposed to the HTTP layer.
///
/// The store answers lookups with `Option`; this is the one place where a
/// missing id becomes [`ProductError::NotFound`].
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products, or those whose type label matches `by_type` when one is given
    #[instrument(skip(self))]
    pub async fn list_products(&self, by_type: Option<&str>) -> Vec<Product> {
        match by_type {
            Some(label) => self.repository.find_by_type(label).await,
            None => self.repository.find_all().await,
        }
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn create_product(&self, product: Product) -> ProductResult<Product> {
        self.repository.save(product).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        self.repository.delete(id).await
    }

    pub async fn count_products(&self) -> usize {
        self.repository.count().await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
