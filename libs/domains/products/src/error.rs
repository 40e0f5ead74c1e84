use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id {0} already exists")]
    AlreadyExists(String),

    #[error("Product with id {0} not found!")]
    NotFound(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Both domain failures are client errors: a missing id is reported as
/// 400 Bad Request, not 404, matching the duplicate-id case.
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::AlreadyExists(_) | ProductError::NotFound(_) => {
                AppError::BadRequest(err.to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
