//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Malformed bodies reject with [`AppError::JsonExtractorRejection`] (axum's
/// status is kept), failed `Validate` rules with [`AppError::ValidationError`].
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
///
/// async fn create(ValidatedJson(payload): ValidatedJson<NewThing>) -> String {
///     payload.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, response::IntoResponse};
    use serde::Deserialize;
    use validator::ValidationError;

    #[derive(Debug, Deserialize, Validate)]
    struct Amount {
        #[validate(custom(function = "non_negative"))]
        value: i64,
    }

    fn non_negative(value: i64) -> Result<(), ValidationError> {
        if value < 0 {
            return Err(ValidationError::new("negative"));
        }
        Ok(())
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let ValidatedJson(amount) = ValidatedJson::<Amount>::from_request(json_request(r#"{"value": 3}"#), &())
            .await
            .unwrap();
        assert_eq!(amount.value, 3);
    }

    #[tokio::test]
    async fn test_rejects_failed_rule_with_400() {
        let err = ValidatedJson::<Amount>::from_request(json_request(r#"{"value": -1}"#), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        let err = ValidatedJson::<Amount>::from_request(json_request("{not json"), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::JsonExtractorRejection(_)));
        assert!(err.status().is_client_error());
    }
}
