//! Reusable OpenAPI response types for consistent API documentation.

use super::ApiMessage;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - the referenced resource is missing or already exists",
    content_type = "application/json",
    example = json!({
        "status": "BAD_REQUEST",
        "timestamp": "16-10-2026 02:41:07",
        "message": "Product with id CLN-CDE-BOOK already exists"
    })
)]
pub struct BadRequestResponse(pub ApiMessage);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "status": "BAD_REQUEST",
        "timestamp": "16-10-2026 02:41:07",
        "message": "Request validation failed: value: price must not be negative"
    })
)]
pub struct BadRequestValidationResponse(pub ApiMessage);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": "INTERNAL_SERVER_ERROR",
        "timestamp": "16-10-2026 02:41:07",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ApiMessage);
