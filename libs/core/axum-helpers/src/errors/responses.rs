//! OpenAPI response descriptions for the error envelopes.

use crate::response::StatusBody;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Invalid parameter",
    content_type = "application/json",
    example = json!({ "code": 40001, "message": "invalid parameter" })
)]
pub struct InvalidParamResponse(pub StatusBody);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "code": 40400, "message": "resource not found" })
)]
pub struct NotFoundResponse(pub StatusBody);

#[derive(ToResponse)]
#[response(
    description = "Internal server error",
    content_type = "application/json",
    example = json!({ "code": 50000, "message": "internal server error" })
)]
pub struct InternalErrorResponse(pub StatusBody);
