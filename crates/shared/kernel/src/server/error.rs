use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vhub_derive::api_model;

use super::ApiStateError;
use crate::security::session::GuardError;

/// JSON body returned for every failed request.
#[api_model]
pub struct ErrorBody {
    pub error: String,
}

/// A uniform HTTP error: a status code plus a JSON `{ "error": ... }` body.
///
/// Feature slices convert their domain errors into this type at the route
/// layer, so handlers can use `?` end to end.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into() }
    }

    #[must_use]
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self { status: StatusCode::UNPROCESSABLE_ENTITY, message: message.into() }
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into() }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "Request failed");
        } else {
            tracing::debug!(status = %self.status, message = %self.message, "Request rejected");
        }
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

impl From<ApiStateError> for ApiError {
    fn from(err: ApiStateError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<GuardError> for ApiError {
    fn from(err: GuardError) -> Self {
        Self::bad_request(err.to_string())
    }
}
