//! Axum-specific error types and mappings.
//!
//! Failures leave the adapter as `application/problem+json` bodies, except
//! `404 Not Found` which carries no body at all. Unexpected failures are
//! logged here with the operation that raised them; callers only ever see a
//! generic message.

use std::any::Any;
use std::fmt;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use clientes_core::{ClienteServiceError, ValidationErrors};
use serde::Serialize;
use thiserror::Error;

/// Media type of every error body.
pub const PROBLEM_JSON: &str = "application/problem+json";

/// The only detail a 500 response ever carries.
pub const INTERNAL_DETAIL: &str = "A problem occurred handling your request.";

const VALIDATION_TITLE: &str = "One or more validation errors occurred.";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be read (malformed JSON, bad query string).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Input was read but failed validation.
    ///
    /// 400 for a create body, 422 for the result of a patch.
    #[error("{errors}")]
    Validation {
        status: StatusCode,
        errors: ValidationErrors,
    },

    /// Resource not found.
    #[error("Not found")]
    NotFound,

    /// Internal server error. Details are logged, never returned.
    #[error("Internal error")]
    Internal,
}

impl HttpError {
    /// Map a service failure at the handler boundary.
    ///
    /// `invalid` is the status used for validation failures. Repository
    /// failures are logged with `operation` and the request `params`.
    pub fn from_service(
        err: ClienteServiceError,
        invalid: StatusCode,
        operation: &'static str,
        params: &dyn fmt::Debug,
    ) -> Self {
        match err {
            ClienteServiceError::Validation(errors) => Self::Validation {
                status: invalid,
                errors,
            },
            ClienteServiceError::NotFound(_) => Self::NotFound,
            ClienteServiceError::Repository(e) => {
                tracing::error!(operation, params = ?params, error = %e, "request failed");
                Self::Internal
            }
        }
    }

    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation { status, .. } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Problem details body (RFC 9457).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl ProblemDetails {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            problem_type: type_uri(status),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            errors: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// Reference for each status we emit.
const fn type_uri(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "https://tools.ietf.org/html/rfc9110#section-15.5.1",
        404 => "https://tools.ietf.org/html/rfc9110#section-15.5.5",
        422 => "https://tools.ietf.org/html/rfc9110#section-15.5.21",
        _ => "https://tools.ietf.org/html/rfc9110#section-15.6.1",
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON))],
            Json(self),
        )
            .into_response()
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound => status.into_response(),
            Self::BadRequest(detail) => ProblemDetails::new(status, "Bad Request")
                .with_detail(detail)
                .into_response(),
            Self::Validation { errors, .. } => ProblemDetails::new(status, VALIDATION_TITLE)
                .with_errors(errors)
                .into_response(),
            Self::Internal => {
                ProblemDetails::new(status, "An error occurred while processing your request.")
                    .with_detail(INTERNAL_DETAIL)
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Response for a handler that panicked.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    tracing::error!(panic = message, "request handler panicked");
    HttpError::Internal.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use clientes_core::RepositoryError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn content_type(response: &Response) -> Option<&str> {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn validation_errors_become_problem_details() {
        let mut errors = ValidationErrors::new();
        errors.add("nombre", "The nombre field is required.");

        let response = HttpError::Validation {
            status: StatusCode::BAD_REQUEST,
            errors,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(content_type(&response), Some(PROBLEM_JSON));
        let body = body_json(response).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], VALIDATION_TITLE);
        assert_eq!(body["errors"]["nombre"][0], "The nombre field is required.");
        assert!(body.get("detail").is_none());
    }

    #[tokio::test]
    async fn not_found_has_no_body() {
        let response = HttpError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn repository_failures_hide_their_cause() {
        let err = HttpError::from_service(
            ClienteServiceError::Repository(RepositoryError::Storage("disk full".into())),
            StatusCode::BAD_REQUEST,
            "create_cliente",
            &"params",
        );
        assert!(matches!(err, HttpError::Internal));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"], INTERNAL_DETAIL);
        assert!(!body.to_string().contains("disk full"));
    }

    #[test]
    fn validation_status_is_chosen_by_the_caller() {
        let err = HttpError::from_service(
            ClienteServiceError::Validation(ValidationErrors::new()),
            StatusCode::UNPROCESSABLE_ENTITY,
            "patch_cliente",
            &(),
        );
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn panics_become_generic_500s() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type(&response), Some(PROBLEM_JSON));
    }
}
