//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers return it directly. The mapping is the outcome table of the API
//! contract: validation failures become a 422 with the full violation list,
//! missing rows become an empty-bodied 404, and storage failures become a
//! redacted 500.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{Error, FieldViolation};

/// Body shape of every 422 response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorBody {
    /// One entry per violated rule; all violations, not just the first.
    pub validation_errors: Vec<FieldViolation>,
}

/// Body shape of every 500 response. Adapter detail is never leaked.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StorageErrorBody {
    #[schema(example = "internal server error")]
    pub error: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation { violations } => {
                debug!(count = violations.len(), "payload rejected by validation");
                HttpResponse::UnprocessableEntity().json(ValidationErrorBody {
                    validation_errors: violations.clone(),
                })
            }
            Self::NotFound { resource, id } => {
                debug!(resource, id = id.as_str(), "lookup matched no row");
                HttpResponse::NotFound().finish()
            }
            Self::Storage { message } => {
                error!(message = message.as_str(), "storage failure reached the boundary");
                HttpResponse::InternalServerError().json(StorageErrorBody {
                    error: "internal server error".to_owned(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ViolationCode;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[actix_rt::test]
    async fn validation_maps_to_422_with_full_violation_list() {
        let err = Error::validation(vec![
            FieldViolation::new("title", ViolationCode::MissingField, "missing required field: title"),
            FieldViolation::new("duration", ViolationCode::NotAnInteger, "duration must be an integer"),
        ]);

        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = err.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let body: Value = serde_json::from_slice(&bytes).expect("json body");
        let entries = body
            .get("validationErrors")
            .and_then(Value::as_array)
            .expect("validationErrors array");
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries.first().and_then(|entry| entry.get("field")).and_then(Value::as_str),
            Some("title")
        );
        assert_eq!(
            entries.first().and_then(|entry| entry.get("code")).and_then(Value::as_str),
            Some("missing_field")
        );
    }

    #[rstest]
    #[actix_rt::test]
    async fn not_found_maps_to_empty_404() {
        let err = Error::not_found("movie", 0);

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let response = err.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        assert!(bytes.is_empty());
    }

    #[rstest]
    #[actix_rt::test]
    async fn storage_maps_to_redacted_500() {
        let err = Error::storage("connection refused at pg://secret-host");

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let body: Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body.get("error").and_then(Value::as_str), Some("internal server error"));
        assert!(!String::from_utf8_lossy(&bytes).contains("secret-host"));
    }
}
