//! Validated query-string extractor.
//!
//! `ValidatedQuery<T>` deserializes the query string and validates it with
//! the `validator` crate. Both failures answer 400 inside the standard
//! error envelope; validation failures carry field-level details.

use crate::responses::error_response;
use axum::{
    async_trait,
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use techshop_core::{field_errors, ErrorResponse};
use validator::{Validate, ValidationErrors};

/// Query extractor that automatically validates the deserialized value.
///
/// # Example
///
/// ```ignore
/// use techshop_rest::extractors::ValidatedQuery;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Search {
///     #[validate(range(min = 1, max = 100))]
///     size: Option<usize>,
/// }
///
/// async fn search(ValidatedQuery(query): ValidatedQuery<Search>) {
///     // query is guaranteed to be valid here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T> std::ops::Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated query extraction.
#[derive(Debug)]
pub enum ValidatedQueryRejection {
    /// Query string could not be deserialized.
    QueryError(QueryRejection),
    /// Validation error with field-level details.
    ValidationError(ValidationErrors),
}

impl IntoResponse for ValidatedQueryRejection {
    fn into_response(self) -> Response {
        let body = match self {
            Self::QueryError(rejection) => ErrorResponse {
                code: "INVALID_QUERY".to_string(),
                message: format!("Invalid query string: {}", rejection.body_text()),
                details: None,
                trace_id: None,
            },
            Self::ValidationError(errors) => ErrorResponse {
                code: "VALIDATION_ERROR".to_string(),
                message: "Request validation failed".to_string(),
                details: Some(field_errors(&errors)),
                trace_id: None,
            },
        };
        error_response(StatusCode::BAD_REQUEST, body)
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidatedQueryRejection::QueryError)?;

        value
            .validate()
            .map_err(ValidatedQueryRejection::ValidationError)?;

        Ok(ValidatedQuery(value))
    }
}
