//! Validating extractors.
//!
//! Each wraps an axum extractor: the payload is parsed into the declared shape,
//! then [`Validate`] checks field constraints. Either failure rejects the request
//! with [`ApiError`] before the handler body runs.

use std::collections::BTreeSet;

use axum::{
    Form, Json, async_trait,
    extract::{
        FromRequest, FromRequestParts, Path, Query, Request,
        path::ErrorKind as PathErrorKind,
        rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use storefront_core::{FieldError, Validate, ValidationErrors};

use crate::app::errors::ApiError;

/// JSON body parsed into `T` and validated.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value.validate().map_err(|e| e.nest("body"))?;
        Ok(Self(value))
    }
}

/// Form-encoded body parsed into `T` and validated.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(form_rejection)?;
        value.validate().map_err(|e| e.nest("form"))?;
        Ok(Self(value))
    }
}

/// JSON body validated as a full `T`, remembering which keys the client sent.
///
/// Used for partial updates: the response only echoes the fields that were
/// explicitly present in the body, not those filled in by defaults.
#[derive(Debug, Clone)]
pub struct PatchJson<T> {
    pub value: T,
    pub set_fields: BTreeSet<String>,
}

#[async_trait]
impl<T, S> FromRequest<S> for PatchJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(fields) = Json::<Map<String, Value>>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        let set_fields = fields.keys().cloned().collect();
        let value: T = serde_json::from_value(Value::Object(fields))
            .map_err(|e| ValidationErrors::single(FieldError::parse("body", e.to_string())))?;
        value.validate().map_err(|e| e.nest("body"))?;

        Ok(Self { value, set_fields })
    }
}

/// Query string as ordered key/value pairs, allowing repeated keys (`?q=a&q=b`).
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl QueryPairs {
    /// Every value for `key`, in request order.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(query_rejection)?;
        Ok(Self(pairs))
    }
}

/// Path parameters parsed into `T`; a parse failure is reported at `path.<name>`.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection)?;
        Ok(Self(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::MissingJsonContentType(r) => ApiError::UnsupportedMediaType(r.body_text()),
        other => parse_error("body", other.body_text()),
    }
}

fn form_rejection(rejection: FormRejection) -> ApiError {
    match rejection {
        FormRejection::InvalidFormContentType(r) => ApiError::UnsupportedMediaType(r.body_text()),
        other => parse_error("form", other.body_text()),
    }
}

fn path_rejection(rejection: PathRejection) -> ApiError {
    let loc = match &rejection {
        PathRejection::FailedToDeserializePathParams(e) => match e.kind() {
            PathErrorKind::ParseErrorAtKey { key, .. } => format!("path.{key}"),
            _ => "path".to_string(),
        },
        _ => "path".to_string(),
    };
    parse_error(&loc, rejection.body_text())
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
    parse_error("query", rejection.body_text())
}

fn parse_error(loc: &str, message: String) -> ApiError {
    ApiError::Validation(ValidationErrors::single(FieldError::parse(loc, message)))
}
