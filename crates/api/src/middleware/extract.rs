//! # Request Extractors
//!
//! Wrappers around axum's `Json`, `Path` and `Query` extractors that reject
//! through [`AppError`], so a malformed body, id or query string gets the
//! same `400 {"error": ...}` response as any other validation failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::middleware::error_handling::AppError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
