//! Request extractors that reject with the API error envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` whose rejection is reported as [`AppError::Validation`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
