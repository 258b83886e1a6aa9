pub mod directors;
pub mod genres;
pub mod movies;

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Any rejection (wrong content type, bad syntax, wrong
/// shape) becomes an opaque 500 rather than axum's default 4xx.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Payload<T>(pub T);

/// Item path segment. A segment that is not a valid id names no record, so
/// it answers 404 like any other missing row.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ItemPath<T>(pub T);
