use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use super::{ItemPath, Payload};
use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{Movie, MovieFilter, NewMovie},
};

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<MovieFilter>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.catalog.list_movies(&filter).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Payload(new): Payload<NewMovie>,
) -> AppResult<StatusCode> {
    state.catalog.create_movie(new).await?;
    Ok(StatusCode::CREATED)
}

pub async fn fetch(
    State(state): State<Arc<AppState>>,
    ItemPath(id): ItemPath<i32>,
) -> AppResult<Json<Movie>> {
    state.catalog.get_movie(id).await?.map(Json).ok_or(AppError::NotFound)
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    ItemPath(id): ItemPath<i32>,
) -> AppResult<StatusCode> {
    if state.catalog.delete_movie(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
