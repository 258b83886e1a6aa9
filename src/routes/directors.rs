use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use super::{ItemPath, Payload};
use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{Director, NewDirector},
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Director>>> {
    Ok(Json(state.catalog.list_directors().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Payload(new): Payload<NewDirector>,
) -> AppResult<StatusCode> {
    state.catalog.create_director(new).await?;
    Ok(StatusCode::CREATED)
}

pub async fn fetch(
    State(state): State<Arc<AppState>>,
    ItemPath(id): ItemPath<i32>,
) -> AppResult<Json<Director>> {
    state.catalog.get_director(id).await?.map(Json).ok_or(AppError::NotFound)
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    ItemPath(id): ItemPath<i32>,
) -> AppResult<StatusCode> {
    if state.catalog.delete_director(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::test_utils;

    #[tokio::test]
    async fn created_director_round_trips() {
        let server = test_utils::server().await;

        server
            .post("/directors/")
            .json(&json!({"name": "Billy Wilder", "nationality": "AT"}))
            .await
            .assert_status(StatusCode::CREATED);

        let directors = server.get("/directors/").await.json::<Vec<Value>>();
        assert_eq!(directors.len(), 1);
        assert_eq!(directors[0]["name"], "Billy Wilder");
        assert!(directors[0].get("nationality").is_none());
    }

    #[tokio::test]
    async fn supplied_id_is_used_and_duplicates_fail() {
        let server = test_utils::server().await;

        server
            .post("/directors/")
            .json(&json!({"id": 7, "name": "Agnès Varda"}))
            .await
            .assert_status(StatusCode::CREATED);
        server.get("/directors/7").await.assert_json(&json!({"id": 7, "name": "Agnès Varda"}));

        server
            .post("/directors/")
            .json(&json!({"id": 7, "name": "Someone Else"}))
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        server.get("/directors/7").await.assert_json(&json!({"id": 7, "name": "Agnès Varda"}));
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let server = test_utils::server().await;
        server.post("/directors/").json(&json!({"id": 3, "name": "Ozu"})).await;

        server.delete("/directors/3").await.assert_status(StatusCode::NO_CONTENT);
        server.delete("/directors/3").await.assert_status_not_found();
        server.get("/directors/3").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn collection_is_served_without_trailing_slash() {
        let server = test_utils::server().await;

        let created = server.post("/directors").json(&json!({"name": "Kurosawa"})).await;
        created.assert_status(StatusCode::CREATED);
        assert_eq!(server.get("/directors").await.json::<Vec<Value>>().len(), 1);
    }

    #[tokio::test]
    async fn non_integer_id_is_not_found() {
        let server = test_utils::server().await;

        server.get("/directors/abc").await.assert_status_not_found();
        server.delete("/directors/abc").await.assert_status_not_found();
    }
}
