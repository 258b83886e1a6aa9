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
    models::{Genre, NewGenre},
};

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Genre>>> {
    Ok(Json(state.catalog.list_genres().await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    Payload(new): Payload<NewGenre>,
) -> AppResult<StatusCode> {
    state.catalog.create_genre(new).await?;
    Ok(StatusCode::CREATED)
}

pub async fn fetch(
    State(state): State<Arc<AppState>>,
    ItemPath(id): ItemPath<i32>,
) -> AppResult<Json<Genre>> {
    state.catalog.get_genre(id).await?.map(Json).ok_or(AppError::NotFound)
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    ItemPath(id): ItemPath<i32>,
) -> AppResult<StatusCode> {
    if state.catalog.delete_genre(id).await? {
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
    async fn noir_lifecycle() {
        let server = test_utils::server().await;

        let created = server.post("/genres/").json(&json!({"name": "Noir"})).await;
        created.assert_status(StatusCode::CREATED);

        let genres = server.get("/genres/").await.json::<Vec<Value>>();
        let noir = genres.iter().find(|g| g["name"] == "Noir").expect("created genre listed");
        let id = noir["id"].as_i64().unwrap();
        assert_eq!(noir, &json!({"id": id, "name": "Noir"}));

        let item = server.get(&format!("/genres/{id}")).await;
        item.assert_status_ok();
        item.assert_json(&json!({"id": id, "name": "Noir"}));

        server.delete(&format!("/genres/{id}")).await.assert_status(StatusCode::NO_CONTENT);
        server.get(&format!("/genres/{id}")).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn create_responds_with_empty_body() {
        let server = test_utils::server().await;

        let res = server.post("/genres/").json(&json!({"name": "Western"})).await;
        res.assert_status(StatusCode::CREATED);
        assert!(res.text().is_empty());
    }

    #[tokio::test]
    async fn missing_name_is_stored_as_null() {
        let server = test_utils::server().await;

        server.post("/genres/").json(&json!({})).await.assert_status(StatusCode::CREATED);

        let genres = server.get("/genres/").await.json::<Vec<Value>>();
        assert_eq!(genres.len(), 1);
        assert!(genres[0]["name"].is_null());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_with_empty_body() {
        let server = test_utils::server().await;

        let res = server.get("/genres/12345").await;
        res.assert_status_not_found();
        assert!(res.text().is_empty());

        server.delete("/genres/12345").await.assert_status_not_found();
        server.get("/genres/-").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn malformed_bodies_are_server_faults() {
        let server = test_utils::server().await;

        let wrong_type = server.post("/genres/").json(&json!({"name": 7})).await;
        wrong_type.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(wrong_type.text().is_empty());

        server
            .post("/genres/")
            .json(&json!(["Noir"]))
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        server
            .post("/genres/")
            .text("name=Noir")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        assert!(server.get("/genres/").await.json::<Vec<Value>>().is_empty());
    }
}
