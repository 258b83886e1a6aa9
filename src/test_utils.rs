use std::sync::Arc;

use axum_test::TestServer;

use crate::{AppState, catalog::Catalog, db};

/// Fresh in-memory store with the schema applied.
pub async fn catalog() -> Catalog {
    let db = db::connect_and_migrate("sqlite::memory:").await.expect("in-memory database");
    Catalog::new(db)
}

pub async fn server() -> TestServer {
    let state = Arc::new(AppState { catalog: catalog().await });
    TestServer::new(crate::router(state)).expect("test server")
}
