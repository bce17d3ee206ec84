//! HTTP layer - Axum router, shared state and handlers.
//!
//! This is a thin transport over the service layer: bodies are decoded into
//! domain values by the assembler, and domain errors become 400/404 responses.

/// Wire <-> domain conversions
pub mod assembler;
/// Generic board/panel handlers
pub mod equipment;
/// HTTP error mapping
pub mod error;
/// Path and body extractors with JSON rejections
pub mod extractors;
/// Request and response bodies
pub mod resources;

use crate::{
    core::state::{BoardState, PanelState},
    repository::{SeaOrmBoardRepository, SeaOrmPanelRepository},
    service::{BoardService, PanelService},
};
use axum::{Json, Router, extract::FromRef, routing::get};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};

/// Shared data available to all handlers.
#[derive(Clone, FromRef)]
pub struct AppState {
    /// Electronic board operations
    pub boards: BoardService,
    /// Electronic panel operations
    pub panels: PanelService,
}

impl AppState {
    /// Wires the SeaORM repositories and services on top of one connection pool.
    #[must_use]
    pub fn new(database: DatabaseConnection) -> Self {
        Self {
            boards: BoardService::new(Arc::new(SeaOrmBoardRepository::new(database.clone()))),
            panels: PanelService::new(Arc::new(SeaOrmPanelRepository::new(database))),
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Boards
        .route(
            "/boards",
            get(equipment::list_equipment::<BoardState>)
                .post(equipment::create_equipment::<BoardState>),
        )
        .route(
            "/boards/{id}",
            get(equipment::get_equipment::<BoardState>)
                .put(equipment::update_equipment::<BoardState>)
                .delete(equipment::delete_equipment::<BoardState>),
        )
        // Panels
        .route(
            "/panels",
            get(equipment::list_equipment::<PanelState>)
                .post(equipment::create_equipment::<PanelState>),
        )
        .route(
            "/panels/{id}",
            get(equipment::get_equipment::<PanelState>)
                .put(equipment::update_equipment::<PanelState>)
                .delete(equipment::delete_equipment::<PanelState>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use sea_orm::ConnectionTrait;
    use tower::ServiceExt;

    const BOARD_BODY: &str = r#"{
        "name": "Main Distribution Panel",
        "location": "Building A - Basement",
        "brand": "Siemens",
        "amperage_capacity": 400.0,
        "state": "Operative",
        "year_manufactured": 2020,
        "year_installed": 2021
    }"#;

    async fn test_app() -> Router {
        let db = setup_test_db().await.unwrap();
        build_router(AppState::new(db))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(app: &Router, collection: &str) -> Value {
        let response = app
            .clone()
            .oneshot(json_request("POST", &format!("/{collection}"), BOARD_BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_app().await;
        let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_board_crud() {
        let app = test_app().await;

        let created = create(&app, "boards").await;
        assert_eq!(created["state"], "operative");
        let id = created["id"].as_str().unwrap().to_string();

        // Get
        let response = app
            .clone()
            .oneshot(empty_request("GET", &format!("/boards/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);

        // List
        let response = app
            .clone()
            .oneshot(empty_request("GET", "/boards"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let list = body_json(response).await;
        assert_eq!(list["total"], 1);
        assert_eq!(list["boards"][0], created);

        // Partial update
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/boards/{id}"),
                r#"{"state": "maintenance", "location": "Building A - Floor 2"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["state"], "maintenance");
        assert_eq!(updated["location"], "Building A - Floor 2");
        assert_eq!(updated["name"], "Main Distribution Panel");

        // Delete, then delete again
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/boards/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(empty_request("DELETE", &format!("/boards/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(empty_request("GET", &format!("/boards/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_input_is_bad_request() {
        let app = test_app().await;

        let body = BOARD_BODY.replace("\"year_installed\": 2021", "\"year_installed\": 2019");
        let response = app
            .clone()
            .oneshot(json_request("POST", "/panels", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = body_json(response).await;
        assert_eq!(error["status"], 400);
        assert!(
            error["error"]
                .as_str()
                .unwrap()
                .contains("year_installed must be >= year_manufactured")
        );

        let body = BOARD_BODY.replace("\"Operative\"", "\"retired\"");
        let response = app
            .clone()
            .oneshot(json_request("POST", "/panels", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = body_json(response).await;
        assert!(
            error["error"]
                .as_str()
                .unwrap()
                .contains("Valid values: operative, maintenance, out_of_service")
        );

        // Ordering is checked against the stored manufacture year
        let created = create(&app, "panels").await;
        let id = created["id"].as_str().unwrap();
        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/panels/{id}"),
                r#"{"year_installed": 2019}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unparseable_id_and_body_get_json_errors() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/boards/not-a-uuid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = body_json(response).await;
        assert_eq!(error["status"], 400);
        assert!(error["error"].as_str().unwrap().contains("not-a-uuid"));

        let response = app
            .clone()
            .oneshot(json_request("DELETE", "/panels/123", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["status"], 400);

        // Missing required fields
        let response = app
            .clone()
            .oneshot(json_request("POST", "/boards", r#"{"name": "x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = body_json(response).await;
        assert_eq!(error["status"], 400);
        assert!(error["error"].as_str().unwrap().contains("location"));

        // Not JSON at all
        let created = create(&app, "boards").await;
        let id = created["id"].as_str().unwrap();
        let response = app
            .oneshot(json_request("PUT", &format!("/boards/{id}"), "{ not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["status"], 400);
    }

    #[tokio::test]
    async fn test_storage_failure_hides_database_details() {
        let db = setup_test_db().await.unwrap();
        let app = build_router(AppState::new(db.clone()));
        db.execute_unprepared("DROP TABLE electronic_boards")
            .await
            .unwrap();

        let response = app.oneshot(empty_request("GET", "/boards")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "an internal error occurred", "status": 500 })
        );
    }

    #[tokio::test]
    async fn test_panels_are_separate_from_boards() {
        let app = test_app().await;
        let created = create(&app, "panels").await;
        let id = created["id"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/panels"))
            .await
            .unwrap();
        let list = body_json(response).await;
        assert_eq!(list["total"], 1);
        assert_eq!(list["panels"][0]["id"], id);

        let response = app
            .clone()
            .oneshot(empty_request("GET", &format!("/boards/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(json_request("PUT", &format!("/boards/{id}"), "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
