use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        docs::{openapi_yaml, swagger_ui},
        health::livez,
        tasks::{create_task, delete_task, list_tasks, update_task},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/tasks", get(list_tasks))
        .route("/task", post(create_task))
        .route("/task/{id}", put(update_task).delete(delete_task))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .route("/docs", get(swagger_ui))
        .route("/docs.yaml", get(openapi_yaml))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(all(test, feature = "sqlite", feature = "memory"))]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use todolist_core::cache::{Cache, TASKS_KEY};
    use todolist_core::storage::{RepositoryError, Result, RowResult, TaskStore};
    use todolist_core::task::Task;

    use crate::cache::MemoryCache;
    use crate::storage::cached::CachedTaskRepository;
    use crate::storage::SqliteStore;

    const TIMEOUT: Duration = Duration::from_secs(10);

    async fn test_app() -> (Router, Arc<MemoryCache>) {
        let store = Arc::new(SqliteStore::new_in_memory().await.unwrap());
        let cache = Arc::new(MemoryCache::new(100));
        let repository = CachedTaskRepository::new(store, cache.clone(), None);
        let state = AppState::from_repository(Arc::new(repository));
        (create_app(state, TIMEOUT), cache)
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
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

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    // Store whose every statement fails
    struct BrokenStore;

    #[async_trait]
    impl TaskStore for BrokenStore {
        async fn fetch_all(&self) -> Result<Vec<RowResult>> {
            Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
        }

        async fn insert(&self, _task: &Task) -> Result<i64> {
            Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
        }

        async fn update(&self, _task: &Task) -> Result<u64> {
            Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
        }

        async fn delete(&self, _id: i64) -> Result<u64> {
            Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
        }
    }

    fn broken_app() -> Router {
        let repository =
            CachedTaskRepository::new(Arc::new(BrokenStore), Arc::new(MemoryCache::new(10)), None);
        create_app(AppState::from_repository(Arc::new(repository)), TIMEOUT)
    }

    // Store that hands out id 7 and otherwise holds nothing
    struct FixedIdStore;

    #[async_trait]
    impl TaskStore for FixedIdStore {
        async fn fetch_all(&self) -> Result<Vec<RowResult>> {
            Ok(Vec::new())
        }

        async fn insert(&self, _task: &Task) -> Result<i64> {
            Ok(7)
        }

        async fn update(&self, _task: &Task) -> Result<u64> {
            Ok(0)
        }

        async fn delete(&self, _id: i64) -> Result<u64> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_livez() {
        let (app, _) = test_app().await;

        let (status, _) = send(&app, empty_request("GET", "/livez")).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_docs_yaml_describes_task_routes() {
        let (app, _) = test_app().await;

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/docs.yaml"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/yaml; charset=utf-8"
        );
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let yaml = String::from_utf8(body.to_vec()).unwrap();
        assert!(yaml.starts_with("openapi: 3"));
        assert!(yaml.contains("/api/tasks:"));
        assert!(yaml.contains("/api/task/{id}:"));
    }

    #[tokio::test]
    async fn test_docs_page_loads_yaml() {
        let (app, _) = test_app().await;

        let response = app.oneshot(empty_request("GET", "/docs")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("SwaggerUIBundle"));
        assert!(html.contains(r#"url: "docs.yaml""#));
    }

    #[tokio::test]
    async fn test_list_tasks_empty() {
        let (app, cache) = test_app().await;

        let (status, json) = send(&app, empty_request("GET", "/api/tasks")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"message": "Success", "data": []}));
        // An empty list is still cached
        assert_eq!(cache.get(TASKS_KEY).await.unwrap(), Some(b"[]".to_vec()));
    }

    #[tokio::test]
    async fn test_create_task_invalidates_snapshot() {
        let (app, cache) = test_app().await;
        send(&app, empty_request("GET", "/api/tasks")).await;
        assert!(cache.get(TASKS_KEY).await.unwrap().is_some());

        let (status, json) = send(
            &app,
            json_request(
                "POST",
                "/api/task",
                serde_json::json!({"task_name": "buy milk", "is_done": false}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Task Created");
        assert_eq!(json["data"]["task_name"], "buy milk");
        assert_eq!(json["data"]["is_done"], false);
        assert!(json["data"]["id"].as_i64().unwrap() > 0);
        assert!(cache.get(TASKS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_created_task_is_listed() {
        let (app, _) = test_app().await;
        let (_, created) = send(
            &app,
            json_request("POST", "/api/task", serde_json::json!({"task_name": "walk dog"})),
        )
        .await;

        let (status, json) = send(&app, empty_request("GET", "/api/tasks")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], serde_json::json!([created["data"]]));
    }

    #[tokio::test]
    async fn test_create_task_missing_name_is_unprocessable() {
        let (app, _) = test_app().await;

        let (status, json) = send(
            &app,
            json_request("POST", "/api/task", serde_json::json!({"is_done": true})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Invalid Request Data",
                "error": [{"field": "task_name", "message": "task_name is required"}]
            })
        );
    }

    #[tokio::test]
    async fn test_create_task_malformed_json_is_unprocessable() {
        let (app, _) = test_app().await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/task")
            .header("Content-Type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, json) = send(&app, request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json, serde_json::json!({"message": "Invalid Request Data"}));
    }

    #[tokio::test]
    async fn test_update_task() {
        let (app, _) = test_app().await;
        let (_, created) = send(
            &app,
            json_request("POST", "/api/task", serde_json::json!({"task_name": "a"})),
        )
        .await;
        let id = created["data"]["id"].as_i64().unwrap();

        let (status, json) = send(
            &app,
            json_request(
                "PUT",
                &format!("/api/task/{id}"),
                serde_json::json!({"task_name": "a", "is_done": true}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Task Updated",
                "data": {"id": id, "task_name": "a", "is_done": true}
            })
        );
    }

    #[tokio::test]
    async fn test_update_missing_task_reports_failure() {
        let (app, cache) = test_app().await;
        send(&app, empty_request("GET", "/api/tasks")).await;

        let (status, json) = send(
            &app,
            json_request(
                "PUT",
                "/api/task/42",
                serde_json::json!({"task_name": "x", "is_done": true}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "message": "error, update task failed",
                "data": {"status": false}
            })
        );
        // Invalidation happens even when nothing changed
        assert!(cache.get(TASKS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_with_non_integer_id_is_not_found() {
        let (app, _) = test_app().await;

        let (status, json) = send(
            &app,
            json_request("PUT", "/api/task/abc", serde_json::json!({"task_name": "x"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, serde_json::json!({"message": "To do list not found"}));
    }

    #[tokio::test]
    async fn test_update_validates_body_before_id() {
        let (app, _) = test_app().await;

        let (status, _) = send(
            &app,
            json_request("PUT", "/api/task/abc", serde_json::json!({"task_name": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_delete_task() {
        let (app, _) = test_app().await;
        let (_, created) = send(
            &app,
            json_request("POST", "/api/task", serde_json::json!({"task_name": "a"})),
        )
        .await;
        let id = created["data"]["id"].as_i64().unwrap();

        let (status, json) = send(&app, empty_request("DELETE", &format!("/api/task/{id}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({"message": "Task Deleted", "data": {"status": true}})
        );

        let (_, list) = send(&app, empty_request("GET", "/api/tasks")).await;
        assert_eq!(list["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_delete_missing_task_reports_failure() {
        let (app, _) = test_app().await;

        let (status, json) = send(&app, empty_request("DELETE", "/api/task/7")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "message": "error, delete task failed",
                "data": {"status": false}
            })
        );
    }

    #[tokio::test]
    async fn test_delete_with_non_integer_id_is_not_found() {
        let (app, _) = test_app().await;

        let (status, _) = send(&app, empty_request("DELETE", "/api/task/1.5")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_store_failure_is_internal_error() {
        let app = broken_app();

        let (status, json) = send(&app, empty_request("GET", "/api/tasks")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({"message": "Internal Server Error"}));
    }

    #[tokio::test]
    async fn test_create_store_failure_reports_failure() {
        let app = broken_app();

        let (status, json) = send(
            &app,
            json_request("POST", "/api/task", serde_json::json!({"task_name": "a"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            serde_json::json!({
                "message": "error, create task failed",
                "data": {"status": false}
            })
        );
    }

    #[tokio::test]
    async fn test_create_task_returns_stored_task() {
        let repository =
            CachedTaskRepository::new(Arc::new(FixedIdStore), Arc::new(MemoryCache::new(10)), None);
        let app = create_app(AppState::from_repository(Arc::new(repository)), TIMEOUT);

        let (status, json) = send(
            &app,
            json_request(
                "POST",
                "/api/task",
                serde_json::json!({"task_name": "buy milk", "is_done": false}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Task Created",
                "data": {"id": 7, "task_name": "buy milk", "is_done": false}
            })
        );
    }

    #[tokio::test]
    async fn test_list_survives_unrepresentable_cache_ttl() {
        let store = Arc::new(SqliteStore::new_in_memory().await.unwrap());
        store.insert(&Task::new("buy milk", false)).await.unwrap();
        let cache = Arc::new(MemoryCache::new(10));
        let repository = CachedTaskRepository::new(
            store,
            cache.clone(),
            Some(Duration::from_secs(u64::MAX)),
        );
        let app = create_app(AppState::from_repository(Arc::new(repository)), TIMEOUT);

        for _ in 0..2 {
            let (status, json) = send(&app, empty_request("GET", "/api/tasks")).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["data"][0]["task_name"], "buy milk");
        }
        assert!(cache.get(TASKS_KEY).await.unwrap().is_some());
    }
}
