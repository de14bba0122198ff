//! HTTP adapters - REST API implementations.
//!
//! [`app_router`] assembles the planning routes with tracing, timeout and
//! CORS layers.

pub mod planning;

pub use planning::{planning_routes, PlanningApiError, PlanningAppState};

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Builds the full application router.
pub fn app_router(state: PlanningAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/life-areas", get(planning::list_life_areas))
        .nest("/api/sessions", planning_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if server.is_production() {
            return CorsLayer::new();
        }
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::gateway::AiGoalGateway;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::handlers::planning::GenerationRunner;
    use crate::config::Environment;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        app_with(&ServerConfig::default())
    }

    fn app_with(server: &ServerConfig) -> Router {
        let gateway = AiGoalGateway::new(Arc::new(MockAIProvider::new()));
        let runner = GenerationRunner::new(Arc::new(gateway), Duration::from_secs(5));
        let state = PlanningAppState::new(Arc::new(InMemorySessionStore::new()), runner);
        app_router(state, server)
    }

    fn health_from(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn life_areas_catalog_lists_areas_and_labels() {
        let response = app()
            .oneshot(Request::builder().uri("/api/life-areas").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["life_areas"].as_array().unwrap().len(), 8);
        assert_eq!(body["score_labels"].as_array().unwrap().len(), 5);
        assert_eq!(body["min_rated_areas"], 3);
    }

    #[tokio::test]
    async fn sessions_are_nested_under_api() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sessions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn configured_origins_are_allowed_and_invalid_ones_skipped() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173,bad\norigin".to_string()),
            ..Default::default()
        };
        let app = app_with(&server);

        let response = app.clone().oneshot(health_from("http://localhost:5173")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );

        let response = app.oneshot(health_from("http://elsewhere.test")).await.unwrap();
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn production_without_origins_allows_no_cross_origin() {
        let server = ServerConfig {
            environment: Environment::Production,
            ..Default::default()
        };

        let response = app_with(&server).oneshot(health_from("http://localhost:5173")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn development_without_origins_is_permissive() {
        let response = app().oneshot(health_from("http://localhost:5173")).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
