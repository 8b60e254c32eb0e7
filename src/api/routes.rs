//! API Routes
//!
//! Configures the Axum router with all text metrics endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    character_count_handler, create_text_handler, delete_text_handler, health_handler,
    list_texts_handler, longest_words_handler, paragraph_count_handler, sentence_count_handler,
    stats_handler, update_text_handler, word_count_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/texts", post(create_text_handler).get(list_texts_handler))
        .route(
            "/texts/:id",
            put(update_text_handler).delete(delete_text_handler),
        )
        .route("/texts/:id/words", get(word_count_handler))
        .route("/texts/:id/characters", get(character_count_handler))
        .route("/texts/:id/sentences", get(sentence_count_handler))
        .route("/texts/:id/paragraphs", get(paragraph_count_handler))
        .route("/texts/:id/longest", get(longest_words_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::cache::MemoryCache;
    use crate::config::Config;
    use crate::service::AnalysisService;
    use crate::store::MemoryStore;

    fn create_test_app() -> Router {
        let store = Arc::new(MemoryStore::new());
        let cache = Arc::new(MemoryCache::new(100));
        let service = Arc::new(AnalysisService::new(
            store,
            cache.clone(),
            &Config::default(),
        ));
        create_router(AppState::new(service, cache))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/texts")
                    .header("content-type", "application/json")
                    .header("x-user-id", "user1")
                    .body(Body::from(r#"{"content":"Hello world"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_metric_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/texts/nonexistent/words")
                    .header("x-user-id", "user1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
