//! API route definitions and router builder.

pub mod bookings;
pub mod health;
pub mod inventory;
pub mod sessions;
pub mod turns;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Inventory
        .route("/inventory", get(inventory::list_inventory))
        .route("/inventory/{category}", get(inventory::get_category))
        // Booking dashboard
        .route("/bookings", get(bookings::list_bookings))
        // Stateless turns
        .route("/turns", post(turns::post_turn))
        // Calls
        .route("/sessions", post(sessions::start_session))
        .route(
            "/sessions/{id}",
            get(sessions::get_session).delete(sessions::end_session),
        )
        .route("/sessions/{id}/turns", post(sessions::session_turn));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::with_sample_data())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, json) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn list_inventory() {
        let (status, json) = get_json(app(), "/api/v1/inventory").await;
        assert_eq!(status, StatusCode::OK);
        let listings = json.as_array().unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0]["category"], "SUV");
        assert_eq!(listings[0]["models"][0]["model"], "RAV4 Hybrid");
        assert_eq!(listings[0]["models"][0]["seats"], 5);
    }

    #[tokio::test]
    async fn get_category_case_insensitive() {
        let (status, json) = get_json(app(), "/api/v1/inventory/sedan").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["category"], "Sedan");
        assert_eq!(json["models"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_category_not_found() {
        let (status, json) = get_json(app(), "/api/v1/inventory/convertible").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("convertible"));
    }

    #[tokio::test]
    async fn bookings_start_empty() {
        let (status, json) = get_json(app(), "/api/v1/bookings").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json.as_array().unwrap().is_empty());
    }
}
