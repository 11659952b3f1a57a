pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::recommendation::handlers as recommendation_handlers;
use crate::state::AppState;
use crate::store::handlers as store_handlers;
use crate::synthesis::handlers as synthesis_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skill recommendations
        .route(
            "/api/v1/skills/recommendations",
            get(recommendation_handlers::handle_get_recommendations),
        )
        // Active roadmap
        .route(
            "/api/v1/roadmap/generate",
            post(synthesis_handlers::handle_generate_roadmap),
        )
        .route("/api/v1/roadmap", get(store_handlers::handle_get_roadmap))
        .route(
            "/api/v1/roadmap/preferences",
            put(store_handlers::handle_update_preferences),
        )
        .route(
            "/api/v1/roadmap/save",
            post(store_handlers::handle_save_roadmap),
        )
        // Milestone mutations
        .route(
            "/api/v1/roadmap/milestones/swap",
            post(store_handlers::handle_swap_milestones),
        )
        .route(
            "/api/v1/roadmap/milestones/:id/steps",
            post(store_handlers::handle_add_step),
        )
        .route(
            "/api/v1/roadmap/milestones/:id/steps/:step_id",
            patch(store_handlers::handle_update_step).delete(store_handlers::handle_delete_step),
        )
        .route(
            "/api/v1/roadmap/milestones/:id/feedback",
            post(store_handlers::handle_toggle_feedback),
        )
        // Saved roadmaps
        .route(
            "/api/v1/roadmaps",
            get(store_handlers::handle_list_roadmaps),
        )
        .route(
            "/api/v1/roadmaps/:id",
            delete(store_handlers::handle_delete_roadmap),
        )
        .route(
            "/api/v1/roadmaps/:id/load",
            post(store_handlers::handle_load_roadmap),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    use super::*;
    use crate::store::storage::MemoryStorage;
    use crate::store::PreferenceStore;

    fn test_router() -> Router {
        let storage = Arc::new(MemoryStorage::new());
        let state = AppState {
            store: Arc::new(RwLock::new(PreferenceStore::new(storage))),
        };
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "waypoint-api");
    }

    #[tokio::test]
    async fn test_recommendations_require_desired_role() {
        let response = test_router()
            .oneshot(
                Request::get("/api/v1/skills/recommendations?desired_role=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_recommendations_for_known_role() {
        let response = test_router()
            .oneshot(
                Request::get("/api/v1/skills/recommendations?desired_role=data%20scientist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["matched_role"], "data scientist");
        assert!(!body["skills"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_role() {
        let response = test_router()
            .oneshot(post_json(
                "/api/v1/roadmap/generate",
                json!({ "desired_role": "   " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_then_fetch_roadmap() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(post_json(
                "/api/v1/roadmap/generate",
                json!({
                    "desired_role": "Data Scientist",
                    "time_commitment": "30+ hours/week"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let milestones = body["milestones"].as_array().unwrap();
        assert_eq!(milestones.len(), 4);
        assert_eq!(milestones[0]["title"], "Data Analysis Foundations");
        assert_eq!(milestones[0]["timeline"], "3 months");

        // The generated roadmap is now the active one
        let response = router
            .oneshot(Request::get("/api/v1/roadmap").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["desired_role"], "Data Scientist");
        assert_eq!(body["milestones"].as_array().unwrap().len(), 4);
        assert_eq!(body["completed_milestones"], 0);
    }

    #[tokio::test]
    async fn test_save_without_roadmap_is_validation_error() {
        let response = test_router()
            .oneshot(
                Request::post("/api/v1/roadmap/save")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_full_save_list_load_delete_cycle() {
        let router = test_router();

        router
            .clone()
            .oneshot(post_json(
                "/api/v1/roadmap/generate",
                json!({ "desired_role": "UX Designer" }),
            ))
            .await
            .unwrap();

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/roadmap/save")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let saved = body_json(response).await;
        assert_eq!(saved["title"], "UX Designer Roadmap");
        let id = saved["id"].as_str().unwrap().to_string();

        let response = router
            .clone()
            .oneshot(Request::get("/api/v1/roadmaps").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let list = body_json(response).await;
        assert_eq!(list.as_array().unwrap().len(), 1);

        let response = router
            .clone()
            .oneshot(
                Request::post(format!("/api/v1/roadmaps/{id}/load"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .clone()
            .oneshot(
                Request::delete(format!("/api/v1/roadmaps/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Deleting again is a 404
        let response = router
            .oneshot(
                Request::delete(format!("/api/v1/roadmaps/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_step_toggle_updates_progress_over_http() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(post_json(
                "/api/v1/roadmap/generate",
                json!({ "desired_role": "software engineer" }),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        let milestone = &body["milestones"][0];
        let milestone_id = milestone["id"].as_str().unwrap();
        let step_id = milestone["steps"][0]["id"].as_str().unwrap();
        let step_count = milestone["steps"].as_array().unwrap().len();

        let request = Request::builder()
            .method("PATCH")
            .uri(format!(
                "/api/v1/roadmap/milestones/{milestone_id}/steps/{step_id}"
            ))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "completed": true }).to_string()))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        let expected = ((1.0 / step_count as f64) * 100.0).round() as u64;
        assert_eq!(updated["progress"], expected);
        assert_eq!(updated["completed"], false);
    }

    #[tokio::test]
    async fn test_feedback_toggle_over_http() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(post_json(
                "/api/v1/roadmap/generate",
                json!({ "desired_role": "product manager" }),
            ))
            .await
            .unwrap();
        let body = body_json(response).await;
        let milestone_id = body["milestones"][0]["id"].as_str().unwrap().to_string();
        let uri = format!("/api/v1/roadmap/milestones/{milestone_id}/feedback");

        let response = router
            .clone()
            .oneshot(post_json(&uri, json!({ "feedback": "like" })))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["feedback"], "like");

        // Same value again clears it back to null
        let response = router
            .oneshot(post_json(&uri, json!({ "feedback": "like" })))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert!(body["feedback"].is_null());
    }

    #[tokio::test]
    async fn test_swap_endpoint_validates_indices() {
        let router = test_router();
        let response = router
            .oneshot(post_json(
                "/api/v1/roadmap/milestones/swap",
                json!({ "from": 0, "to": 5 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
