//! Router assembly

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::state::AppState;
use super::v1;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .nest("/v1", v1::create_v1_router())
        .route(
            "/ws/notifications/{post_id}",
            get(v1::notifications::subscribe),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        create_router(crate::create_app_state().await.unwrap())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Token {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn signup_and_login(app: &Router, username: &str) -> String {
        let response = app
            .clone()
            .oneshot(post_json(
                "/v1/auth/signup",
                None,
                json!({
                    "username": username,
                    "email": format!("{}@example.com", username),
                    "password": "correct horse",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(post_json(
                "/v1/auth/login",
                None,
                json!({ "username": username, "password": "correct horse" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        body_json(response).await["data"]["token"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let response = app()
            .await
            .oneshot(post_json(
                "/v1/likes",
                None,
                json!({ "post": uuid::Uuid::new_v4() }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["status"], false);
        assert_eq!(body["message"], "fail");
        assert_eq!(
            body["error"],
            "Authentication credentials were not provided"
        );
    }

    #[tokio::test]
    async fn test_signup_post_like_flow() {
        let app = app().await;
        let token = signup_and_login(&app, "alice").await;

        let response = app
            .clone()
            .oneshot(post_json(
                "/v1/posts",
                Some(&token),
                json!({ "title": "hello", "content": "world" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let post_id = body_json(response).await["data"]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(post_json("/v1/likes", Some(&token), json!({ "post": post_id })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], true);
        assert_eq!(body["data"]["post"], post_id.as_str());

        // Liking the same post twice is rejected.
        let response = app
            .clone()
            .oneshot(post_json("/v1/likes", Some(&token), json!({ "post": post_id })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Like already exists for this post.");
    }

    #[tokio::test]
    async fn test_postlist_requires_api_key() {
        let app = app().await;
        let token = signup_and_login(&app, "bob").await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/postlist")
                    .header(header::AUTHORIZATION, format!("Token {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "API key not provided");
    }
}
