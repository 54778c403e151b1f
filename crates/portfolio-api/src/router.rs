//! Router configuration and server setup.

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tokio::sync::watch;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use portfolio_core::SceneLoop;

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Creates the router: page routes, JSON API, and static assets as fallback.
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.asset_dir);
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config));

    Router::new()
        // Page
        .route("/", get(handlers::index))
        .route("/contact", post(handlers::submit_form))
        // Health
        .route("/api/health", get(handlers::health))
        // Catalogue
        .route("/api/profile", get(handlers::profile))
        .route("/api/skills", get(handlers::skills))
        .route("/api/certifications", get(handlers::certifications))
        .route("/api/stats", get(handlers::stats))
        .route("/api/contact-channels", get(handlers::contact_channels))
        .route("/api/projects", get(handlers::list_projects))
        // Contact
        .route("/api/contact", post(handlers::submit_contact))
        // Scene
        .route("/api/scene", get(handlers::scene))
        .route("/api/scene/live", get(handlers::live_scene))
        // Resumes, images and anything else on disk
        .fallback_service(assets)
        .layer(middleware)
        .with_state(state)
}

/// Starts the server and the live scene loop; stops both on Ctrl-C.
pub async fn serve(state: AppState) -> Result<(), std::io::Error> {
    let addr = state.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        %addr,
        assets = %state.config.asset_dir.display(),
        transport = state.transport.name(),
        "portfolio server listening"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scene_loop = SceneLoop::new(Arc::clone(&state.scene), shutdown_rx);
    let scene_task = tokio::spawn(scene_loop.run());

    let result = axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    let _ = shutdown_tx.send(true);
    match scene_task.await {
        Ok(frames) => debug!(frames, "live scene stopped"),
        Err(err) => warn!(error = %err, "live scene task failed"),
    }
    info!("portfolio server stopped");
    result
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::make_test_state;
    use axum::http::{HeaderName, StatusCode};
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        TestServer::new(create_router(make_test_state())).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = server().get("/api/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(!body["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_page_contains_every_anchor() {
        let response = server().get("/").await;
        response.assert_status_ok();

        let html = response.text();
        for anchor in ["home", "about", "skills", "certifications", "projects", "contact"] {
            assert!(html.contains(&format!("id=\"{}\"", anchor)), "missing #{}", anchor);
        }
    }

    #[tokio::test]
    async fn test_page_project_expansion() {
        let server = server();

        let collapsed = server.get("/").await.text();
        let expanded = server.get("/").add_query_param("projects", "all").await.text();

        assert_eq!(collapsed.matches("class=\"project-card reveal\"").count(), 3);
        assert_eq!(expanded.matches("class=\"project-card reveal\"").count(), 7);
    }

    #[tokio::test]
    async fn test_projects_endpoint() {
        let server = server();

        let body: serde_json::Value = server.get("/api/projects").await.json();
        assert_eq!(body["visible"], 3);
        assert!(body["projects"][0]["title"]
            .as_str()
            .unwrap()
            .ends_with("Employee Attrition Analysis"));

        let body: serde_json::Value = server
            .get("/api/projects")
            .add_query_param("expanded", true)
            .await
            .json();
        assert_eq!(body["visible"], 7);
        assert_eq!(body["toggle_label"], "View Less Projects");
    }

    #[tokio::test]
    async fn test_catalogue_endpoints() {
        let server = server();

        let profile: serde_json::Value = server.get("/api/profile").await.json();
        assert_eq!(profile["name"], "Akash Kumar Nayak");

        let channels: serde_json::Value = server.get("/api/contact-channels").await.json();
        assert_eq!(channels["total"], channels["channels"].as_array().unwrap().len());

        server.get("/api/skills").await.assert_status_ok();
        server.get("/api/certifications").await.assert_status_ok();
        server.get("/api/stats").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_contact_success() {
        let response = server()
            .post("/api/contact")
            .json(&json!({
                "name": "Jane",
                "email": "jane@example.com",
                "subject": "Hello",
                "message": "Test message"
            }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["notification"]["kind"], "success");
        assert!(body["receipt"]["id"].is_string());
    }

    #[tokio::test]
    async fn test_contact_invalid_returns_400() {
        let response = server()
            .post("/api/contact")
            .json(&json!({
                "name": "",
                "email": "jane@example.com",
                "subject": "Hello",
                "message": "Test message"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("Name is required"));
    }

    #[tokio::test]
    async fn test_contact_malformed_body_returns_json_error() {
        let response = server()
            .post("/api/contact")
            .bytes(axum::body::Bytes::from_static(b"{\"name\": "))
            .content_type("application/json")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["error"].as_str().unwrap().starts_with("bad request:"));

        let response = server().post("/api/contact").text("hello").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_form_post_renders_toast() {
        let response = server()
            .post("/contact")
            .form(&[
                ("name", "Jane"),
                ("email", "jane@example.com"),
                ("subject", "Hello"),
                ("message", "Test message"),
            ])
            .await;
        response.assert_status_ok();
        assert!(response.text().contains("Message sent!"));
    }

    #[tokio::test]
    async fn test_scene_endpoint() {
        let server = server();

        let body: serde_json::Value = server
            .get("/api/scene")
            .add_query_param("frames", 60)
            .add_query_param("seed", 3)
            .await
            .json();
        assert_eq!(body["frames"], 60);
        assert_eq!(body["particle_count"], 2000);
        assert_eq!(body["particles"].as_array().unwrap().len(), 32);

        server
            .get("/api/scene")
            .add_query_param("frames", 100_000)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let response = server()
            .get("/api/health")
            .add_header(
                HeaderName::from_static("origin"),
                HeaderValue::from_static("http://example.com"),
            )
            .await;

        assert!(response.headers().contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_missing_asset_is_404() {
        server()
            .get("/no-such-file.pdf")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
