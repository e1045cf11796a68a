use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use funnel::HandoffOptions;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config {
    pub mod server_config;
}
mod handlers {
    pub mod onboard_handlers;
}

use config::server_config::ServerConfig;
use handlers::onboard_handlers;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    handoff: HandoffOptions,
}

/// API routes first; anything else is a file from the SPA build, and unknown
/// paths get `index.html` so client-side routes like `/demo/<clinic>` load.
pub fn build_router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        handoff: config.handoff.clone(),
    });

    let index = config.frontend_dist.join("index.html");
    let spa = ServeDir::new(&config.frontend_dist).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/onboard", post(onboard_handlers::submit_onboard))
        .with_state(state)
        .fallback_service(spa)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    if !config.frontend_dist.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}, only the API will answer until the frontend is built",
            config.frontend_dist.display()
        );
    }

    let app = build_router(&config);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "Listening on {} (phone_number alias: {})",
        config.bind_addr, config.handoff.include_phone_number_alias
    );
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn config_for(dist: &std::path::Path) -> ServerConfig {
        ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            frontend_dist: dist.to_path_buf(),
            handoff: HandoffOptions::default(),
        }
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_check_answers() {
        let dist = tempfile::tempdir().unwrap();
        let (status, body) = get_body(build_router(&config_for(dist.path())), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let dist = tempfile::tempdir().unwrap();
        std::fs::write(dist.path().join("index.html"), "<html>zenith spa</html>").unwrap();
        std::fs::write(dist.path().join("app.js"), "console.log(1)").unwrap();

        let uris = [
            "/",
            "/demo/Willow%20Spa",
            "/onboard?clinicName=Willow%20Spa",
            "/schedule?firstName=Jane",
        ];
        for uri in uris {
            let (status, body) = get_body(build_router(&config_for(dist.path())), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, "<html>zenith spa</html>", "{uri}");
        }

        let (status, body) = get_body(build_router(&config_for(dist.path())), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
    }
}
