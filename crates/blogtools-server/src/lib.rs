//! blogtools-server
//!
//! HTTP API for turning blog posts into embeddable interactive tools.

pub mod config;
pub mod error;
pub mod json;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::http::{HeaderValue, Method, header};
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use state::AppState;

/// CORS for the configured origins. A lone `*` allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/extract", post(routes::extract::extract))
        .route("/ideas", post(routes::content::suggest_ideas))
        .route("/generate", post(routes::content::generate_tool))
        .route("/update", post(routes::content::update_tool))
        .route("/publish", post(routes::tools::publish))
        .route("/recent", get(routes::tools::list_recent))
        .route("/tools/{name}", get(routes::tools::get_tool))
        .layer(axum_mw::from_fn(middleware::audit::request_log))
        .layer(cors)
        .with_state(state)
}
