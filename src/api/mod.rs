//! HTTP surface of the service.

mod error;
mod health;
mod middleware;
mod state;
mod tcl;
mod velov;

pub use error::{ApiError, ErrorBody};
pub use state::AppState;

use anyhow::Result;
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Builds the router. When `cors_allowed_origin` is set, browsers on that
/// origin may call the API.
pub fn create_router(state: Arc<AppState>, cors_allowed_origin: Option<&str>) -> Result<Router> {
    let router = Router::new()
        .route("/", get(health::status))
        .route("/tcl/stop/{stop_id}", get(tcl::stop))
        .route("/velov/station/{station_id}", get(velov::station))
        .with_state(state);

    let router = match cors_allowed_origin {
        Some(origin) => router.layer(
            CorsLayer::new()
                .allow_origin(HeaderValue::from_str(origin)?)
                .allow_methods([Method::GET]),
        ),
        None => router,
    };

    Ok(router.layer(axum::middleware::from_fn(middleware::log_requests)))
}
