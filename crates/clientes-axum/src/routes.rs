//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `ClienteService`.

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::get;
use clientes_core::contracts::http::clientes::{CLIENTE_ITEM_PATH, CLIENTES_PATH, HEALTH_PATH};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::error::panic_response;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = match config {
        CorsConfig::AllowAll => CorsLayer::new().allow_origin(Any),
        CorsConfig::AllowOrigins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %o, "ignoring unparseable CORS origin");
                        None
                    }
                })
                .collect();
            CorsLayer::new().allow_origin(allowed)
        }
    };
    layer
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::LOCATION])
}

/// The `/clientes` resource.
///
/// Returns a router typed as `Router<AppState>` WITHOUT `.with_state()`
/// applied; the caller provides the state.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            CLIENTES_PATH,
            get(handlers::clientes::list).post(handlers::clientes::create),
        )
        .route(
            CLIENTE_ITEM_PATH,
            get(handlers::clientes::get)
                .delete(handlers::clientes::remove)
                .patch(handlers::clientes::patch),
        )
}

/// Create the main Axum router with all routes and middleware.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route(HEALTH_PATH, get(health_check))
        .merge(api_routes().with_state(state))
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
