//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the host's small HTTP API and stitches it with Leptos
//! SSR rendering under a single Axum router. The browser never talks to the
//! upstream node directly: reads go through `/api/rpc`, artwork through
//! `/api/media`, and writes through the user's wallet.

pub mod media;
pub mod rpc;

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use chain::contracts::ChainConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::RPC_PROXY_PATH;
use crate::state::AppState;

/// API routes shared by the SSR app and the hydrated client.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/config", get(config))
        .route(RPC_PROXY_PATH, post(rpc::proxy))
        .route("/api/media", get(media::redirect))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR + compiled assets under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// `GET /api/config`: chain id, contract addresses and gateway for the client.
async fn config(State(state): State<AppState>) -> Json<ChainConfig> {
    Json(state.config.client_config())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
